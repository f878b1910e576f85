//! Content page registry.
//!
//! Every content page is a static fragment template that fills the shell's
//! content slot. The registry is built once from `PagesConfig` and decides
//! which routes exist and which fragment each one renders.

use serde::{Deserialize, Serialize};

use crate::config::PagesConfig;

/// Template rendered in place of pages that are declared but not written yet.
pub const COMING_SOON_TEMPLATE: &str = "coming_soon.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    DevopsConcepts,
    Kubernetes,
    IngressGateway,
    Kong,
    AlibabaAck,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::DevopsConcepts,
        Page::Kubernetes,
        Page::IngressGateway,
        Page::Kong,
        Page::AlibabaAck,
    ];

    /// Name used in config files.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::DevopsConcepts => "devops-concepts",
            Page::Kubernetes => "kubernetes",
            Page::IngressGateway => "ingress-gateway",
            Page::Kong => "kong",
            Page::AlibabaAck => "alibaba-ack",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::DevopsConcepts => "/devops-concepts",
            Page::Kubernetes => "/kubernetes",
            Page::IngressGateway => "/ingress-gateway",
            Page::Kong => "/kong",
            Page::AlibabaAck => "/alibaba-ack",
        }
    }

    /// Short paths served with the same content as `path`.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Page::IngressGateway => &["/ingress"],
            Page::AlibabaAck => &["/ack"],
            _ => &[],
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            Page::Home => "home.html",
            Page::DevopsConcepts => "devops_concepts.html",
            Page::Kubernetes => "kubernetes.html",
            Page::IngressGateway => "ingress_gateway.html",
            Page::Kong => "kong.html",
            Page::AlibabaAck => "alibaba_ack.html",
        }
    }

    /// Navigation bar label
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::DevopsConcepts => "DevOps Concepts",
            Page::Kubernetes => "Kubernetes",
            Page::IngressGateway => "Ingress & Gateway API",
            Page::Kong => "Kong",
            Page::AlibabaAck => "Alibaba ACK",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Welcome to DevOps Learning Platform",
            Page::DevopsConcepts => "DevOps Concepts & Tools",
            Page::Kubernetes => "Kubernetes Architecture",
            Page::IngressGateway => "Ingress & Gateway API",
            Page::Kong => "Kong API Gateway",
            Page::AlibabaAck => "Alibaba Cloud ACK",
        }
    }
}

/// Which fragment fills the content slot for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Content,
    ComingSoon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub page: Page,
    pub fragment: Fragment,
}

impl PageEntry {
    pub fn template(&self) -> &'static str {
        match self.fragment {
            Fragment::Content => self.page.template(),
            Fragment::ComingSoon => COMING_SOON_TEMPLATE,
        }
    }

    /// Every path this page answers on, canonical path first.
    pub fn paths(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.page.path()).chain(self.page.aliases().iter().copied())
    }
}

/// Navigation link rendered by the shell.
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Routed pages in navigation order.
#[derive(Debug, Clone)]
pub struct PageRegistry {
    entries: Vec<PageEntry>,
}

impl PageRegistry {
    pub fn from_config(config: &PagesConfig) -> Self {
        let entries = Page::ALL
            .iter()
            .copied()
            .filter(|page| config.is_enabled(*page))
            .map(|page| PageEntry {
                page,
                fragment: if config.is_coming_soon(page) {
                    Fragment::ComingSoon
                } else {
                    Fragment::Content
                },
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[PageEntry] {
        &self.entries
    }

    /// Look up a page by canonical path or alias.
    pub fn resolve(&self, path: &str) -> Option<&PageEntry> {
        self.entries
            .iter()
            .find(|entry| entry.paths().any(|p| p == path))
    }

    /// Links for the navigation bar: content pages, then the info and health endpoints.
    pub fn nav_links(&self) -> Vec<NavLink> {
        self.entries
            .iter()
            .map(|entry| NavLink {
                href: entry.page.path(),
                label: entry.page.label(),
            })
            .chain([
                NavLink {
                    href: "/info",
                    label: "Deployment Info",
                },
                NavLink {
                    href: "/health",
                    label: "Health",
                },
            ])
            .collect()
    }
}
