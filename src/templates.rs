//! Template engine setup.
//!
//! The shell (`base.html`) and every page fragment are embedded in the binary.
//! Fragments extend the shell and fill its single `content` block. When
//! `ui.templates_dir` is configured, templates found there take precedence and
//! the embedded set fills in whatever is missing.

use std::collections::HashMap;

use tera::Tera;

use crate::config::UiConfig;
use crate::error::AppError;

/// Name of the shared page shell
pub const SHELL_TEMPLATE: &str = "base.html";

pub const INFO_TEMPLATE: &str = "info.html";

pub const NOT_FOUND_TEMPLATE: &str = "not_found.html";

const EMBEDDED_TEMPLATES: [(&str, &str); 10] = [
    (SHELL_TEMPLATE, include_str!("../templates/base.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("devops_concepts.html", include_str!("../templates/devops_concepts.html")),
    ("kubernetes.html", include_str!("../templates/kubernetes.html")),
    ("ingress_gateway.html", include_str!("../templates/ingress_gateway.html")),
    ("kong.html", include_str!("../templates/kong.html")),
    ("alibaba_ack.html", include_str!("../templates/alibaba_ack.html")),
    ("coming_soon.html", include_str!("../templates/coming_soon.html")),
    (INFO_TEMPLATE, include_str!("../templates/info.html")),
    (NOT_FOUND_TEMPLATE, include_str!("../templates/not_found.html")),
];

/// Initialize the Tera template engine
pub fn init_templates(ui: &UiConfig) -> Result<Tera, AppError> {
    let embedded = embedded_templates()?;

    let mut tera = match ui.templates_dir.as_deref() {
        Some(dir) => {
            // Overrides may extend the embedded shell, so chains are built by `extend`
            let mut tera = Tera::parse(&format!("{}/**/*.html", dir.trim_end_matches('/')))?;
            let overrides: Vec<&str> = tera.get_template_names().collect();
            tracing::info!(dir = %dir, overrides = ?overrides, "Loaded template overrides");
            tera.extend(&embedded)?;
            tera
        }
        None => embedded,
    };

    tera.register_filter("humanize", humanize_filter);
    tera.set_escape_fn(escape_html);

    Ok(tera)
}

fn embedded_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(EMBEDDED_TEMPLATES.to_vec())?;
    Ok(tera)
}

/// HTML-escape `& < > " '`. Unlike Tera's default, `/` is left as is so paths
/// and versions render verbatim.
fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Turn a snake_case key into words ("runtime_version" -> "runtime version")
fn humanize_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("humanize filter expects a string"))?;

    Ok(tera::Value::String(s.replace('_', " ")))
}
