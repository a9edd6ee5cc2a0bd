//! Template renderer: a pure mapping from `ResumeData` to a markup tree.
//!
//! Dispatch is an exhaustive match on `TemplateKind`; unknown tags were already
//! folded into `TemplateKind::Minimal` when the data was decoded.

pub mod creative;
pub mod handlers;
pub mod markup;
pub mod minimal;
pub mod modern;
pub mod professional;

use crate::models::resume::{PersonalInfo, ResumeData};
use crate::models::template::TemplateKind;
use markup::{el, Node};

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const TITLE_PLACEHOLDER: &str = "Professional Title";
pub const INITIALS_PLACEHOLDER: &str = "YN";
pub const BODY_TEXT_COLOR: &str = "#333";

/// Print mode adds the `print-mode` class to the root while an export runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Screen,
    Print,
}

pub fn render(data: &ResumeData) -> Node {
    render_with_mode(data, RenderMode::Screen)
}

pub fn render_with_mode(data: &ResumeData, mode: RenderMode) -> Node {
    let body = match data.selected_template {
        TemplateKind::Minimal => minimal::render(data),
        TemplateKind::Professional => professional::render(data),
        TemplateKind::Creative => creative::render(data),
        TemplateKind::Modern => modern::render(data),
    };

    let mut root = el("div")
        .class("resume")
        .class(&format!("template-{}", data.selected_template.tag()))
        .class("w-full");
    if mode == RenderMode::Print {
        root = root.class("print-mode");
    }
    root.child(body).into()
}

/// Full standalone HTML document around the rendered resume.
/// Full HTML page around the rendered fragment. The shell is a tera template
/// with autoescape on; the fragment and stylesheet are already safe.
pub fn render_document(data: &ResumeData) -> Result<String, tera::Error> {
    let mut context = tera::Context::new();
    context.insert("title", &format!("{} - Resume", display_name(&data.personal_info)));
    context.insert("css", BASE_CSS);
    context.insert("body", &render(data).to_html());
    tera::Tera::one_off(DOCUMENT_SHELL, &context, true)
}

const DOCUMENT_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
<style>{{ css | safe }}</style>
</head>
<body>
{{ body | safe }}
</body>
</html>
"#;

const BASE_CSS: &str = "body{margin:0;background:#f8fafc;font-family:Helvetica,Arial,sans-serif}\
.resume{max-width:8.5in;margin:0 auto;background:#fff}\
.print-mode{box-shadow:none}\
ul{margin:0}";

// ────────────────────────────────────────────────────────────────────────────
// Helpers shared by the layouts
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

pub(crate) fn non_blank_opt(value: &Option<String>) -> Option<&str> {
    value.as_deref().and_then(non_blank)
}

pub(crate) fn display_name(info: &PersonalInfo) -> &str {
    non_blank(&info.full_name).unwrap_or(NAME_PLACEHOLDER)
}

pub(crate) fn display_title(info: &PersonalInfo) -> &str {
    non_blank(&info.job_title).unwrap_or(TITLE_PLACEHOLDER)
}

pub(crate) fn date_range(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}

/// First character of each space-separated token of the full name.
pub(crate) fn initials(full_name: &str) -> String {
    if full_name.is_empty() {
        return INITIALS_PLACEHOLDER.to_string();
    }
    full_name
        .split(' ')
        .filter_map(|token| token.chars().next())
        .collect()
}

/// Contact lines in display order; website/linkedin only when asked for.
pub(crate) fn contact_items<'a>(
    info: &'a PersonalInfo,
    include_website: bool,
    include_linkedin: bool,
) -> Vec<(ContactKind, &'a str)> {
    let mut items = Vec::new();
    if let Some(v) = non_blank(&info.email) {
        items.push((ContactKind::Email, v));
    }
    if let Some(v) = non_blank(&info.phone) {
        items.push((ContactKind::Phone, v));
    }
    if let Some(v) = non_blank(&info.location) {
        items.push((ContactKind::Location, v));
    }
    if include_website {
        if let Some(v) = non_blank_opt(&info.website) {
            items.push((ContactKind::Link, v));
        }
    }
    if include_linkedin {
        if let Some(v) = non_blank_opt(&info.linkedin) {
            items.push((ContactKind::Link, v));
        }
    }
    items
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContactKind {
    Email,
    Phone,
    Location,
    Link,
}

impl ContactKind {
    pub(crate) fn icon_class(&self) -> &'static str {
        match self {
            ContactKind::Email => "icon-mail",
            ContactKind::Phone => "icon-phone",
            ContactKind::Location => "icon-map-pin",
            ContactKind::Link => "icon-link",
        }
    }
}
