//! Template naming conventions.
//!
//! Template files live under `<root>/pre/` and `<root>/post/` as
//! `<stem>.md`. A `default` token in the dot-separated stem marks the
//! template a selection UI should pre-select; the marker is stripped for
//! display and matching, and the marked stem remains addressable as-is.

/// Which template slot a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Pre,
    Post,
}

impl TemplateKind {
    pub fn dir_name(&self) -> &'static str {
        match self {
            TemplateKind::Pre => "pre",
            TemplateKind::Post => "post",
        }
    }

    pub const ALL: [TemplateKind; 2] = [TemplateKind::Pre, TemplateKind::Post];
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// File extension that marks a file as a template.
pub const TEMPLATE_EXTENSION: &str = "md";

const DEFAULT_MARKER: &str = "default";

/// Strip the default marker from a stem for display and matching.
///
/// `foo.default.bar` becomes `foo.bar`; `name.default` becomes `name`. A
/// stem that is nothing but the marker is kept verbatim so the file stays
/// addressable.
pub fn display_name(stem: &str) -> String {
    let kept: Vec<&str> =
        stem.split('.').filter(|segment| *segment != DEFAULT_MARKER).collect();
    if kept.is_empty() {
        return stem.to_string();
    }
    kept.join(".")
}

/// Whether the stem carries the default marker.
pub fn is_default_marked(stem: &str) -> bool {
    stem.split('.').any(|segment| segment == DEFAULT_MARKER) && stem != DEFAULT_MARKER
}

/// Case-insensitive stem match against a requested name.
///
/// A marked file answers to both its marked and unmarked name.
pub fn matches(stem: &str, requested: &str) -> bool {
    stem.eq_ignore_ascii_case(requested) || display_name(stem).eq_ignore_ascii_case(requested)
}
