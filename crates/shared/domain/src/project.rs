use serde::{Deserialize, Serialize};

/// How a project heading is presented.
///
/// The variants are mutually exclusive: a record is either a primary entry, a
/// secondary (lower-level) entry, or a discontinued one shown struck through.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// `<h2>` heading.
    #[default]
    Primary,
    /// `<h3>` heading.
    Secondary,
    /// `<h2>` heading wrapped in `<del>`.
    Disabled,
}

/// One portfolio entry, as declared in the site configuration.
///
/// `title` is required and doubles as the slug source for the heading's
/// transition name. Nothing enforces uniqueness across records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub mode: DisplayMode,
}

impl ProjectRecord {
    /// A primary record with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), href: None, description: None, mode: DisplayMode::Primary }
    }

    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    /// Description text, empty when absent.
    #[must_use]
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}
