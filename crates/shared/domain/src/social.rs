use crate::constants::MAIL;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A social profile link shown in the site header/footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform name, e.g. `Github` or `Mail`.
    pub name: String,
    pub href: String,
    /// Overrides the title derived from the site title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_title: Option<String>,
    #[serde(default)]
    pub active: bool,
}

impl SocialLink {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self { name: name.into(), href: href.into(), link_title: None, active: true }
    }

    #[must_use]
    pub fn with_link_title(mut self, title: impl Into<String>) -> Self {
        self.link_title = Some(title.into());
        self
    }

    #[must_use]
    pub const fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Effective link title for a site called `site_title`.
    ///
    /// ```rust
    /// # use folio_domain::SocialLink;
    /// let github = SocialLink::new("Github", "https://github.com/someone");
    /// assert_eq!(github.link_title("Folio"), "Folio on Github");
    ///
    /// let mail = SocialLink::new("Mail", "mailto:someone@example.com");
    /// assert_eq!(mail.link_title("Folio"), "Send an email to Folio");
    /// ```
    #[must_use]
    pub fn link_title(&self, site_title: &str) -> Cow<'_, str> {
        match &self.link_title {
            Some(title) => Cow::Borrowed(title),
            None if self.name == MAIL => Cow::Owned(format!("Send an email to {site_title}")),
            None => Cow::Owned(format!("{site_title} on {}", self.name)),
        }
    }
}
