use crate::constants::{
    DEFAULT_LANG, DEFAULT_SCHEDULED_POST_MARGIN_MS, DEFAULT_TITLE, DEFAULT_WEBSITE,
};
use crate::project::ProjectRecord;
use crate::social::SocialLink;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// Everything the presentation layer reads at build time.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub site: Site,
    pub locale: Locale,
    pub logo: LogoImage,
    pub projects: Vec<ProjectRecord>,
    pub socials: Vec<SocialLink>,
}

/// Immutable, Arc-wrapped site configuration.
///
/// Built once at startup and handed to the rendering layer; clones share the same data.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl SiteConfig {
    #[must_use]
    pub fn new(inner: SiteConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }

    /// Social links flagged as active, in declaration order.
    pub fn active_socials(&self) -> impl Iterator<Item = &SocialLink> {
        self.inner.socials.iter().filter(|social| social.active)
    }
}

impl From<SiteConfigInner> for SiteConfig {
    fn from(inner: SiteConfigInner) -> Self {
        Self::new(inner)
    }
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Site metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    pub website: String,
    pub author: String,
    pub email: Option<String>,
    pub desc: String,
    pub title: String,
    pub og_image: Option<String>,
    pub light_and_dark_mode: bool,
    pub post_per_page: u32,
    /// Milliseconds a scheduled post may be published ahead of its date.
    pub scheduled_post_margin: u64,
}

/// Document language settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    /// `<html lang>` code; empty means [`DEFAULT_LANG`].
    pub lang: String,
    /// BCP 47 language tags; empty means "environment default".
    pub lang_tag: Vec<String>,
}

impl Locale {
    #[must_use]
    pub fn html_lang(&self) -> &str {
        if self.lang.trim().is_empty() { DEFAULT_LANG } else { &self.lang }
    }
}

/// Header logo settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoImage {
    pub enable: bool,
    pub svg: bool,
    pub width: u32,
    pub height: u32,
}

// --- Default ---

impl Default for Site {
    fn default() -> Self {
        Self {
            website: DEFAULT_WEBSITE.to_owned(),
            author: String::new(),
            email: None,
            desc: String::new(),
            title: DEFAULT_TITLE.to_owned(),
            og_image: None,
            light_and_dark_mode: true,
            post_per_page: 20,
            scheduled_post_margin: DEFAULT_SCHEDULED_POST_MARGIN_MS,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self { lang: DEFAULT_LANG.to_owned(), lang_tag: Vec::new() }
    }
}

impl Default for LogoImage {
    fn default() -> Self {
        Self { enable: false, svg: true, width: 216, height: 46 }
    }
}
