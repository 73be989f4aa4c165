use super::{ConfigError, load_config};
use crate::slug::slugify;
use folio_domain::{SiteConfig, SiteConfigInner};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Loads, validates and freezes the site configuration.
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is missing or malformed (including a project
/// without a `title`), and [`ConfigError::Invalid`] when [`validate_site`] rejects it.
pub fn load_site(path: Option<impl AsRef<Path>>) -> Result<SiteConfig, ConfigError> {
    let inner: SiteConfigInner = load_config(path)?;
    validate_site(&inner)?;

    debug!(
        projects = inner.projects.len(),
        socials = inner.socials.len(),
        lang = inner.locale.html_lang(),
        "Site configuration loaded"
    );

    Ok(SiteConfig::new(inner))
}

/// A project title whose slug makes a poor transition name.
///
/// Neither case blocks loading; both are logged by [`validate_site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugIssue {
    /// The title has no letters or digits, so the heading gets an empty transition name.
    Empty { index: usize, title: String },
    /// Two titles collapse to the same slug.
    Duplicate { slug: String, first: String, second: String },
}

/// Lists slug problems in project order. Blank titles are left to [`validate_site`].
#[must_use]
pub fn slug_issues(config: &SiteConfigInner) -> Vec<SlugIssue> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(config.projects.len());
    let mut issues = Vec::new();

    for (index, project) in config.projects.iter().enumerate() {
        if project.title.trim().is_empty() {
            continue;
        }

        let slug = slugify(&project.title);
        if slug.is_empty() {
            issues.push(SlugIssue::Empty { index: index + 1, title: project.title.clone() });
            continue;
        }

        match seen.get(&slug) {
            Some(first) => issues.push(SlugIssue::Duplicate {
                first: (*first).to_owned(),
                second: project.title.clone(),
                slug,
            }),
            None => {
                seen.insert(slug, &project.title);
            },
        }
    }

    issues
}

/// Checks the invariants the renderers rely on.
///
/// Slug problems (see [`SlugIssue`]) are tolerated and only reported as warnings.
///
/// # Errors
/// Returns [`ConfigError::Invalid`] for a blank project title or a social link with a
/// blank `name` or `href`.
pub fn validate_site(config: &SiteConfigInner) -> Result<(), ConfigError> {
    if let Some(index) = config.projects.iter().position(|p| p.title.trim().is_empty()) {
        return Err(invalid(format!("project #{} has an empty title", index + 1)));
    }

    for (index, social) in config.socials.iter().enumerate() {
        if social.name.trim().is_empty() {
            return Err(invalid(format!("social link #{} has an empty name", index + 1)));
        }
        if social.href.trim().is_empty() {
            return Err(invalid(format!("social link '{}' has an empty href", social.name)));
        }
    }

    for issue in slug_issues(config) {
        match issue {
            SlugIssue::Empty { index, title } => {
                warn!(project = index, title = %title, "Project title yields an empty transition name");
            },
            SlugIssue::Duplicate { slug, first, second } => {
                warn!(slug = %slug, first = %first, second = %second, "Projects share a transition name");
            },
        }
    }

    Ok(())
}

fn invalid(message: String) -> ConfigError {
    ConfigError::Invalid { message: message.into(), context: None }
}
