//! Facade crate for the Folio presentation layer.
//! Re-exports domain/kernel primitives and composes the feature slices into site fragments.
//! Keep this crate thin: it should compose other crates, not implement rendering itself.
//!
//! ## Usage
//! ```rust
//! use folio::domain::{ProjectRecord, SiteConfig, SiteConfigInner};
//!
//! let config = SiteConfig::new(SiteConfigInner {
//!     projects: vec![ProjectRecord::new("Mind Map")],
//!     ..SiteConfigInner::default()
//! });
//! let fragments = folio::render_site(&config);
//! assert!(fragments.projects.as_str().contains("mind-map"));
//! ```

pub use folio_domain as domain;
pub use folio_kernel as kernel;
pub use folio_projects as projects;
pub use folio_socials as socials;

use folio_domain::SiteConfig;
use folio_kernel::markup::MarkupFragment;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the rendered project list inside an output directory.
pub const PROJECTS_FILE: &str = "projects.html";
/// File name of the rendered social icons inside an output directory.
pub const SOCIALS_FILE: &str = "socials.html";

#[folio_derive::folio_error]
pub enum RenderError {
    #[error("Failed to write fragments{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

/// Markup for every configurable section of the site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteFragments {
    pub projects: MarkupFragment,
    pub socials: MarkupFragment,
}

impl SiteFragments {
    /// Writes each fragment to its own file in `dir`, creating the directory if needed.
    ///
    /// Returns the written paths, projects first.
    ///
    /// # Errors
    /// Returns [`RenderError::Io`] if the directory or a file cannot be written.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, RenderError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).context(format!("Creating {}", dir.display()))?;

        let mut written = Vec::with_capacity(2);
        for (name, fragment) in [(PROJECTS_FILE, &self.projects), (SOCIALS_FILE, &self.socials)] {
            let path = dir.join(name);
            fs::write(&path, fragment.as_str()).context(format!("Writing {}", path.display()))?;
            debug!(path = %path.display(), bytes = fragment.as_str().len(), "Fragment written");
            written.push(path);
        }

        Ok(written)
    }
}

/// Renders all site fragments from a loaded configuration.
#[must_use]
pub fn render_site(config: &SiteConfig) -> SiteFragments {
    info!(
        title = %config.site.title,
        projects = config.projects.len(),
        socials = config.socials.len(),
        "Rendering site fragments"
    );

    SiteFragments {
        projects: folio_projects::render_list(&config.projects),
        socials: folio_socials::render_socials(&config.site, &config.socials),
    }
}
