//! Social links feature slice.
//!
//! ```rust
//! use folio_kernel::domain::{Site, SocialLink};
//!
//! let socials = [SocialLink::new("Github", "https://github.com/someone")];
//! let html = folio_socials::render_socials(&Site::default(), &socials);
//! assert!(html.as_str().contains(r#"title="Folio on Github""#));
//! ```

mod component;

pub use crate::component::{CONTAINER_CLASS, LABEL_CLASS, LINK_CLASS, SocialLinks, SocialLinksProps};

use folio_kernel::domain::{Site, SocialLink};
use folio_kernel::markup::{MarkupFragment, render_component};
use tracing::debug;

/// Renders the active links of `socials` inside a `div.social-icons`.
///
/// Inactive links are skipped; the rest keep their declaration order.
#[must_use]
pub fn render_socials(site: &Site, socials: &[SocialLink]) -> MarkupFragment {
    let links: Vec<SocialLink> = socials.iter().filter(|social| social.active).cloned().collect();
    debug!(total = socials.len(), active = links.len(), "Rendering social links");

    render_component(SocialLinks, SocialLinksProps { site_title: site.title.clone(), links })
}
