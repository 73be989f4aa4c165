//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for slugs, config loading,
//! and (with the `ui` feature) server-side markup rendering.
//!
//! ## Slugs
//! ```rust
//! # use folio_kernel::slugify;
//! assert_eq!(slugify("ABC Notation"), "abc-notation");
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use folio_kernel::config::load_site;
//! let site = load_site(Some("site.toml"))?;
//! ```
pub mod config;
#[cfg(feature = "ui")]
pub mod markup;
pub mod slug;

pub use folio_domain as domain;
pub use slug::{is_slug, slugify};
