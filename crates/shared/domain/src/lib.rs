//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`).
//! Keep it lean: no I/O, rendering, or heavy logic, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod project;
pub mod social;

pub use config::{Locale, LogoImage, Site, SiteConfig, SiteConfigInner};
pub use project::{DisplayMode, ProjectRecord};
pub use social::SocialLink;
