//! Well-known names shared by configuration and rendering.

/// Platform name whose default link title is an email invitation.
pub const MAIL: &str = "Mail";

/// `<html lang>` fallback when the configured language is empty.
pub const DEFAULT_LANG: &str = "en";

/// Default `Site::title`.
pub const DEFAULT_TITLE: &str = "Folio";

/// Default `Site::website`.
pub const DEFAULT_WEBSITE: &str = "http://localhost:4321/";

/// Default grace period for scheduled posts (15 minutes, in milliseconds).
pub const DEFAULT_SCHEDULED_POST_MARGIN_MS: u64 = 15 * 60 * 1000;
