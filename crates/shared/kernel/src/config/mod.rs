mod site;

pub use site::{SlugIssue, load_site, slug_issues, validate_site};

use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix for environment overrides (`FOLIO__SITE__TITLE` maps to `site.title`).
pub const ENV_PREFIX: &str = "FOLIO";

/// Configuration file looked up when no path is given; the extension is resolved by the loader.
pub const DEFAULT_CONFIG_FILE: &str = "site";

/// Errors raised while loading or validating configuration.
#[folio_derive::folio_error]
pub enum ConfigError {
    /// Missing file, malformed syntax, or a shape that does not match the target type.
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// Well-formed configuration that breaks a site invariant.
    #[error("Invalid site configuration{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base File**: the given path, or [`DEFAULT_CONFIG_FILE`] in the working directory.
///    The format is detected from the extension (`site.toml`, `site.yaml`, ...).
/// 2. **Environment Overrides**: variables prefixed with `FOLIO__`, nested with double
///    underscores (e.g., `FOLIO__SITE__AUTHOR` maps to `site.author`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file cannot be found or parsed, or if its content
/// does not match the structure of `T`.
///
/// # Example
/// ```rust
/// use folio_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     port: u16,
/// }
///
/// let cfg: Settings = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
