//! # Logger
//!
//! Installs the global `tracing` subscriber for the `folio` binaries.
//!
//! * Console events go to **stderr** so stdout stays free for rendered markup.
//! * [`LoggerBuilder::log_dir`] adds a daily-rolling file, plain or JSON lines.
//! * [`LoggerBuilder::filter`] takes `EnvFilter` directives
//!   (e.g. `"folio_kernel=debug,folio_projects=trace"`); without it `RUST_LOG` applies.
//!
//! ```rust
//! use folio_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder().name("folio").level(LevelFilter::DEBUG).init().unwrap();
//! tracing::debug!("ready");
//! ```

mod error;
mod layers;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Line format of the log file.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

#[derive(Debug)]
struct Settings {
    level: LevelFilter,
    directives: Option<String>,
    dir: Option<PathBuf>,
    format: FileFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self { level: LevelFilter::INFO, directives: None, dir: None, format: FileFormat::Text }
    }
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);
#[derive(Debug)]
pub struct ConsoleOnly;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}
impl Sealed for ConsoleOnly {}
impl Sealed for WithFile {}

/// Configures the global subscriber.
///
/// [`LoggerBuilder::init`] needs a name; [`LoggerBuilder::format`] needs a log directory.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed, F: Sealed = ConsoleOnly> {
    name: N,
    settings: Settings,
    output: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<Unnamed, F> {
    /// Names the application; also the prefix of log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { name: Named(name.into()), settings: self.settings, output: PhantomData }
    }
}

impl<F: Sealed> LoggerBuilder<Named, F> {
    /// Default level for targets the filter does not mention.
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// `EnvFilter` directives; invalid ones make [`LoggerBuilder::init`] fail.
    #[must_use]
    pub fn filter(mut self, directives: impl Into<String>) -> Self {
        self.settings.directives = Some(directives.into());
        self
    }

    /// Also writes events to rolling files in `dir` (created if missing).
    pub fn log_dir(self, dir: impl Into<PathBuf>) -> LoggerBuilder<Named, WithFile> {
        let mut settings = self.settings;
        settings.dir = Some(dir.into());
        LoggerBuilder { name: self.name, settings, output: PhantomData }
    }

    /// Installs the subscriber.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for a blank name or bad filter directives,
    /// [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory is unusable,
    /// [`LoggerError::Subscriber`] when a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { name: Named(name), settings, .. } = self;
        let name = name.trim();
        if name.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }

        let filter = layers::filter(settings.level, settings.directives.as_deref())?;
        let (file, guard) = match &settings.dir {
            Some(dir) => {
                let (layer, guard) = layers::file(dir, name, settings.format)?;
                (Some(layer), Some(guard))
            },
            None => (None, None),
        };

        tracing_subscriber::registry().with(filter).with(layers::console()).with(file).try_init()?;

        tracing::debug!(
            name,
            dir = ?settings.dir,
            format = ?settings.format,
            "Logger initialized"
        );

        Ok(Logger { _file_guard: guard })
    }
}

impl LoggerBuilder<Named, WithFile> {
    #[must_use]
    pub const fn format(mut self, format: FileFormat) -> Self {
        self.settings.format = format;
        self
    }
}

/// Keeps the file writer alive; pending lines are flushed when it drops.
#[must_use = "Dropping this handle stops file logging."]
#[derive(Debug)]
pub struct Logger {
    _file_guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { name: Unnamed, settings: Settings::default(), output: PhantomData }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("folio");
        assert_eq!(builder.settings.level, LevelFilter::INFO);
        assert!(builder.settings.directives.is_none());
        assert!(builder.settings.dir.is_none());
        assert_eq!(builder.settings.format, FileFormat::Text);
    }

    #[test]
    fn log_dir_unlocks_format() {
        let builder = Logger::builder()
            .name("folio")
            .filter("folio_kernel=debug")
            .log_dir("logs")
            .format(FileFormat::Json)
            .level(LevelFilter::DEBUG);

        assert_eq!(builder.settings.dir.as_deref(), Some(std::path::Path::new("logs")));
        assert_eq!(builder.settings.format, FileFormat::Json);
        assert_eq!(builder.settings.directives.as_deref(), Some("folio_kernel=debug"));
        assert_eq!(builder.settings.level, LevelFilter::DEBUG);
    }

    #[test]
    #[serial]
    fn rejects_blank_name() {
        let err = Logger::builder().name("  ").init().expect_err("blank name must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn rejects_invalid_filter() {
        let err = Logger::builder()
            .name("folio")
            .filter("folio=[")
            .init()
            .expect_err("malformed filter must fail");
        assert!(err.to_string().contains("folio=["), "{err}");
    }

    #[test]
    #[serial]
    fn unusable_log_dir_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file").expect("write blocker");

        let err = Logger::builder()
            .name("folio")
            .log_dir(blocker.join("logs"))
            .init()
            .expect_err("log dir under a file must fail");
        assert!(matches!(err, LoggerError::Io { context: Some(_), .. }), "{err}");
    }
}
