use crate::FileFormat;
use crate::error::{LoggerError, LoggerErrorExt};
use std::fs;
use std::io::IsTerminal;
use std::path::Path;
use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Days of log files kept in the log directory.
const RETAINED_FILES: usize = 14;
const FILE_SUFFIX: &str = "log";

pub(crate) type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Explicit directives replace `RUST_LOG`; without them `RUST_LOG` is read leniently.
pub(crate) fn filter(level: LevelFilter, directives: Option<&str>) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());

    match directives {
        Some(directives) => builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid log filter '{directives}': {e}").into(),
            context: None,
        }),
        None => Ok(builder.from_env_lossy()),
    }
}

/// Compact human output on stderr; stdout carries rendered markup.
pub(crate) fn console<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
}

/// Daily-rolling `<name>.<date>.log` files in `dir`, written off-thread.
///
/// The returned guard flushes pending lines when dropped.
pub(crate) fn file<S>(
    dir: &Path,
    name: &str,
    format: FileFormat,
) -> Result<(BoxedLayer<S>, WorkerGuard), LoggerError>
where
    S: Subscriber + for<'a> LookupSpan<'a> + Send + Sync + 'static,
{
    fs::create_dir_all(dir).context(format!("Creating {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(name)
        .filename_suffix(FILE_SUFFIX)
        .max_log_files(RETAINED_FILES)
        .build(dir)
        .context(format!("Opening log files in {}", dir.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = match format {
        FileFormat::Text => layer.boxed(),
        FileFormat::Json => layer.json().boxed(),
    };

    Ok((layer, guard))
}
