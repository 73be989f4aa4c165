use folio_logger::{LevelFilter, Logger};

#[test]
fn console_logger_initializes_with_filter() {
    let _logger = Logger::builder()
        .name("folio-console")
        .level(LevelFilter::WARN)
        .filter("console_only=debug")
        .init()
        .expect("logger should initialize");

    tracing::debug!("visible through the filter");
    assert!(tracing::enabled!(tracing::Level::DEBUG));
    assert!(!tracing::enabled!(target: "other_crate", tracing::Level::INFO));
}
