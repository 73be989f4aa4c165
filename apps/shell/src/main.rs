#![allow(clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{Cli, Commands};
use anyhow::Result;
use clap::Parser;
use folio_logger::{FileFormat, LevelFilter, Logger, LoggerError};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_logger(&cli)?;

    match cli.command {
        Commands::Render { config, out } => handlers::render(config.as_deref(), out.as_deref())?,
        Commands::Check { config } => handlers::check(config.as_deref())?,
        Commands::Slug { text } => handlers::slug(&text),
    }

    Ok(())
}

fn init_logger(cli: &Cli) -> Result<Logger, LoggerError> {
    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let mut builder = Logger::builder().name(env!("CARGO_BIN_NAME")).level(level);
    if let Some(directives) = &cli.log_filter {
        builder = builder.filter(directives);
    }

    match &cli.log_dir {
        Some(dir) => {
            let format = if cli.log_json { FileFormat::Json } else { FileFormat::Text };
            builder.log_dir(dir).format(format).init()
        },
        None => builder.init(),
    }
}
