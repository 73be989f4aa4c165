//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Render portfolio fragments from a site configuration")]
pub(crate) struct Cli {
    /// Emit debug logs
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    /// Also write rolling log files into this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) log_dir: Option<PathBuf>,

    /// Write log files as JSON lines
    #[arg(long, global = true, requires = "log_dir")]
    pub(crate) log_json: bool,

    /// Filter directives, e.g. `folio_kernel=debug` (replaces RUST_LOG)
    #[arg(long, global = true, value_name = "DIRECTIVES")]
    pub(crate) log_filter: Option<String>,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Render the project list and social links
    Render {
        /// Site configuration file (extension optional)
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// Write fragments into this directory instead of stdout
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Validate the site configuration without rendering
    Check {
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Print the slug of each argument, one per line
    Slug {
        #[arg(required = true, value_name = "TEXT")]
        text: Vec<String>,
    },
}
