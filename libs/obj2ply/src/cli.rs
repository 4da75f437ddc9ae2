//! # Command-Line Interface
//!
//! Argument definitions and tracing setup. Logs go to stderr so the output
//! path printed on success stays the only thing on stdout.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::filter::EnvFilter;

/// Convert a .obj file (scaled in m) to a colorized .ply (scaled in mm).
#[derive(Debug, Parser)]
#[command(name = "obj2ply", version, about)]
pub struct Cli {
    /// Path to the input .obj file
    pub input: PathBuf,

    /// Path of the output .ply file, or an existing directory to place it in
    /// [default: the input path with a .ply extension]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(short, long)]
    pub force: bool,

    /// Enable debug logging for all pipeline stages
    #[arg(short, long)]
    pub verbose: bool,

    /// Log filter directives, overridden by --verbose
    #[arg(
        long,
        default_value = "warn,obj2ply=info,mesh_io=info,mesh_ops=info",
        env = "OBJ2PLY_LOG_FILTER"
    )]
    pub log_filter: String,
}

/// Installs the global tracing subscriber.
pub fn initialize_tracing(cli: &Cli) {
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(&cli.log_filter)
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
