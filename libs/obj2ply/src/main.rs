//! # obj2ply Binary
//!
//! Parses arguments, validates paths, runs the pipeline, and prints the
//! output path on success. Any error prints once to stderr and exits 1.

use clap::Parser;
use obj2ply::cli::{initialize_tracing, Cli};
use obj2ply::paths::{check_overwrite, derive_output, prepare_parent, validate_input};
use obj2ply::{convert, Error, PipelineConfig};
use tracing::warn;

fn run(cli: &Cli) -> Result<(), Error> {
    validate_input(&cli.input)?;
    let output = derive_output(&cli.input, cli.output.as_deref())?;
    if check_overwrite(&output, cli.force)? {
        warn!(output = %output.display(), "overwriting existing file");
    }
    prepare_parent(&output)?;

    convert(&cli.input, &output, &PipelineConfig::default())?;

    println!("{}", output.display());
    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            // --help and --version land here too and are not failures.
            let code = i32::from(error.use_stderr());
            let _ = error.print();
            std::process::exit(code);
        }
    };
    initialize_tracing(&cli);

    if let Err(error) = run(&cli) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
