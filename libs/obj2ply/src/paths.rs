//! # Path Validation and Derivation
//!
//! The filesystem contract around the pipeline: input must be an existing
//! `.obj`, output must be a `.ply` (derived from the input when omitted, or
//! placed inside an output directory when one is named), and an existing
//! output is only replaced under `--force`.

use std::path::{Path, PathBuf};

use config::constants::{INPUT_EXTENSION, OUTPUT_EXTENSION};

use crate::error::Error;

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

/// Checks that the input exists and is an OBJ file.
pub fn validate_input(input: &Path) -> Result<(), Error> {
    if !input.exists() {
        return Err(Error::InputMissing(input.to_path_buf()));
    }
    if !has_extension(input, INPUT_EXTENSION) {
        return Err(Error::InputNotObj(input.to_path_buf()));
    }
    Ok(())
}

/// Derives and validates the output path.
///
/// - No explicit output: the input path with its extension replaced by `.ply`.
/// - Output naming an existing directory: the default-named file inside it.
/// - Anything else must already end in `.ply`.
pub fn derive_output(input: &Path, output: Option<&Path>) -> Result<PathBuf, Error> {
    let derived = match output {
        None => input.with_extension(OUTPUT_EXTENSION),
        Some(output) if output.is_dir() => {
            let name = input
                .with_extension(OUTPUT_EXTENSION)
                .file_name()
                .map(PathBuf::from)
                .ok_or_else(|| Error::InputNotObj(input.to_path_buf()))?;
            output.join(name)
        }
        Some(output) => output.to_path_buf(),
    };

    if !has_extension(&derived, OUTPUT_EXTENSION) {
        return Err(Error::OutputNotPly(derived));
    }
    Ok(derived)
}

/// Applies the overwrite policy.
///
/// Returns `true` when an existing file will be overwritten (the caller emits
/// the warning); fails when the file exists and `force` is not set.
pub fn check_overwrite(output: &Path, force: bool) -> Result<bool, Error> {
    if output.exists() {
        if !force {
            return Err(Error::OutputExists(output.to_path_buf()));
        }
        return Ok(true);
    }
    Ok(false)
}

/// Creates any missing parent directories of the output path.
pub fn prepare_parent(output: &Path) -> Result<(), Error> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
