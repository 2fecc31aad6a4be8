//! Command layer for the `gd-ripper` binary.
//!
//! `main.rs` only parses arguments; the actual work lives here so the
//! integration tests can drive it directly as well as via the binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Rip `filename` and write the result to `<output>.<version>.json`,
/// returning the path that was written.
///
/// The whole symbol set is serialized in memory before the output file is
/// created, so a serialization failure leaves nothing partial on disk.
pub fn rip_command(filename: &Path, output: &str, version: &str) -> Result<PathBuf> {
    let set = ripper_core::analysis::rip_path(filename, version)
        .with_context(|| format!("Failed to rip symbols from {}", filename.display()))?;

    let json = serde_json::to_string_pretty(&set).context("Failed to serialize symbol set")?;

    let out_path = PathBuf::from(format!("{output}.{version}.json"));
    fs::write(&out_path, json)
        .with_context(|| format!("Failed to write output file {}", out_path.display()))?;

    log::info!("wrote {} functions to {}", set.len(), out_path.display());
    Ok(out_path)
}
