use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gd_ripper::rip_command;

/// Rips exported C++ symbols from a Geometry Dash ELF binary into a JSON
/// map of demangled signatures and best-effort AAPCS argument offsets,
/// for use with Ghidra or as broma input.
///
/// This CLI is a thin wrapper around `ripper-core` (exposed in code as
/// `ripper_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "gd-ripper",
    about = "Rips C++ symbols and ARM argument offsets from GD ELF binaries",
    long_about = None,
    disable_version_flag = true
)]
struct Cli {
    /// Path to the ELF shared object to rip.
    #[arg(short, long, default_value = "libcocos2dcpp.so")]
    filename: PathBuf,

    /// Output path prefix; the file written is `<output>.<version>.json`.
    #[arg(short, long, default_value = "libcocos2dcpp.so")]
    output: String,

    /// Version of Geometry Dash being looked at, recorded as `gd-version`
    /// in the output.
    #[arg(short = 'v', long, default_value = "2.2074")]
    version: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("parsing android symbols...");
    rip_command(&cli.filename, &cli.output, &cli.version)?;
    println!("done!");

    Ok(())
}
