//! ripper-core
//!
//! Core library for ripping exported C++ symbols out of ARM ELF game
//! binaries (the canonical target is `libcocos2dcpp.so`).
//!
//! For every `_Z`-prefixed symbol in the binary's symbol tables the library
//! demangles the name, tokenizes the argument-type list, classifies the
//! leading namespace, and lays the arguments out over the AAPCS calling
//! convention (r0-r3, then 4-byte stack slots). The result is a flat,
//! serializable set of per-function records for downstream tooling (Ghidra
//! scripts, broma generators, offset databases).
//!
//! The goal is to keep all substantive logic here so it is fully testable
//! and reusable from multiple frontends (CLI, batch runners, etc.).

pub mod analysis;
pub mod demangle;
pub mod elf;
pub mod model;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
