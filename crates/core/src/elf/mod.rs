//! ELF symbol-table reading via `goblin`.
//!
//! Only the raw mangled names leave this module; everything downstream of
//! here works on strings and knows nothing about ELF.

use goblin::elf::Elf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ElfError {
    #[error("Failed to parse ELF: {0}")]
    Malformed(#[from] goblin::error::Error),
    #[error("No symbol table present in binary")]
    NoSymbolTable,
}

/// Collect every `_Z`-prefixed symbol name from the binary, in table order.
///
/// Exported symbols of a stripped shared object live in `.dynsym`, so that
/// table is walked first; `.symtab` follows for unstripped builds. Names
/// that are empty or not Itanium-mangled never reach the analysis pipeline.
///
/// A binary with no symbol table at all is treated as malformed input, not
/// as an empty result.
pub fn mangled_symbols(bytes: &[u8]) -> Result<Vec<String>, ElfError> {
    let elf = Elf::parse(bytes)?;

    if elf.dynsyms.is_empty() && elf.syms.is_empty() {
        return Err(ElfError::NoSymbolTable);
    }

    let mut names = Vec::new();
    for sym in elf.dynsyms.iter() {
        if let Some(name) = elf.dynstrtab.get_at(sym.st_name) {
            if name.starts_with("_Z") {
                names.push(name.to_string());
            }
        }
    }
    for sym in elf.syms.iter() {
        if let Some(name) = elf.strtab.get_at(sym.st_name) {
            if name.starts_with("_Z") {
                names.push(name.to_string());
            }
        }
    }

    Ok(names)
}
