//! Signature analysis: argument-list tokenization, the this-call heuristic,
//! AAPCS slot assignment, and the noise filter for compiler artifacts.
//!
//! Everything here is literal, ordered pattern matching over demangled
//! text, not semantic analysis. The prefix lists and the this-call check
//! are deliberately approximate and must stay that way: "fixing" their
//! false positives would change the observable output downstream tooling
//! was built against.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;

use crate::demangle;
use crate::elf::{self, ElfError};
use crate::model::{FunctionRecord, Namespace, SymbolSet};

/// Demangled-name prefixes that mark RTTI/vtable artifacts rather than
/// callable functions. The text matches `cpp_demangle` output verbatim.
const ARTIFACT_PREFIXES: [&str; 3] = ["typeinfo name for ", "typeinfo for ", "{vtable"];

/// Opaque exception-pointer argument type; functions taking one carry no
/// useful offset information.
const EXCEPTION_PTR_PREFIX: &str = "std::__exception_ptr";

#[derive(Debug, Error)]
pub enum RipError {
    #[error("Binary not found at {0}")]
    MissingBinary(PathBuf),
    #[error(transparent)]
    Elf(#[from] ElfError),
}

/// Split the text between a signature's outermost parentheses into
/// top-level argument type strings.
///
/// A comma only separates arguments at template depth 0, so
/// `std::map<int, std::string>` stays in one piece. Every emitted argument
/// is trimmed; a non-empty trailing fragment becomes the final argument.
pub fn split_cpp_args(data: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut buf = String::new();
    let mut depth = 0i32;

    for c in data.chars() {
        match c {
            '<' => {
                depth += 1;
                buf.push(c);
            }
            '>' => {
                depth -= 1;
                buf.push(c);
            }
            ',' if depth == 0 => {
                args.push(buf.trim().to_string());
                buf.clear();
            }
            _ => buf.push(c),
        }
    }
    if !buf.is_empty() {
        args.push(buf.trim().to_string());
    }

    args
}

/// Pull the argument-type list out of a demangled signature.
///
/// Signatures wrapped in braces (the demangler's rendering for thunks and
/// other special members, e.g. `{vtable(...)}`) first lose the braces and
/// everything up to the first comma inside them, then the normal
/// between-the-parentheses rule applies to what remains.
pub fn extract_args(demangled: &str) -> Vec<String> {
    if demangled.contains('{') {
        let inner = demangled.trim_start_matches('{').trim_end_matches('}');
        let rest = match inner.split_once(',') {
            Some((_, rest)) => rest,
            None => inner,
        };
        // The brace form nests the signature's parens inside its own, so
        // stray closers can survive the slice.
        return split_cpp_args(between_parens(rest).trim_end_matches(')'));
    }
    if demangled.contains('(') {
        return split_cpp_args(between_parens(demangled));
    }
    Vec::new()
}

/// Text after the first `(` and before the last `)`, tolerating either
/// being absent.
fn between_parens(s: &str) -> &str {
    let after = match s.split_once('(') {
        Some((_, after)) => after,
        None => s,
    };
    match after.rsplit_once(')') {
        Some((before, _)) => before,
        None => after,
    }
}

/// Heuristic: does this signature look like a member call?
///
/// True when the namespace is recognized or the whole signature splits into
/// two or more `::` components. False positives happen (free functions in a
/// known namespace, qualified names inside argument types) and are
/// tolerated by design; there is no correction mechanism.
pub fn is_this_call(demangled: &str, namespace: Namespace) -> bool {
    namespace != Namespace::None || demangled.split("::").count() >= 2
}

/// Hands out AAPCS argument slots in order: r0-r3, then 4-byte stack slots
/// starting at `STACK[0x0]`.
#[derive(Debug, Default)]
pub struct SlotCounter {
    register: usize,
    stack: usize,
}

impl SlotCounter {
    pub fn next_slot(&mut self) -> String {
        if self.register < 4 {
            let slot = format!("r{}", self.register);
            self.register += 1;
            return slot;
        }
        let slot = format!("STACK[{:#x}]", self.stack * 4);
        self.stack += 1;
        slot
    }
}

/// Map each argument to the calling-convention slot it would occupy.
///
/// A member call consumes the first slot for the implicit receiver before
/// any explicit argument is placed.
pub fn arg_offsets(args: &[String], this_call: bool) -> IndexMap<String, String> {
    let mut counter = SlotCounter::default();
    let mut offsets = IndexMap::new();

    if this_call {
        offsets.insert(counter.next_slot(), "this".to_string());
    }
    for arg in args {
        offsets.insert(counter.next_slot(), arg.trim().to_string());
    }

    offsets
}

/// Analyze one mangled name into a fully populated [`FunctionRecord`].
///
/// Pure function of its input: demangle, tokenize the argument list,
/// classify the namespace, and lay the arguments out over AAPCS slots.
/// When the demangler rejects the name the record falls back to the FAILED
/// sentinel with empty arguments and an empty slot map.
pub fn analyze(mangled: &str) -> FunctionRecord {
    let Some(demangled) = demangle::demangle(mangled) else {
        return FunctionRecord::failed(mangled);
    };

    let args = extract_args(&demangled);
    let namespace = Namespace::classify(&demangled);
    let this_call = is_this_call(&demangled, namespace);
    let arg_offsets = arg_offsets(&args, this_call);

    FunctionRecord {
        mangled_func: mangled.to_string(),
        demangled_func: demangled,
        args,
        namespace,
        namespace_name: namespace.name().to_string(),
        arg_offsets,
    }
}

/// Should this record be dropped as compiler-generated noise?
///
/// RTTI/vtable artifacts and anything taking an opaque exception pointer
/// are filtered out; neither carries argument-offset information worth
/// keeping. FAILED records match none of the prefixes and are retained.
pub fn is_noise(record: &FunctionRecord) -> bool {
    record.args.iter().any(|arg| arg.starts_with(EXCEPTION_PTR_PREFIX))
        || ARTIFACT_PREFIXES.iter().any(|prefix| record.demangled_func.starts_with(prefix))
}

/// Rip every mangled symbol from an in-memory ELF image into a
/// [`SymbolSet`] tagged with `version`.
///
/// Symbols are processed one at a time in table order and retained records
/// keep that order. Per-symbol demangle failures are absorbed into FAILED
/// records; only binary-level problems surface as errors.
pub fn rip_bytes(bytes: &[u8], version: &str) -> Result<SymbolSet, RipError> {
    let mut set = SymbolSet::new(version);

    for mangled in elf::mangled_symbols(bytes)? {
        let record = analyze(&mangled);
        if is_noise(&record) {
            log::debug!("skipping compiler artifact: {}", record.demangled_func);
            continue;
        }
        set.push(record);
    }

    log::info!("retained {} functions (gd-version {version})", set.len());
    Ok(set)
}

/// Read a binary from disk and rip it. The file is read fully before any
/// processing begins.
pub fn rip_path(path: &Path, version: &str) -> Result<SymbolSet, RipError> {
    let bytes = fs::read(path).map_err(|_| RipError::MissingBinary(path.to_path_buf()))?;
    rip_bytes(&bytes, version)
}
