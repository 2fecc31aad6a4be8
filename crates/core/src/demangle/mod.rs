//! Adapter over the `cpp_demangle` Itanium demangler.
//!
//! The exclusion prefixes in [`crate::analysis`] are written against this
//! demangler's exact output text (`"typeinfo for X"`, `"{vtable(X)}"`), so
//! swapping the engine would silently change which symbols get filtered.

use cpp_demangle::{DemangleOptions, Symbol};

/// Demangle an Itanium-mangled name, or `None` if the demangler rejects it.
///
/// Rejection is deterministic per input; callers recover with the FAILED
/// sentinel rather than treating it as an error.
pub fn demangle(mangled: &str) -> Option<String> {
    let symbol = Symbol::new(mangled).ok()?;
    symbol.demangle(&DemangleOptions::default()).ok()
}
