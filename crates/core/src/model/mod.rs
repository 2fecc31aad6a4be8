//! Record model for ripped symbols.
//!
//! The JSON shape of these types is a documented contract consumed by
//! downstream tooling: field names, field order, and the 1-based namespace
//! ordinals must not change.

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Leading namespace of a demangled signature.
///
/// Closed set with fixed 1-based ordinals; the ordinal is what gets
/// serialized (`namespaceEnum` in the output).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Namespace {
    None = 1,
    Std = 2,
    Cocos2d = 3,
    Pugi = 4,
}

impl Namespace {
    /// Classify a demangled signature by its leading scope.
    ///
    /// First match in a fixed, ordered prefix list wins. "cococs2d" is the
    /// literal prefix these binaries export their engine symbols under; do
    /// not correct the spelling, the canonical "cocos2d::" intentionally
    /// falls through to `None`.
    pub fn classify(demangled: &str) -> Self {
        if demangled.starts_with("cococs2d::") {
            Namespace::Cocos2d
        } else if demangled.starts_with("std::") {
            Namespace::Std
        } else if demangled.starts_with("pugi::") {
            Namespace::Pugi
        } else {
            Namespace::None
        }
    }

    /// 1-based ordinal used in the serialized output.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(Namespace::None),
            2 => Some(Namespace::Std),
            3 => Some(Namespace::Cocos2d),
            4 => Some(Namespace::Pugi),
            _ => None,
        }
    }

    /// Lowercase name used in the serialized output (`namespaceName`).
    pub fn name(self) -> &'static str {
        match self {
            Namespace::None => "none",
            Namespace::Std => "std",
            Namespace::Cocos2d => "cocos2d",
            Namespace::Pugi => "pugi",
        }
    }
}

impl Serialize for Namespace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.ordinal())
    }
}

impl<'de> Deserialize<'de> for Namespace {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ordinal = u8::deserialize(deserializer)?;
        Namespace::from_ordinal(ordinal)
            .ok_or_else(|| D::Error::custom(format!("invalid namespace ordinal {ordinal}")))
    }
}

/// Sentinel stored in `demangled_func` when the demangler rejects a name.
pub const DEMANGLE_FAILED: &str = "FAILED";

/// One ripped symbol: mangled name, demangled signature, and the best-effort
/// AAPCS layout of its arguments.
///
/// Fully populated at construction (see [`crate::analysis::analyze`]) and
/// never mutated afterwards. `arg_offsets` maps slot ids (`r0`..`r3`, then
/// `STACK[0x0]`, `STACK[0x4]`, ...) to either the literal `"this"` or one of
/// the entries of `args`, in slot-assignment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub mangled_func: String,
    pub demangled_func: String,
    pub args: Vec<String>,
    #[serde(rename = "namespaceEnum")]
    pub namespace: Namespace,
    #[serde(rename = "namespaceName")]
    pub namespace_name: String,
    pub arg_offsets: IndexMap<String, String>,
}

impl FunctionRecord {
    /// Record for a name the demangler rejected.
    ///
    /// Local recovery, not an error: the record still makes it into the
    /// output so the raw symbol is not lost, it just carries no signature
    /// or layout information.
    pub fn failed(mangled: impl Into<String>) -> Self {
        Self {
            mangled_func: mangled.into(),
            demangled_func: DEMANGLE_FAILED.to_string(),
            args: Vec::new(),
            namespace: Namespace::None,
            namespace_name: Namespace::None.name().to_string(),
            arg_offsets: IndexMap::new(),
        }
    }
}

/// Ordered collection of retained [`FunctionRecord`]s plus the game version
/// tag the rip was made against.
///
/// Insertion order is symbol-table discovery order and is preserved through
/// serialization. Only records that pass [`crate::analysis::is_noise`]
/// filtering should be pushed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    pub functions: Vec<FunctionRecord>,
    pub version: String,
}

impl SymbolSet {
    pub fn new(version: impl Into<String>) -> Self {
        Self { functions: Vec::new(), version: version.into() }
    }

    pub fn push(&mut self, record: FunctionRecord) {
        self.functions.push(record);
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

// `total_functions` is derived from the record list at serialization time so
// the two can never drift apart.
impl Serialize for SymbolSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SymbolSet", 3)?;
        state.serialize_field("functions", &self.functions)?;
        state.serialize_field("total_functions", &self.functions.len())?;
        state.serialize_field("gd-version", &self.version)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for SymbolSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            functions: Vec<FunctionRecord>,
            #[serde(default)]
            #[allow(dead_code)]
            total_functions: usize,
            #[serde(rename = "gd-version")]
            version: String,
        }

        let wire = Wire::deserialize(deserializer)?;
        Ok(SymbolSet { functions: wire.functions, version: wire.version })
    }
}
