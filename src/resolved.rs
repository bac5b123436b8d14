//! Typed provenance for resolved values.

use std::fmt;

/// The tier of the fallback chain that satisfied a resolution request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Fetched from the deployable resource bundle.
    Bundle,

    /// Taken from the builtin table embedded in the binary.
    Builtin,

    /// Read from the persistent key-value store.
    Storage,

    /// Constructed from the hardcoded default.
    Default,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Bundle => write!(f, "bundle"),
            Source::Builtin => write!(f, "builtin"),
            Source::Storage => write!(f, "storage"),
            Source::Default => write!(f, "default"),
        }
    }
}

/// A resolved value together with the tier that produced it.
#[derive(Debug, Clone)]
pub struct Resolved<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Resolved<T> {
    pub fn new(value: T, source: Source) -> Self {
        Self { value, source }
    }

    /// Discard the provenance and keep the value.
    pub fn into_value(self) -> T {
        self.value
    }
}
