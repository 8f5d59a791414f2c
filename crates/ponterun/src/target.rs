//! Call target descriptors.

use std::fmt;

use crate::error::BridgeError;
use crate::error::Result;

/// Which kind of foreign callable surface a target names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// A native shared library (`.so`, `.dylib`, `.dll`).
    NativeLibrary,
    /// A module executed by an external interpreter.
    ExternalInterpreter,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NativeLibrary => write!(f, "native library"),
            Self::ExternalInterpreter => write!(f, "external interpreter"),
        }
    }
}

/// Immutable handle naming a foreign callable surface.
///
/// Owns no resources; it is what the collaborator interfaces receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDescriptor {
    kind: TargetKind,
    location: String,
}

impl TargetDescriptor {
    /// Creates a descriptor, rejecting locations that cannot name anything.
    pub fn new(kind: TargetKind, location: impl Into<String>) -> Result<Self> {
        let location = location.into();
        if location.is_empty() {
            return Err(BridgeError::Initialization(format!(
                "{} target needs a non-empty location",
                kind
            )));
        }
        Ok(Self { kind, location })
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl fmt::Display for TargetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.location)
    }
}
