//! # Error Definitions
//!
//! The single caller-facing failure taxonomy. Member-crate errors fold into
//! it at the boundary, so callers never see a raw codec or converter error,
//! and collaborator failures arrive wrapped rather than re-thrown raw.

use std::fmt;

/// Stable numeric codes surfaced across the boundary.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    FunctionNotFound = 1,
    TypeConversion = 2,
    Runtime = 3,
    Initialization = 4,
    Unsupported = 5,
}

/// Everything a public bridge operation can fail with.
#[derive(Debug)]
pub enum BridgeError {
    /// Registry lookup miss.
    FunctionNotFound(String),
    /// Duplicate registration; the existing binding is left untouched.
    AlreadyRegistered(String),
    /// Malformed wire data, or an unconvertible or cyclic host value.
    TypeConversion(String),
    /// A collaborator or callee failed during an otherwise well-formed call.
    Runtime {
        /// Target location, when the failure crossed a proxy.
        target: Option<String>,
        function: String,
        message: String,
    },
    /// A target could not be constructed or opened.
    Initialization(String),
    /// The capability is not available in this configuration.
    Unsupported(String),
}

impl BridgeError {
    /// The stable numeric code for this failure.
    ///
    /// Duplicate registration reports as an initialization failure: it can
    /// only happen while wiring a registry up, never during dispatch.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::FunctionNotFound(_) => ErrorCode::FunctionNotFound,
            Self::AlreadyRegistered(_) => ErrorCode::Initialization,
            Self::TypeConversion(_) => ErrorCode::TypeConversion,
            Self::Runtime { .. } => ErrorCode::Runtime,
            Self::Initialization(_) => ErrorCode::Initialization,
            Self::Unsupported(_) => ErrorCode::Unsupported,
        }
    }
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FunctionNotFound(name) => write!(f, "Function '{}' not found", name),
            Self::AlreadyRegistered(name) => {
                write!(f, "Function '{}' is already registered", name)
            }
            Self::TypeConversion(msg) => write!(f, "Type conversion failed: {}", msg),
            Self::Runtime { target: Some(target), function, message } => {
                write!(f, "Failed to call '{}' on '{}': {}", function, target, message)
            }
            Self::Runtime { target: None, function, message } => {
                write!(f, "Function '{}' failed: {}", function, message)
            }
            Self::Initialization(msg) => write!(f, "Initialization failed: {}", msg),
            Self::Unsupported(msg) => write!(f, "Unsupported operation: {}", msg),
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<pontepack::Error> for BridgeError {
    fn from(e: pontepack::Error) -> Self {
        Self::TypeConversion(e.to_string())
    }
}

impl From<pontecast::Error> for BridgeError {
    fn from(e: pontecast::Error) -> Self {
        Self::TypeConversion(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
