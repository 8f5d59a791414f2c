//! Core types for the ponte wire format.

use std::error;
use std::fmt;

/// Wire tag names, one per `BridgeValue` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Null,
    Bool,
    Int,
    Float,
    String,
    Array,
    Object,
}

impl Tag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Tag::Null => "null",
            Tag::Bool => "bool",
            Tag::Int => "int",
            Tag::Float => "float",
            Tag::String => "string",
            Tag::Array => "array",
            Tag::Object => "object",
        }
    }

    /// The tag set is closed; anything else is `None`.
    pub fn from_str(name: &str) -> Option<Self> {
        match name {
            "null" => Some(Tag::Null),
            "bool" => Some(Tag::Bool),
            "int" => Some(Tag::Int),
            "float" => Some(Tag::Float),
            "string" => Some(Tag::String),
            "array" => Some(Tag::Array),
            "object" => Some(Tag::Object),
            _ => None,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug)]
pub enum Error {
    /// The text was not valid JSON at all.
    Json(serde_json::Error),
    /// The top level of a wire value was not a `{"type", "value"}` object.
    NotAnEnvelope,
    /// The envelope had no `"type"` field.
    MissingTag,
    /// The `"type"` field named a tag outside the closed set.
    UnknownTag(String),
    /// The payload did not have the shape the tag requires.
    PayloadMismatch { tag: Tag, found: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Json(e) => write!(f, "invalid JSON: {}", e),
            Error::NotAnEnvelope => {
                write!(f, "expected a {{\"type\", \"value\"}} envelope object")
            }
            Error::MissingTag => write!(f, "envelope is missing its \"type\" tag"),
            Error::UnknownTag(name) => write!(f, "unrecognized tag '{}'", name),
            Error::PayloadMismatch { tag, found } => {
                write!(f, "payload for tag '{}' has the wrong shape: found {}", tag, found)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
