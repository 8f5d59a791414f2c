//! The tagged union moved across a language boundary.

use std::collections::BTreeMap;

use crate::types::Tag;

/// A language-neutral value.
///
/// The union is closed: every value carries one of the seven tags and nothing
/// else. `Array` and `Object` are recursively well-formed by construction.
/// This is value-semantics data, immutable once built, freely copyable, and
/// never shared as mutable state; it exists only for the duration of the call
/// that carries it.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<BridgeValue>),
    Object(BTreeMap<String, BridgeValue>),
}

impl BridgeValue {
    /// The wire tag for this value.
    pub fn tag(&self) -> Tag {
        match self {
            BridgeValue::Null => Tag::Null,
            BridgeValue::Bool(_) => Tag::Bool,
            BridgeValue::Int(_) => Tag::Int,
            BridgeValue::Float(_) => Tag::Float,
            BridgeValue::String(_) => Tag::String,
            BridgeValue::Array(_) => Tag::Array,
            BridgeValue::Object(_) => Tag::Object,
        }
    }
}

impl From<bool> for BridgeValue {
    fn from(v: bool) -> Self {
        BridgeValue::Bool(v)
    }
}

impl From<i64> for BridgeValue {
    fn from(v: i64) -> Self {
        BridgeValue::Int(v)
    }
}

impl From<f64> for BridgeValue {
    fn from(v: f64) -> Self {
        BridgeValue::Float(v)
    }
}

impl From<&str> for BridgeValue {
    fn from(v: &str) -> Self {
        BridgeValue::String(v.to_string())
    }
}

impl From<String> for BridgeValue {
    fn from(v: String) -> Self {
        BridgeValue::String(v)
    }
}

impl From<Vec<BridgeValue>> for BridgeValue {
    fn from(v: Vec<BridgeValue>) -> Self {
        BridgeValue::Array(v)
    }
}

impl From<BTreeMap<String, BridgeValue>> for BridgeValue {
    fn from(v: BTreeMap<String, BridgeValue>) -> Self {
        BridgeValue::Object(v)
    }
}
