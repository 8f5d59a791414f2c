//! Host-side dynamic values.
//!
//! `Value` is what registered functions receive and return, and what the
//! converter marshals across the boundary. Containers are shared handles:
//! host graphs may alias, and therefore cycle, which is exactly the case the
//! converter has to detect. `Func` and `Opaque` have no wire representation.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// A host function callable through the registry.
pub type HostFn = Arc<dyn Fn(&[Value]) -> anyhow::Result<Value> + Send + Sync>;

/// Shared handle to a host container.
pub type Shared<T> = Arc<RwLock<T>>;

#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Shared<Vec<Value>>),
    Map(Shared<BTreeMap<String, Value>>),
    /// A host callable. Not representable on the wire.
    Func(HostFn),
    /// An opaque host handle. Not representable on the wire.
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl Value {
    /// Builds a list value from owned elements.
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Arc::new(RwLock::new(items)))
    }

    /// Builds a map value from owned entries.
    pub fn map(entries: BTreeMap<String, Value>) -> Self {
        Value::Map(Arc::new(RwLock::new(entries)))
    }

    /// Wraps a plain closure as a callable value.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Value::Func(Arc::new(f))
    }

    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::Int(i) => write!(f, "Int({})", i),
            Value::Float(x) => write!(f, "Float({})", x),
            Value::Str(s) => write!(f, "Str({:?})", s),
            // Containers may be cyclic; print their size, not their contents.
            Value::List(items) => write!(f, "List(len {})", items.read().len()),
            Value::Map(entries) => write!(f, "Map(len {})", entries.read().len()),
            Value::Func(_) => write!(f, "Func(..)"),
            Value::Opaque(_) => write!(f, "Opaque(..)"),
        }
    }
}

/// Observational equality: the two numeric variants compare by value, so
/// `Int(5) == Float(5.0)`. Containers compare structurally, callables and
/// opaque handles by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                if Arc::ptr_eq(a, b) {
                    return true;
                }
                *a.read() == *b.read()
            }
            (Value::Map(a), Value::Map(b)) => {
                if Arc::ptr_eq(a, b) {
                    return true;
                }
                *a.read() == *b.read()
            }
            (Value::Func(a), Value::Func(b)) => Arc::ptr_eq(a, b),
            (Value::Opaque(a), Value::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}
