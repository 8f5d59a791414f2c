//! Bidirectional conversion between host values and wire values.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use pontepack::BridgeValue;

use crate::value::Value;

/// What `to_bridge` does with a host value that has no wire representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedPolicy {
    /// Degrade to `Null` and keep converting, so partial graphs still cross.
    #[default]
    Degrade,
    /// Fail the whole conversion.
    Error,
}

/// Conversion configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    pub on_unsupported: UnsupportedPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A container was reachable from itself; conversion would not terminate.
    Cycle,
    /// An unconvertible host value under `UnsupportedPolicy::Error`.
    Unsupported(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Cycle => write!(f, "cycle detected in host value"),
            Error::Unsupported(kind) => write!(f, "unsupported host value: {}", kind),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// Marshals host values to wire form and back.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Converts a host value to its wire representation.
    ///
    /// Numeric classification: a number with no fractional component is
    /// tagged `int`, whichever host variant carried it. The rule runs on
    /// every element of a container. Host values outside the wire model
    /// degrade to `Null` or fail, per the configured policy.
    pub fn to_bridge(&self, value: &Value) -> Result<BridgeValue> {
        let mut path = Vec::new();
        self.convert_in(value, &mut path)
    }

    fn convert_in(&self, value: &Value, path: &mut Vec<usize>) -> Result<BridgeValue> {
        match value {
            Value::Null => Ok(BridgeValue::Null),
            Value::Bool(b) => Ok(BridgeValue::Bool(*b)),
            Value::Int(i) => Ok(BridgeValue::Int(*i)),
            Value::Float(f) => Ok(classify_float(*f)),
            Value::Str(s) => Ok(BridgeValue::String(s.clone())),
            Value::List(items) => {
                self.enter(container_id(items), path)?;
                let mut converted = Vec::new();
                {
                    let items = items.read();
                    converted.reserve(items.len());
                    for item in items.iter() {
                        converted.push(self.convert_in(item, path)?);
                    }
                }
                path.pop();
                Ok(BridgeValue::Array(converted))
            }
            Value::Map(entries) => {
                self.enter(container_id(entries), path)?;
                let mut converted = BTreeMap::new();
                {
                    let entries = entries.read();
                    for (key, val) in entries.iter() {
                        converted.insert(key.clone(), self.convert_in(val, path)?);
                    }
                }
                path.pop();
                Ok(BridgeValue::Object(converted))
            }
            Value::Func(_) => self.unsupported("function"),
            Value::Opaque(_) => self.unsupported("opaque handle"),
        }
    }

    /// Converts a wire value back to a host value.
    ///
    /// Total: every well-formed `BridgeValue` has a host rendering, so this
    /// direction cannot fail. Containers come back as fresh host handles.
    pub fn from_bridge(&self, value: &BridgeValue) -> Value {
        match value {
            BridgeValue::Null => Value::Null,
            BridgeValue::Bool(b) => Value::Bool(*b),
            BridgeValue::Int(i) => Value::Int(*i),
            BridgeValue::Float(f) => Value::Float(*f),
            BridgeValue::String(s) => Value::Str(s.clone()),
            BridgeValue::Array(items) => {
                Value::list(items.iter().map(|item| self.from_bridge(item)).collect())
            }
            BridgeValue::Object(fields) => {
                let mut out = BTreeMap::new();
                for (key, val) in fields {
                    out.insert(key.clone(), self.from_bridge(val));
                }
                Value::map(out)
            }
        }
    }

    /// Identity check along the current conversion path only, so a node
    /// shared between two branches converts twice rather than erroring.
    fn enter(&self, id: usize, path: &mut Vec<usize>) -> Result<()> {
        if path.contains(&id) {
            return Err(Error::Cycle);
        }
        path.push(id);
        Ok(())
    }

    fn unsupported(&self, kind: &'static str) -> Result<BridgeValue> {
        match self.options.on_unsupported {
            UnsupportedPolicy::Degrade => Ok(BridgeValue::Null),
            UnsupportedPolicy::Error => Err(Error::Unsupported(kind)),
        }
    }
}

fn container_id<T>(handle: &Arc<T>) -> usize {
    Arc::as_ptr(handle) as *const () as usize
}

/// i64 holds every whole f64 whose magnitude stays below 2^63; past that the
/// cast is lossy, so such floats keep the `float` tag.
fn classify_float(f: f64) -> BridgeValue {
    const I64_EDGE: f64 = 9_223_372_036_854_775_808.0; // 2^63
    if f.is_finite() && f.fract() == 0.0 && f >= -I64_EDGE && f < I64_EDGE {
        BridgeValue::Int(f as i64)
    } else {
        BridgeValue::Float(f)
    }
}
