//! Decoding the canonical envelope form back into `BridgeValue`.

use std::collections::BTreeMap;

use serde_json::Value as Json;

use crate::types::Error;
use crate::types::Result;
use crate::types::Tag;
use crate::value::BridgeValue;

/// Parses JSON text and decodes the envelope within.
pub fn from_json(text: &str) -> Result<BridgeValue> {
    let json: Json = serde_json::from_str(text)?;
    decode_value(&json)
}

/// Decodes a `{"type": <tag>, "value": <payload>}` envelope.
///
/// Fails if the envelope structure, tag, or payload shape is off. Range and
/// precision checks are the converter's business, not the codec's.
pub fn decode_value(json: &Json) -> Result<BridgeValue> {
    let Json::Object(envelope) = json else {
        return Err(Error::NotAnEnvelope);
    };

    let tag_name = match envelope.get("type") {
        Some(Json::String(name)) => name,
        Some(_) => return Err(Error::NotAnEnvelope),
        None => return Err(Error::MissingTag),
    };

    let tag = Tag::from_str(tag_name).ok_or_else(|| Error::UnknownTag(tag_name.clone()))?;
    let payload = envelope.get("value").unwrap_or(&Json::Null);

    match (tag, payload) {
        (Tag::Null, Json::Null) => Ok(BridgeValue::Null),
        (Tag::Bool, Json::Bool(b)) => Ok(BridgeValue::Bool(*b)),
        // An "int" payload must be a whole JSON number; 5.5 is a mismatch.
        (Tag::Int, Json::Number(n)) => n
            .as_i64()
            .map(BridgeValue::Int)
            .ok_or(Error::PayloadMismatch { tag, found: "non-integer number" }),
        (Tag::Float, Json::Number(n)) => n
            .as_f64()
            .map(BridgeValue::Float)
            .ok_or(Error::PayloadMismatch { tag, found: "non-float number" }),
        (Tag::String, Json::String(s)) => Ok(BridgeValue::String(s.clone())),
        (Tag::Array, Json::Array(items)) => {
            let mut elems = Vec::with_capacity(items.len());
            for item in items {
                elems.push(decode_value(item)?);
            }
            Ok(BridgeValue::Array(elems))
        }
        (Tag::Object, Json::Object(fields)) => {
            let mut map = BTreeMap::new();
            for (key, val) in fields {
                map.insert(key.clone(), decode_value(val)?);
            }
            Ok(BridgeValue::Object(map))
        }
        (tag, payload) => Err(Error::PayloadMismatch { tag, found: describe(payload) }),
    }
}

fn describe(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
