//! Encoding `BridgeValue` into the canonical envelope form.

use serde_json::json;
use serde_json::Map;
use serde_json::Value as Json;

use crate::value::BridgeValue;

/// Encodes a value as its `{"type": <tag>, "value": <payload>}` envelope.
///
/// `Array` and `Object` payloads are enveloped recursively, so the wire form
/// is self-describing at every depth. `Int` payloads ride as JSON integers,
/// never through a float representation.
pub fn encode_value(value: &BridgeValue) -> Json {
    let payload = match value {
        BridgeValue::Null => Json::Null,
        BridgeValue::Bool(b) => json!(b),
        BridgeValue::Int(i) => json!(i),
        BridgeValue::Float(f) => json!(f),
        BridgeValue::String(s) => json!(s),
        BridgeValue::Array(items) => Json::Array(items.iter().map(encode_value).collect()),
        BridgeValue::Object(fields) => {
            let mut map = Map::new();
            for (key, val) in fields {
                map.insert(key.clone(), encode_value(val));
            }
            Json::Object(map)
        }
    };

    json!({ "type": value.tag().as_str(), "value": payload })
}

/// Serializes a value to canonical JSON text.
pub fn to_json(value: &BridgeValue) -> String {
    encode_value(value).to_string()
}
