use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use pontepack::BridgeValue;
use pontepack::Tag;

use super::ConvertOptions;
use super::Converter;
use super::Error;
use super::UnsupportedPolicy;
use super::Value;

fn strict() -> Converter {
    Converter::new(ConvertOptions {
        on_unsupported: UnsupportedPolicy::Error,
    })
}

fn host_map(entries: Vec<(&str, Value)>) -> Value {
    let mut map = BTreeMap::new();
    for (key, val) in entries {
        map.insert(key.to_string(), val);
    }
    Value::map(map)
}

#[test]
fn test_scalar_roundtrip() {
    let converter = Converter::default();
    let scalars = vec![
        Value::Null,
        Value::Bool(true),
        Value::Int(42),
        Value::Float(2.75),
        Value::str("ponte"),
    ];

    for value in scalars {
        let bridged = converter.to_bridge(&value).unwrap();
        assert_eq!(converter.from_bridge(&bridged), value);
    }
}

#[test]
fn test_integer_classification() {
    let converter = Converter::default();

    assert_eq!(converter.to_bridge(&Value::Int(5)).unwrap().tag(), Tag::Int);
    assert_eq!(
        converter.to_bridge(&Value::Float(5.5)).unwrap().tag(),
        Tag::Float
    );
    // No fractional component, so the host float classifies as int.
    assert_eq!(
        converter.to_bridge(&Value::Float(5.0)).unwrap(),
        BridgeValue::Int(5)
    );
    assert_eq!(
        converter.to_bridge(&Value::Float(-0.0)).unwrap(),
        BridgeValue::Int(0)
    );
}

#[test]
fn test_classification_is_observationally_lossless() {
    let converter = Converter::default();
    let original = Value::Float(5.0);
    let back = converter.from_bridge(&converter.to_bridge(&original).unwrap());
    // Int(5) on the way back, equal to Float(5.0) by numeric comparison.
    assert_eq!(back, original);
}

#[test]
fn test_huge_whole_floats_stay_floats() {
    let converter = Converter::default();
    let huge = 1.0e300;
    assert_eq!(
        converter.to_bridge(&Value::Float(huge)).unwrap(),
        BridgeValue::Float(huge)
    );
}

#[test]
fn test_nonfinite_floats_stay_floats() {
    let converter = Converter::default();
    assert_eq!(
        converter.to_bridge(&Value::Float(f64::INFINITY)).unwrap().tag(),
        Tag::Float
    );
    assert_eq!(
        converter.to_bridge(&Value::Float(f64::NAN)).unwrap().tag(),
        Tag::Float
    );
}

#[test]
fn test_structural_roundtrip_depth_five() {
    let converter = Converter::default();
    let value = host_map(vec![
        ("flag", Value::Bool(false)),
        (
            "rows",
            Value::list(vec![
                host_map(vec![(
                    "cells",
                    Value::list(vec![
                        Value::list(vec![Value::Int(1), Value::Float(0.5)]),
                        Value::Null,
                    ]),
                )]),
                Value::str("tail"),
            ]),
        ),
    ]);

    let bridged = converter.to_bridge(&value).unwrap();
    assert_eq!(bridged.tag(), Tag::Object);
    assert_eq!(converter.from_bridge(&bridged), value);
}

#[test]
fn test_list_order_preserved() {
    let converter = Converter::default();
    let value = Value::list(vec![Value::Int(3), Value::Int(1), Value::Int(2)]);

    match converter.to_bridge(&value).unwrap() {
        BridgeValue::Array(items) => {
            assert_eq!(
                items,
                vec![BridgeValue::Int(3), BridgeValue::Int(1), BridgeValue::Int(2)]
            );
        }
        other => panic!("Expected Array, got {:?}", other),
    }
}

#[test]
fn test_unsupported_degrades_to_null_by_default() {
    let converter = Converter::default();

    let func = Value::func(|_| Ok(Value::Null));
    assert_eq!(converter.to_bridge(&func).unwrap(), BridgeValue::Null);

    let opaque = Value::Opaque(Arc::new(5_u32));
    assert_eq!(converter.to_bridge(&opaque).unwrap(), BridgeValue::Null);

    // Partial graphs still cross: the callable inside the list degrades,
    // the rest converts.
    let mixed = Value::list(vec![Value::Int(1), func, Value::str("x")]);
    assert_eq!(
        converter.to_bridge(&mixed).unwrap(),
        BridgeValue::Array(vec![
            BridgeValue::Int(1),
            BridgeValue::Null,
            BridgeValue::String("x".into()),
        ])
    );
}

#[test]
fn test_unsupported_errors_under_strict_policy() {
    let converter = strict();
    let func = Value::func(|_| Ok(Value::Null));

    match converter.to_bridge(&func) {
        Err(Error::Unsupported(kind)) => assert_eq!(kind, "function"),
        other => panic!("Expected Unsupported, got {:?}", other),
    }

    // Inside a container the failure propagates out.
    let nested = Value::list(vec![Value::Int(1), Value::func(|_| Ok(Value::Null))]);
    assert!(matches!(
        converter.to_bridge(&nested),
        Err(Error::Unsupported(_))
    ));
}

#[test]
fn test_degraded_values_roundtrip_to_null() {
    let converter = Converter::default();
    let func = Value::func(|_| Ok(Value::Null));

    let back = converter.from_bridge(&converter.to_bridge(&func).unwrap());
    assert!(back.is_null());
}

#[test]
fn test_self_referential_list_is_a_cycle() {
    let converter = Converter::default();

    let inner = Arc::new(RwLock::new(Vec::new()));
    inner.write().push(Value::List(inner.clone()));
    let cyclic = Value::List(inner);

    assert_eq!(converter.to_bridge(&cyclic), Err(Error::Cycle));
}

#[test]
fn test_mutual_cycle_through_map() {
    let converter = Converter::default();

    let list = Arc::new(RwLock::new(Vec::new()));
    let map = Arc::new(RwLock::new(BTreeMap::new()));
    list.write().push(Value::Map(map.clone()));
    map.write().insert("back".to_string(), Value::List(list.clone()));

    assert_eq!(converter.to_bridge(&Value::List(list)), Err(Error::Cycle));
}

#[test]
fn test_diamond_sharing_is_not_a_cycle() {
    let converter = Converter::default();

    // The same node hangs off two branches; that is sharing, not a cycle.
    let shared = Value::list(vec![Value::Int(9)]);
    let diamond = Value::list(vec![shared.clone(), shared]);

    let bridged = converter.to_bridge(&diamond).unwrap();
    let nine = BridgeValue::Array(vec![BridgeValue::Int(9)]);
    assert_eq!(bridged, BridgeValue::Array(vec![nine.clone(), nine]));
}

#[test]
fn test_from_bridge_builds_fresh_containers() {
    let converter = Converter::default();
    let bridged = BridgeValue::Array(vec![BridgeValue::Int(1)]);

    let (a, b) = (
        converter.from_bridge(&bridged),
        converter.from_bridge(&bridged),
    );

    // Structurally equal, but distinct handles.
    assert_eq!(a, b);
    match (a, b) {
        (Value::List(a), Value::List(b)) => assert!(!Arc::ptr_eq(&a, &b)),
        other => panic!("Expected two lists, got {:?}", other),
    }
}

#[test]
fn test_object_keys_copied_verbatim() {
    let converter = Converter::default();
    let value = host_map(vec![("WeIrD key ", Value::Int(1))]);

    match converter.to_bridge(&value).unwrap() {
        BridgeValue::Object(fields) => {
            assert!(fields.contains_key("WeIrD key "));
        }
        other => panic!("Expected Object, got {:?}", other),
    }
}
