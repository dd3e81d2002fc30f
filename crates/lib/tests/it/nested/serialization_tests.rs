//! Serde and JSON interop tests

use std::collections::{BTreeMap, HashMap};

use nesteddict::{
    Error, NestedDict,
    nested::{Mapping, NestedError, Serialized, Value},
};
use serde::Serialize;
use serde_json::json;

use crate::helpers::*;

#[derive(Serialize)]
struct Profile {
    name: String,
    age: u32,
    _token: String,
    address: Address,
    history: Vec<Visit>,
}

#[derive(Serialize)]
struct Address {
    city: String,
    _geo: (f64, f64),
}

#[derive(Serialize)]
struct Visit {
    page: String,
    _ms: u64,
}

fn profile() -> Profile {
    Profile {
        name: "Alice".to_string(),
        age: 30,
        _token: "abc".to_string(),
        address: Address {
            city: "Oslo".to_string(),
            _geo: (59.9, 10.7),
        },
        history: vec![Visit {
            page: "/home".to_string(),
            _ms: 12,
        }],
    }
}

// ===== SERDE =====

#[test]
fn test_dict_serializes_as_plain_json() {
    let json = serde_json::to_value(sample_dict()).unwrap();
    assert_eq!(
        json,
        json!({
            "name": "widget",
            "size": {"w": 10, "h": 20},
            "meta": {"owner": {"id": 7, "tags": ["a", "b"]}, "draft": false},
        })
    );
}

#[test]
fn test_dict_json_round_trip() {
    let dict = sample_dict();
    let text = serde_json::to_string(&dict).unwrap();
    let back: NestedDict = serde_json::from_str(&text).unwrap();
    assert_eq!(back, dict);
}

#[test]
fn test_deserialize_scalar_kinds() {
    let dict: NestedDict =
        serde_json::from_str(r#"{"n": null, "f": 1.5, "i": -4, "s": "x", "l": [1, "a"]}"#)
            .unwrap();

    assert_eq!(*dict.get("n").unwrap(), Value::Null);
    assert_eq!(*dict.get("f").unwrap(), Value::Float(1.5));
    assert_eq!(*dict.get("i").unwrap(), Value::Int(-4));
    assert_eq!(*dict.get("s").unwrap(), "x");
    assert_eq!(
        *dict.get("l").unwrap(),
        Value::List(vec![Value::Int(1), Value::from("a")])
    );
}

#[test]
fn test_deserialize_rejects_non_objects() {
    assert!(serde_json::from_str::<NestedDict>("[1, 2]").is_err());
    assert!(serde_json::from_str::<NestedDict>("3").is_err());
}

#[test]
fn test_dotted_form_serializes_flat() {
    let json = serde_json::to_value(sample_dict().to_dotted()).unwrap();
    assert_eq!(json["meta.owner.id"], json!(7));
    assert_eq!(json.as_object().unwrap().len(), 6);
}

// ===== SERIALIZED OBJECTS =====

#[test]
fn test_serialized_strips_private_fields_at_every_depth() {
    let dict = NestedDict::construct(Serialized(&profile())).unwrap();

    let expected = json!({
        "name": "Alice",
        "age": 30,
        "address": {"city": "Oslo"},
        "history": [{"page": "/home"}],
    });
    assert_eq!(serde_json::Value::from(dict.into_nested()), expected);
}

#[test]
fn test_serialized_map_types() {
    let mut settings = BTreeMap::new();
    settings.insert("ui.theme", "dark");
    settings.insert("_internal", "x");

    let mapping = Serialized(&settings).to_mapping().unwrap();
    // Keys are taken verbatim; dots inside a key are not split
    assert_eq!(mapping, Mapping::new().with("ui.theme", "dark"));
}

#[test]
fn test_serialized_strips_underscore_keys_inside_map_fields() {
    #[derive(Serialize)]
    struct Labels {
        name: String,
        labels: HashMap<String, String>,
        extra: serde_json::Value,
    }

    let labels = Labels {
        name: "job".to_string(),
        labels: HashMap::from([
            ("_owner".to_string(), "ops".to_string()),
            ("tier".to_string(), "web".to_string()),
        ]),
        extra: json!({"_raw": 1, "kept": 2}),
    };

    let dict = NestedDict::construct(Serialized(&labels)).unwrap();
    assert_eq!(
        serde_json::Value::from(dict.into_nested()),
        json!({"name": "job", "labels": {"tier": "web"}, "extra": {"kept": 2}})
    );
}

#[test]
fn test_plain_json_keeps_underscore_keys() {
    let source = json!({"_a": 1, "b": {"_c": 2}});

    let direct = NestedDict::construct(&source).unwrap();
    assert_eq!(*direct.get("b._c").unwrap(), 2);
    assert_eq!(direct.leaf_count(), 2);

    let serialized = NestedDict::construct(Serialized(&source)).unwrap();
    assert_eq!(serde_json::Value::from(serialized.into_nested()), json!({"b": {}}));
}

#[test]
fn test_serialized_rejects_non_objects() {
    let err = Serialized(&42).to_mapping().unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("int"));

    let err = NestedDict::construct(Serialized(&vec!["a", "b"])).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_serialized_reports_serializer_errors() {
    let mut bad = BTreeMap::new();
    bad.insert((1, 2), "tuple keys cannot become JSON keys");

    let err = Serialized(&bad).to_mapping().unwrap_err();
    assert!(matches!(err, NestedError::SerializationFailed { .. }));
}

// ===== ERROR PROPAGATION =====

#[test]
fn test_nested_errors_convert_into_crate_error() {
    fn lookup(dict: &NestedDict, key: &str) -> nesteddict::Result<i64> {
        Ok(dict.get_as::<i64>(key)?)
    }

    let dict = sample_dict();
    assert_eq!(lookup(&dict, "size.w").unwrap(), 10);

    let err = lookup(&dict, "size.depth").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.module(), "nested");
    assert_eq!(err.to_string(), "Key not found: 'depth' in path 'size.depth'");

    let err: Error = NestedDict::construct(json!(1)).unwrap_err().into();
    assert!(err.is_invalid_argument());

    let err: Error = serde_json::from_str::<NestedDict>("{").unwrap_err().into();
    assert!(err.is_serialization_error());
    assert!(!err.is_not_found());
}
