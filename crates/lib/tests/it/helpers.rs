use nesteddict::{
    NestedDict,
    nested::{Mapping, NestedError, Value},
};

// ==========================
// FIXTURES
// ==========================

/// A three level mapping with leaves at every depth.
///
/// ```text
/// {
///   name: "widget",
///   size: {w: 10, h: 20},
///   meta: {owner: {id: 7, tags: ["a", "b"]}, draft: false},
/// }
/// ```
pub fn sample_mapping() -> Mapping {
    Mapping::new()
        .with("name", "widget")
        .with_map("size", Mapping::new().with("w", 10).with("h", 20))
        .with_map(
            "meta",
            Mapping::new()
                .with_map(
                    "owner",
                    Mapping::new()
                        .with("id", 7)
                        .with("tags", vec!["a", "b"]),
                )
                .with("draft", false),
        )
}

/// A dict built from [`sample_mapping`]
pub fn sample_dict() -> NestedDict {
    NestedDict::construct(sample_mapping()).expect("a mapping is always accepted")
}

// ==========================
// ASSERTION HELPERS
// ==========================

/// Assert that a lookup failed because `segment` was missing
pub fn assert_key_not_found<T: std::fmt::Debug>(result: Result<T, NestedError>, segment: &str) {
    match result {
        Err(NestedError::KeyNotFound { segment: missing, .. }) => {
            assert_eq!(missing, segment, "wrong missing segment reported");
        }
        other => panic!("Expected KeyNotFound for '{segment}', got: {other:?}"),
    }
}

/// Assert that a dict holds the expected value at every dotted path
pub fn assert_dict_contains(dict: &NestedDict, expected: &[(&str, Value)]) {
    for (path, expected_value) in expected {
        match dict.get(*path) {
            Ok(actual) => assert_eq!(actual, expected_value, "Value mismatch for path '{path}'"),
            Err(e) => panic!("Path '{path}' not found in dict: {e}"),
        }
    }
}
