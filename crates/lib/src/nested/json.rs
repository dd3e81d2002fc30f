//! Conversions between nested mappings and `serde_json` values.
//!
//! Any `serde::Serialize` type can stand in for a plain object through the
//! [`Serialized`] wrapper: it is serialized to a JSON tree first and then
//! converted like an object, dropping every field whose name starts with `_`.

use serde::Serialize;

use super::{Mapping, NestedError, Value, fields::is_private};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(Mapping::from(map)),
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Mapping {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter()
            .map(|(key, value)| (key, Value::from(value)))
            .collect()
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(n) => serde_json::Value::Number(n.into()),
            Value::Float(n) => serde_json::Number::from_f64(n)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::Text(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Map(mapping) => serde_json::Value::from(mapping),
        }
    }
}

impl From<Mapping> for serde_json::Value {
    fn from(mapping: Mapping) -> Self {
        serde_json::Value::Object(
            mapping
                .into_iter()
                .map(|(key, value)| (key, value.into()))
                .collect(),
        )
    }
}

/// Wraps a reference to a serializable value so it can be used to construct or
/// reset a [`NestedDict`](super::NestedDict).
///
/// The value must serialize to a JSON object. Keys with a leading `_` are
/// dropped at every depth, including inside lists.
///
/// Stripping happens after serialization, where struct fields and map entries
/// look the same. Entries of map-typed fields (`HashMap`, `BTreeMap`,
/// `serde_json::Value`) are therefore dropped too. Construct from a
/// [`Mapping`] or a `serde_json::Value` directly to keep such keys.
///
/// ```
/// # use nesteddict::nested::{NestedDict, Serialized};
/// #[derive(serde::Serialize)]
/// struct Settings {
///     theme: String,
///     _session: u64,
/// }
///
/// let settings = Settings { theme: "dark".into(), _session: 7 };
/// let dict = NestedDict::construct(Serialized(&settings))?;
///
/// assert_eq!(*dict.get("theme")?, "dark");
/// assert!(!dict.contains_key("_session"));
/// # Ok::<(), nesteddict::nested::NestedError>(())
/// ```
pub struct Serialized<'a, T: ?Sized>(pub &'a T);

impl<T: Serialize + ?Sized> Serialized<'_, T> {
    /// Serializes the wrapped value and converts it into a mapping of its
    /// public fields.
    pub fn to_mapping(&self) -> Result<Mapping, NestedError> {
        let json =
            serde_json::to_value(self.0).map_err(|e| NestedError::SerializationFailed {
                reason: e.to_string(),
            })?;

        match strip_private(Value::from(json)) {
            Value::Map(mapping) => Ok(mapping),
            other => Err(NestedError::InvalidArgument {
                reason: format!(
                    "serialized value is a {}, expected an object with fields",
                    other.type_name()
                ),
            }),
        }
    }
}

fn strip_private(value: Value) -> Value {
    match value {
        Value::Map(mapping) => Value::Map(
            mapping
                .into_iter()
                .filter(|(key, _)| !is_private(key))
                .map(|(key, value)| (key, strip_private(value)))
                .collect(),
        ),
        Value::List(items) => Value::List(items.into_iter().map(strip_private).collect()),
        leaf => leaf,
    }
}
