//! Dotted-key access to nested mappings.
//!
//! This module provides [`NestedDict`], an adapter that owns one nested
//! [`Mapping`] and lets callers address it with dotted paths such as
//! `"k1.k2.k3"` instead of chained key lookups.
//!
//! # Core Types
//!
//! - [`NestedDict`] - Owns a nested mapping; dotted get/put plus nested and dotted exports
//! - [`Mapping`] - One level of a nested mapping
//! - [`Value`] - A leaf or a nested mapping
//! - [`Path`] / [`PathBuf`] - Dotted paths
//! - [`Fields`] - Opt-in field enumeration for converting plain objects
//!
//! # Three representations
//!
//! ```
//! use nesteddict::nested::{NestedDict, Value};
//!
//! let mut dict = NestedDict::new();
//! dict.put("user.profile.name", "Alice")?;
//! dict.put("user.profile.age", 30)?;
//! dict.put("active", true)?;
//!
//! // Nested form
//! let user = dict.to_nested().get("user").and_then(Value::as_map).unwrap();
//! assert!(user.get("profile").is_some_and(Value::is_map));
//!
//! // Dotted form: one entry per leaf
//! let dotted = dict.to_dotted();
//! assert_eq!(dotted.len(), 3);
//! assert_eq!(dotted["user.profile.name"], "Alice");
//!
//! // And back again
//! let rebuilt = NestedDict::from_dotted(dotted)?;
//! assert_eq!(rebuilt, dict);
//! # Ok::<(), nesteddict::nested::NestedError>(())
//! ```

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod fields;
pub mod json;
pub mod mapping;
pub mod path;
pub mod value;

pub use errors::NestedError;
pub use fields::{Field, Fields, Object, object_to_mapping};
pub use json::Serialized;
pub use mapping::{
    Mapping, flatten_keys, flatten_leaves, path_get, path_get_mut, path_remove, path_set,
};
pub use path::{Path, PathBuf};
pub use value::Value;

/// Inputs accepted when constructing or resetting a [`NestedDict`].
///
/// Mappings (including `Value::Map` and JSON objects) are copied, objects are
/// converted through [`object_to_mapping`], and serializable values through
/// [`Serialized`]. Every other input is rejected with
/// [`NestedError::InvalidArgument`].
pub trait IntoNested {
    /// Produces the owned mapping a [`NestedDict`] will hold.
    fn into_mapping(self) -> Result<Mapping, NestedError>;
}

fn not_a_mapping(kind: &str) -> NestedError {
    NestedError::InvalidArgument {
        reason: format!("{kind} is neither a mapping nor an object with fields"),
    }
}

impl IntoNested for Mapping {
    fn into_mapping(self) -> Result<Mapping, NestedError> {
        Ok(self)
    }
}

impl IntoNested for &Mapping {
    fn into_mapping(self) -> Result<Mapping, NestedError> {
        Ok(self.clone())
    }
}

impl IntoNested for Value {
    fn into_mapping(self) -> Result<Mapping, NestedError> {
        match self {
            Value::Map(mapping) => Ok(mapping),
            other => Err(not_a_mapping(other.type_name())),
        }
    }
}

impl IntoNested for &Value {
    fn into_mapping(self) -> Result<Mapping, NestedError> {
        match self {
            Value::Map(mapping) => Ok(mapping.clone()),
            other => Err(not_a_mapping(other.type_name())),
        }
    }
}

impl IntoNested for serde_json::Value {
    fn into_mapping(self) -> Result<Mapping, NestedError> {
        Value::from(self).into_mapping()
    }
}

impl IntoNested for &serde_json::Value {
    fn into_mapping(self) -> Result<Mapping, NestedError> {
        self.clone().into_mapping()
    }
}

impl IntoNested for NestedDict {
    fn into_mapping(self) -> Result<Mapping, NestedError> {
        Ok(self.val)
    }
}

impl IntoNested for &NestedDict {
    fn into_mapping(self) -> Result<Mapping, NestedError> {
        Ok(self.val.clone())
    }
}

impl<T: Fields + ?Sized> IntoNested for Object<'_, T> {
    fn into_mapping(self) -> Result<Mapping, NestedError> {
        Ok(object_to_mapping(self.0))
    }
}

impl<T: Serialize + ?Sized> IntoNested for Serialized<'_, T> {
    fn into_mapping(self) -> Result<Mapping, NestedError> {
        self.to_mapping()
    }
}

/// A nested mapping addressed by dotted paths.
///
/// A `NestedDict` owns its mapping outright: construction copies or converts
/// the input, so later changes on either side are never visible to the other.
///
/// # Writing through leaves
///
/// [`put`](NestedDict::put) creates missing intermediate mappings but never
/// replaces a leaf with one. Writing `"a.b"` when `"a"` holds a leaf fails with
/// [`NestedError::PathConflict`] and leaves the dict unchanged.
///
/// ```
/// # use nesteddict::nested::NestedDict;
/// let mut dict = NestedDict::new();
/// dict.put("a", 1)?;
///
/// let err = dict.put("a.b", 2).unwrap_err();
/// assert!(err.is_conflict());
/// assert_eq!(*dict.get("a")?, 1);
/// # Ok::<(), nesteddict::nested::NestedError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NestedDict {
    val: Mapping,
}

impl NestedDict {
    /// Creates a dict holding an empty mapping
    pub fn new() -> Self {
        Self {
            val: Mapping::new(),
        }
    }

    /// Creates a dict from a mapping or an object.
    ///
    /// # Errors
    ///
    /// Returns [`NestedError::InvalidArgument`] if `initial` is neither a
    /// mapping nor an object with fields.
    pub fn construct(initial: impl IntoNested) -> Result<Self, NestedError> {
        let val = initial.into_mapping()?;
        tracing::debug!(keys = val.len(), "constructed nested dict");
        Ok(Self { val })
    }

    /// Replaces the whole mapping, with the same input rules as
    /// [`construct`](NestedDict::construct).
    ///
    /// On error the current mapping is kept.
    pub fn set(&mut self, newval: impl IntoNested) -> Result<(), NestedError> {
        let val = newval.into_mapping()?;
        tracing::debug!(keys = val.len(), "replaced nested dict contents");
        self.val = val;
        Ok(())
    }

    /// Gets the value at a dotted path.
    ///
    /// The value may be a leaf or a nested mapping.
    pub fn get(&self, key: impl AsRef<Path>) -> Result<&Value, NestedError> {
        path_get(&self.val, key.as_ref())
    }

    /// Gets a mutable reference to the value at a dotted path
    pub fn get_mut(&mut self, key: impl AsRef<Path>) -> Result<&mut Value, NestedError> {
        path_get_mut(&mut self.val, key.as_ref())
    }

    /// Gets the value at a dotted path with automatic type conversion.
    ///
    /// ```
    /// # use nesteddict::nested::NestedDict;
    /// let mut dict = NestedDict::new();
    /// dict.put("user.age", 30)?;
    ///
    /// assert_eq!(dict.get_as::<i64>("user.age")?, 30);
    /// assert!(dict.get_as::<String>("user.age").unwrap_err().is_type_error());
    /// assert!(dict.get_as::<i64>("user.name").unwrap_err().is_not_found());
    /// # Ok::<(), nesteddict::nested::NestedError>(())
    /// ```
    pub fn get_as<'a, T>(&'a self, key: impl AsRef<Path>) -> Result<T, NestedError>
    where
        T: TryFrom<&'a Value, Error = NestedError>,
    {
        T::try_from(self.get(key)?)
    }

    /// Returns true if a value exists at the dotted path
    pub fn contains_key(&self, key: impl AsRef<Path>) -> bool {
        self.get(key).is_ok()
    }

    /// Stores a value at a dotted path, returning the value it replaced.
    ///
    /// Intermediate mappings are created as needed. The value is assigned as-is;
    /// storing a mapping replaces whatever was at the path.
    ///
    /// # Errors
    ///
    /// - [`NestedError::PathConflict`] if an intermediate segment holds a leaf
    pub fn put(
        &mut self,
        key: impl AsRef<Path>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, NestedError> {
        let key = key.as_ref();
        tracing::trace!(path = %key, "put");
        path_set(&mut self.val, key, value.into())
    }

    /// Removes the value at a dotted path and returns it
    pub fn remove(&mut self, key: impl AsRef<Path>) -> Result<Value, NestedError> {
        path_remove(&mut self.val, key.as_ref())
    }

    /// Returns the nested mapping.
    ///
    /// The borrow is read-only; use [`put`](NestedDict::put) or
    /// [`get_mut`](NestedDict::get_mut) to modify the dict.
    pub fn to_nested(&self) -> &Mapping {
        &self.val
    }

    /// Consumes the dict and returns the nested mapping
    pub fn into_nested(self) -> Mapping {
        self.val
    }

    /// Returns the flattened form: one entry per leaf, keyed by dotted path.
    ///
    /// Internal mappings get no entry, so empty nested mappings disappear.
    /// Empty keys become empty segments: `{"a": {"": 1}}` yields `"a." -> 1`.
    pub fn to_dotted(&self) -> BTreeMap<String, Value> {
        flatten_leaves(&self.val)
            .into_iter()
            .map(|(key, value)| (key.into_string(), value.clone()))
            .collect()
    }

    /// Builds a dict by replaying dotted entries through [`put`](NestedDict::put).
    pub fn from_dotted<I, K, V>(entries: I) -> Result<Self, NestedError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<Path>,
        V: Into<Value>,
    {
        let mut dict = Self::new();
        for (key, value) in entries {
            dict.put(key, value)?;
        }
        Ok(dict)
    }

    /// Counts the leaves at any depth
    pub fn leaf_count(&self) -> usize {
        self.val.leaf_count()
    }

    /// Returns the number of top level keys
    pub fn len(&self) -> usize {
        self.val.len()
    }

    /// Returns true if the dict holds no keys
    pub fn is_empty(&self) -> bool {
        self.val.is_empty()
    }

    /// Returns an iterator over the top level key-value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.val.iter()
    }
}

impl fmt::Display for NestedDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.val)
    }
}

impl From<Mapping> for NestedDict {
    fn from(val: Mapping) -> Self {
        Self { val }
    }
}

impl TryFrom<Value> for NestedDict {
    type Error = NestedError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::construct(value)
    }
}

impl TryFrom<serde_json::Value> for NestedDict {
    type Error = NestedError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Self::construct(value)
    }
}
