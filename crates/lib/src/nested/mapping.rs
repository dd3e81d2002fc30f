//! The nested mapping type and the dotted-path algorithms that walk it.
//!
//! A [`Mapping`] is one level of a tree: string keys pointing at either a leaf
//! [`Value`] or another mapping. The free functions in this module address the
//! whole tree through dotted paths:
//!
//! - [`path_get`] / [`path_get_mut`] - read the value at a path
//! - [`path_set`] - write a value at a path, creating intermediate mappings
//! - [`path_remove`] - remove the value at a path
//! - [`flatten_keys`] - list the dotted path of every leaf
//!
//! ```
//! use nesteddict::nested::{Mapping, Path, Value, flatten_keys, path_get, path_set};
//!
//! let mut mapping = Mapping::new();
//! path_set(&mut mapping, Path::new("user.profile.name"), Value::from("Alice"))?;
//! path_set(&mut mapping, Path::new("user.active"), Value::from(true))?;
//!
//! assert_eq!(*path_get(&mapping, Path::new("user.profile.name"))?, "Alice");
//!
//! let keys: Vec<String> = flatten_keys(&mapping).into_iter().map(String::from).collect();
//! assert_eq!(keys, vec!["user.active", "user.profile.name"]);
//! # Ok::<(), nesteddict::nested::NestedError>(())
//! ```

use std::{
    collections::{BTreeMap, btree_map},
    fmt,
};

use serde::{Deserialize, Serialize};

use super::{NestedError, Path, PathBuf, Value};

/// One level of a nested mapping.
///
/// Keys are unique and iterate in sorted order. Key order carries no meaning;
/// sorting only keeps output deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping {
    /// Child values indexed by key
    children: BTreeMap<String, Value>,
}

impl Mapping {
    /// Creates a new empty mapping
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
        }
    }

    /// Returns the number of keys at this level
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if this level has no keys
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns true if `key` is present at this level
    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    /// Gets the value stored under a single key at this level.
    ///
    /// Use [`path_get`] to follow a dotted path.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.children.get(key)
    }

    /// Gets a mutable reference to the value stored under a single key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.children.get_mut(key)
    }

    /// Stores a value under a single key, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.children.insert(key.into(), value.into())
    }

    /// Removes a single key, returning its value
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.children.remove(key)
    }

    /// Returns an iterator over the key-value pairs at this level
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.children.iter()
    }

    /// Returns an iterator over the keys at this level
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.children.keys()
    }

    /// Returns an iterator over the values at this level
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.children.values()
    }

    /// Counts the leaves reachable from this mapping, at any depth
    pub fn leaf_count(&self) -> usize {
        self.children
            .values()
            .map(|value| match value {
                Value::Map(child) => child.leaf_count(),
                _ => 1,
            })
            .sum()
    }

    /// Builder method to store a value under a top level key and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder method to store a nested mapping under a top level key
    pub fn with_map(self, key: impl Into<String>, value: Mapping) -> Self {
        self.with(key, Value::Map(value))
    }
}

/// Renders the mapping as compact JSON.
impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl FromIterator<(String, Value)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

fn key_not_found(path: &Path, segment: &str) -> NestedError {
    NestedError::KeyNotFound {
        path: path.as_str().to_string(),
        segment: segment.to_string(),
    }
}

/// Reads the value at a dotted path.
///
/// Fails with [`NestedError::KeyNotFound`] naming the first segment that is
/// absent, including a segment that would have to descend into a leaf.
pub fn path_get<'a>(mapping: &'a Mapping, path: &Path) -> Result<&'a Value, NestedError> {
    let (first, rest) = path.split_first();
    let mut value = mapping
        .children
        .get(first)
        .ok_or_else(|| key_not_found(path, first))?;

    for segment in rest.into_iter().flat_map(Path::components) {
        value = match value {
            Value::Map(child) => child.children.get(segment),
            _ => None,
        }
        .ok_or_else(|| key_not_found(path, segment))?;
    }

    Ok(value)
}

/// Mutable counterpart of [`path_get`].
pub fn path_get_mut<'a>(
    mapping: &'a mut Mapping,
    path: &Path,
) -> Result<&'a mut Value, NestedError> {
    let (first, rest) = path.split_first();
    let mut value = mapping
        .children
        .get_mut(first)
        .ok_or_else(|| key_not_found(path, first))?;

    for segment in rest.into_iter().flat_map(Path::components) {
        value = match value {
            Value::Map(child) => child.children.get_mut(segment),
            _ => None,
        }
        .ok_or_else(|| key_not_found(path, segment))?;
    }

    Ok(value)
}

/// Writes a value at a dotted path, returning the value it replaced.
///
/// Missing intermediate segments are created as empty mappings. The final
/// segment is assigned directly: a mapping value replaces whatever was there,
/// it is never merged.
///
/// Writing through a leaf fails with [`NestedError::PathConflict`] and leaves
/// the mapping untouched; new intermediate mappings are only created below the
/// last existing one, so no conflict can occur after the first insertion.
pub fn path_set(
    mapping: &mut Mapping,
    path: &Path,
    value: Value,
) -> Result<Option<Value>, NestedError> {
    let mut level = mapping;

    if let Some(parent) = path.parent() {
        for (depth, segment) in parent.components().enumerate() {
            let child = level
                .children
                .entry(segment.to_string())
                .or_insert_with(|| Value::Map(Mapping::new()));

            level = match child {
                Value::Map(child) => child,
                leaf => {
                    let here = path.prefix(depth + 1);
                    tracing::debug!(
                        path = %here,
                        found = leaf.type_name(),
                        "refusing to write through leaf"
                    );
                    return Err(NestedError::PathConflict {
                        path: here.as_str().to_string(),
                        found: leaf.type_name().to_string(),
                    });
                }
            };
        }
    }

    Ok(level.children.insert(path.file_name().to_string(), value))
}

/// Removes the value at a dotted path and returns it.
///
/// Intermediate mappings are left in place even when the removal empties them.
pub fn path_remove(mapping: &mut Mapping, path: &Path) -> Result<Value, NestedError> {
    let last = path.file_name();
    let parent = match path.parent() {
        None => mapping,
        Some(parent) => match path_get_mut(mapping, parent)? {
            Value::Map(child) => child,
            _ => return Err(key_not_found(path, last)),
        },
    };

    parent
        .children
        .remove(last)
        .ok_or_else(|| key_not_found(path, last))
}

/// Pairs every leaf in `mapping` with its dotted path.
///
/// Each leaf appears exactly once, in key order. Internal mappings produce no
/// entry of their own, so an empty nested mapping contributes nothing. Empty
/// keys yield empty segments: `{"a": {"": 1}}` flattens to `"a."`.
pub fn flatten_leaves(mapping: &Mapping) -> Vec<(PathBuf, &Value)> {
    let mut leaves = Vec::new();
    collect_leaves(mapping, None, &mut leaves);
    leaves
}

fn collect_leaves<'a>(
    mapping: &'a Mapping,
    prefix: Option<&Path>,
    leaves: &mut Vec<(PathBuf, &'a Value)>,
) {
    for (key, value) in mapping.iter() {
        let path = prefix.map_or_else(|| PathBuf::from(key.as_str()), |prefix| prefix.join(key));
        match value {
            Value::Map(child) => collect_leaves(child, Some(&path), leaves),
            leaf => leaves.push((path, leaf)),
        }
    }
}

/// Produces the dotted path of every leaf in `mapping`.
pub fn flatten_keys(mapping: &Mapping) -> Vec<PathBuf> {
    flatten_leaves(mapping)
        .into_iter()
        .map(|(path, _)| path)
        .collect()
}
