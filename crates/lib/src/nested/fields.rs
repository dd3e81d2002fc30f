//! Converting plain objects into nested mappings.
//!
//! Nothing is introspected implicitly: a type takes part in the conversion by
//! implementing [`Fields`], which lists its externally visible fields in order.
//! [`object_to_mapping`] walks those fields recursively, turning nested objects
//! into mappings and lists of objects into lists of mappings.
//!
//! Field names beginning with an underscore are private and never appear in the
//! resulting mapping.
//!
//! ```
//! use nesteddict::nested::{Field, Fields, Value, object_to_mapping};
//!
//! struct Item {
//!     v: i64,
//! }
//!
//! impl Fields for Item {
//!     fn fields(&self) -> Vec<(&str, Field<'_>)> {
//!         vec![("v", Field::value(self.v))]
//!     }
//! }
//!
//! struct Order {
//!     id: String,
//!     items: Vec<Item>,
//!     cache: u32,
//! }
//!
//! impl Fields for Order {
//!     fn fields(&self) -> Vec<(&str, Field<'_>)> {
//!         vec![
//!             ("id", Field::value(self.id.as_str())),
//!             ("items", Field::objects(&self.items)),
//!             ("_cache", Field::value(self.cache)),
//!         ]
//!     }
//! }
//!
//! let order = Order {
//!     id: "A-1".to_string(),
//!     items: vec![Item { v: 1 }, Item { v: 2 }],
//!     cache: 99,
//! };
//!
//! let mapping = object_to_mapping(&order);
//! assert_eq!(mapping.len(), 2);
//! assert!(mapping.get("_cache").is_none());
//!
//! let items = mapping.get("items").and_then(Value::as_list).unwrap();
//! assert_eq!(items[1].as_map().and_then(|m| m.get("v")), Some(&Value::Int(2)));
//! ```

use super::{Mapping, Value};

/// The prefix marking a field as private.
pub const PRIVATE_PREFIX: char = '_';

/// A type whose fields can be enumerated for conversion into a [`Mapping`].
pub trait Fields {
    /// Returns the name and value of every field, in declaration order.
    ///
    /// Private fields may be listed; names starting with `_` are dropped by
    /// the conversion.
    fn fields(&self) -> Vec<(&str, Field<'_>)>;
}

/// The value of one field of an object.
pub enum Field<'a> {
    /// A leaf value, stored unchanged
    Value(Value),
    /// Another object, converted into a nested mapping
    Object(&'a dyn Fields),
    /// A sequence; each element is converted in order
    List(Vec<Field<'a>>),
}

impl<'a> Field<'a> {
    /// A leaf field
    pub fn value(value: impl Into<Value>) -> Self {
        Field::Value(value.into())
    }

    /// A nested object field
    pub fn object(object: &'a dyn Fields) -> Self {
        Field::Object(object)
    }

    /// A field holding a list of objects
    pub fn objects<T: Fields>(objects: &'a [T]) -> Self {
        Field::List(
            objects
                .iter()
                .map(|object| Field::Object(object as &dyn Fields))
                .collect(),
        )
    }

    /// A field holding a list of arbitrary fields
    pub fn list(items: impl IntoIterator<Item = Field<'a>>) -> Self {
        Field::List(items.into_iter().collect())
    }
}

/// Returns true if a field or key name is private.
pub fn is_private(name: &str) -> bool {
    name.starts_with(PRIVATE_PREFIX)
}

/// Converts an object into a nested mapping of its public fields.
pub fn object_to_mapping<T: Fields + ?Sized>(object: &T) -> Mapping {
    let mut mapping = Mapping::new();

    for (name, field) in object.fields() {
        if is_private(name) {
            tracing::trace!(field = name, "skipping private field");
            continue;
        }
        mapping.insert(name, field_to_value(field));
    }

    mapping
}

fn field_to_value(field: Field<'_>) -> Value {
    match field {
        Field::Value(value) => value,
        Field::Object(object) => Value::Map(object_to_mapping(object)),
        Field::List(items) => Value::List(items.into_iter().map(field_to_value).collect()),
    }
}

/// Wraps a reference to an object so it can be used to construct or reset a
/// [`NestedDict`](super::NestedDict).
///
/// ```
/// # use nesteddict::nested::{Field, Fields, NestedDict, Object};
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl Fields for Point {
///     fn fields(&self) -> Vec<(&str, Field<'_>)> {
///         vec![("x", Field::value(self.x)), ("y", Field::value(self.y))]
///     }
/// }
///
/// let dict = NestedDict::construct(Object(&Point { x: 1, y: 2 }))?;
/// assert_eq!(*dict.get("y")?, 2);
/// # Ok::<(), nesteddict::nested::NestedError>(())
/// ```
pub struct Object<'a, T: ?Sized>(pub &'a T);
