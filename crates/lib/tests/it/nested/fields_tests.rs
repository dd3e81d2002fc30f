//! Object conversion tests
//!
//! Plain objects enter a NestedDict through the `Fields` trait; private fields are
//! dropped and nested objects become nested mappings.

use nesteddict::{
    NestedDict,
    nested::{Field, Fields, Mapping, Object, Value, object_to_mapping},
};

struct Pair {
    x: i64,
    y: i64,
}

impl Fields for Pair {
    fn fields(&self) -> Vec<(&str, Field<'_>)> {
        vec![("x", Field::value(self.x)), ("_y", Field::value(self.y))]
    }
}

struct Item {
    v: String,
}

impl Fields for Item {
    fn fields(&self) -> Vec<(&str, Field<'_>)> {
        vec![("v", Field::value(self.v.as_str()))]
    }
}

struct Basket {
    items: Vec<Item>,
}

impl Fields for Basket {
    fn fields(&self) -> Vec<(&str, Field<'_>)> {
        vec![("items", Field::objects(&self.items))]
    }
}

struct Account {
    owner: Pair,
    basket: Basket,
    labels: Vec<String>,
    secret: String,
}

impl Fields for Account {
    fn fields(&self) -> Vec<(&str, Field<'_>)> {
        vec![
            ("owner", Field::object(&self.owner)),
            ("basket", Field::object(&self.basket)),
            (
                "labels",
                Field::list(self.labels.iter().map(|label| Field::value(label.as_str()))),
            ),
            ("_secret", Field::value(self.secret.as_str())),
        ]
    }
}

fn basket() -> Basket {
    Basket {
        items: vec![
            Item { v: "v1".to_string() },
            Item { v: "v2".to_string() },
        ],
    }
}

fn account() -> Account {
    Account {
        owner: Pair { x: 1, y: 2 },
        basket: basket(),
        labels: vec!["red".to_string(), "blue".to_string()],
        secret: "hunter2".to_string(),
    }
}

#[test]
fn test_private_fields_are_dropped() {
    let mapping = object_to_mapping(&Pair { x: 1, y: 2 });
    assert_eq!(mapping, Mapping::new().with("x", 1));
}

#[test]
fn test_object_lists_become_mapping_lists() {
    let mapping = object_to_mapping(&basket());

    let expected = Value::List(vec![
        Value::Map(Mapping::new().with("v", "v1")),
        Value::Map(Mapping::new().with("v", "v2")),
    ]);
    assert_eq!(mapping.get("items"), Some(&expected));
}

#[test]
fn test_nested_objects_recurse() {
    let mapping = object_to_mapping(&account());

    let keys: Vec<&String> = mapping.keys().collect();
    assert_eq!(keys, vec!["basket", "labels", "owner"]);

    let owner = mapping.get("owner").and_then(Value::as_map).unwrap();
    assert_eq!(owner, &Mapping::new().with("x", 1));
    assert_eq!(mapping.get("labels"), Some(&Value::from(vec!["red", "blue"])));
}

#[test]
fn test_object_without_public_fields() {
    struct Hidden;

    impl Fields for Hidden {
        fn fields(&self) -> Vec<(&str, Field<'_>)> {
            vec![("_only", Field::value(true))]
        }
    }

    assert!(object_to_mapping(&Hidden).is_empty());
    assert!(NestedDict::construct(Object(&Hidden)).unwrap().is_empty());
}

#[test]
fn test_construct_from_object() {
    let dict = NestedDict::construct(Object(&account())).unwrap();

    assert_eq!(*dict.get("owner.x").unwrap(), 1);
    assert!(dict.get("owner._y").unwrap_err().is_not_found());
    assert!(!dict.contains_key("_secret"));

    let items = dict.get("basket.items").unwrap().as_list().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].as_map().and_then(|item| item.get("v")), Some(&Value::from("v1")));

    let dotted = dict.to_dotted();
    assert_eq!(dotted.len(), 3);
    assert!(dotted.contains_key("basket.items"));
    assert!(dotted.contains_key("labels"));
}

#[test]
fn test_object_conversion_is_a_snapshot() {
    let mut source = account();
    let mut dict = NestedDict::construct(Object(&source)).unwrap();

    source.owner.x = 100;
    assert_eq!(*dict.get("owner.x").unwrap(), 1);

    dict.put("owner.x", 5).unwrap();
    assert_eq!(source.owner.x, 100);
}

#[test]
fn test_set_from_object() {
    let mut dict = NestedDict::new();
    dict.put("stale", 1).unwrap();
    dict.set(Object(&Pair { x: 3, y: 4 })).unwrap();

    assert_eq!(dict.to_nested(), &Mapping::new().with("x", 3));
}
