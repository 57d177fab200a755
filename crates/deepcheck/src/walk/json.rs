//! [`Walkable`] for `serde_json` trees.
//!
//! `null` is an absent reference, arrays are sequences, objects are
//! associative containers keyed by their member names.

use serde_json::{Map, Value};

use super::node::{Node, Walkable};

impl Walkable for Value {
    fn node(&self) -> Node<'_> {
        match self {
            Value::Null => Node::Reference(None),
            Value::Array(items) => Node::sequence(items),
            Value::Object(map) => map.node(),
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Node::Scalar,
        }
    }
}

impl Walkable for Map<String, Value> {
    fn node(&self) -> Node<'_> {
        Node::associative(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use serde_json::json;

    #[test]
    fn test_json_kinds() {
        assert_eq!(json!(null).node().kind(), Kind::Reference);
        assert_eq!(json!([1, 2]).node().kind(), Kind::Sequence);
        assert_eq!(json!({"a": 1}).node().kind(), Kind::Associative);
        assert_eq!(json!("s").node().kind(), Kind::Scalar);
    }

    #[test]
    fn test_object_entries() {
        let value = json!({"a": 1, "b": [true]});
        let Node::Associative(entries) = value.node() else {
            panic!("expected an object");
        };
        assert_eq!(entries.count(), 2);
    }
}
