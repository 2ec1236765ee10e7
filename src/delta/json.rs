//! Untyped JSON documents.
//!
//! Lets callers diff raw API responses that have no typed record. Unlike the
//! typed records, two JSON values can disagree on their kind; in that case the
//! new value replaces the old one wholesale.

use super::Diffable;
use serde_json::{Map, Value};

fn same_kind(a: &Value, b: &Value) -> bool {
    matches!(
        (a, b),
        (Value::Bool(_), Value::Bool(_))
            | (Value::Number(_), Value::Number(_))
            | (Value::String(_), Value::String(_))
            | (Value::Array(_), Value::Array(_))
            | (Value::Object(_), Value::Object(_))
    )
}

fn object_delta(old: &Map<String, Value>, new: &Map<String, Value>) -> (Option<Value>, Option<Value>) {
    let mut pos = Map::new();
    let mut neg = Map::new();

    for (key, old_value) in old {
        match new.get(key) {
            Some(new_value) => {
                let (p, n) = old_value.delta(new_value);
                if let Some(p) = p {
                    pos.insert(key.clone(), p);
                }
                if let Some(n) = n {
                    neg.insert(key.clone(), n);
                }
            }
            None => {
                if !old_value.is_empty() {
                    neg.insert(key.clone(), old_value.clone());
                }
            }
        }
    }
    for (key, new_value) in new {
        if !old.contains_key(key) && !new_value.is_empty() {
            pos.insert(key.clone(), new_value.clone());
        }
    }

    (
        super::prune(Value::Object(pos)),
        super::prune(Value::Object(neg)),
    )
}

impl Diffable for Value {
    fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(fields) => fields.values().all(|v| v.is_empty()),
        }
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    fn delta(&self, new: &Self) -> (Option<Self>, Option<Self>) {
        if self == new {
            return (None, None);
        }
        if self.is_null() {
            return (super::prune(new.clone()), None);
        }
        if new.is_null() {
            return (None, super::prune(self.clone()));
        }
        if !same_kind(self, new) {
            return (super::prune(new.clone()), super::prune(self.clone()));
        }

        match (self, new) {
            (Value::Array(old_items), Value::Array(new_items)) => {
                let (p, n) = old_items.delta(new_items);
                (p.map(Value::Array), n.map(Value::Array))
            }
            (Value::Object(old_fields), Value::Object(new_fields)) => {
                object_delta(old_fields, new_fields)
            }
            _ => {
                if self.is_empty() {
                    (Some(new.clone()), None)
                } else if new.is_empty() {
                    (None, Some(self.clone()))
                } else {
                    (Some(new.clone()), Some(self.clone()))
                }
            }
        }
    }
}
