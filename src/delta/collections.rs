//! Sequences and string-keyed mappings.

use super::Diffable;
use std::collections::BTreeMap;

/// Sequences are diffed by membership, not by position. Emptiness looks at the
/// length alone: a list holding one empty string is not empty.
impl<T: Clone + PartialEq> Diffable for Vec<T> {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    fn delta(&self, new: &Self) -> (Option<Self>, Option<Self>) {
        let added: Vec<T> = new.iter().filter(|v| !self.contains(v)).cloned().collect();
        let removed: Vec<T> = self.iter().filter(|v| !new.contains(v)).cloned().collect();
        (
            (!added.is_empty()).then_some(added),
            (!removed.is_empty()).then_some(removed),
        )
    }
}

/// A mapping is empty when every value in it is empty.
///
/// Keys only in the new map are added whole, keys only in the old map are
/// removed whole, and keys in both recurse into the value.
impl<K, V> Diffable for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Diffable + Clone,
{
    fn is_empty(&self) -> bool {
        self.values().all(|v| v.is_empty())
    }

    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|o| v.equals(o)))
    }

    fn delta(&self, new: &Self) -> (Option<Self>, Option<Self>) {
        let mut pos = BTreeMap::new();
        let mut neg = BTreeMap::new();

        for (key, old_value) in self {
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
            if !self.contains_key(key) && !new_value.is_empty() {
                pos.insert(key.clone(), new_value.clone());
            }
        }

        (super::prune(pos), super::prune(neg))
    }
}
