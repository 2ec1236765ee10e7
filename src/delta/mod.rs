//! Delta module - Emptiness, equality and structural diff over API records.
//!
//! Every record this crate fetches implements [`Diffable`]. A diff between two
//! snapshots of the same record produces a positive half (what was added or
//! changed, as seen in the new snapshot) and a negative half (what was removed
//! or overwritten, as seen in the old snapshot). Both halves have the same
//! shape as the inputs, and an empty half collapses to `None`.

mod changes;
mod collections;
mod json;
mod scalar;


pub use changes::*;

/// Diffable is implemented by every value the diff engine can walk.
pub trait Diffable: Sized {
    /// Returns true if the value holds nothing but zero values.
    fn is_empty(&self) -> bool;

    /// Deep structural equality.
    fn equals(&self, other: &Self) -> bool;

    /// Computes the positive and negative deltas from `self` to `new`.
    ///
    /// Each half is `None` when it would be empty.
    fn delta(&self, new: &Self) -> (Option<Self>, Option<Self>);
}

/// Returns true if `value` holds nothing but zero values.
pub fn is_empty<T: Diffable>(value: &T) -> bool {
    value.is_empty()
}

/// Returns true if `a` and `b` are structurally equal.
pub fn equals<T: Diffable>(a: &T, b: &T) -> bool {
    a.equals(b)
}

/// Diffs `old` against `new`.
///
/// Equal inputs short-circuit to [`Changes::none`] without walking the values.
pub fn diff<T: Diffable>(old: &T, new: &T) -> Changes<T> {
    if old.equals(new) {
        return Changes::none();
    }
    let (positive, negative) = old.delta(new);
    Changes { positive, negative }
}

/// Collapses an empty value to `None`.
pub(crate) fn prune<T: Diffable>(value: T) -> Option<T> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Implements [`Diffable`] for a record from the list of its data fields.
///
/// The record must implement `Default`; fields not listed are left at their
/// default in both delta halves and take no part in emptiness or equality.
macro_rules! diffable_record {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::delta::Diffable for $ty {
            fn is_empty(&self) -> bool {
                true $(&& $crate::delta::Diffable::is_empty(&self.$field))+
            }

            fn equals(&self, other: &Self) -> bool {
                true $(&& $crate::delta::Diffable::equals(&self.$field, &other.$field))+
            }

            fn delta(&self, new: &Self) -> (Option<Self>, Option<Self>) {
                let mut pos = <$ty as Default>::default();
                let mut neg = <$ty as Default>::default();
                $(
                    let (p, n) = $crate::delta::Diffable::delta(&self.$field, &new.$field);
                    if let Some(p) = p {
                        pos.$field = p;
                    }
                    if let Some(n) = n {
                        neg.$field = n;
                    }
                )+
                ($crate::delta::prune(pos), $crate::delta::prune(neg))
            }
        }
    };
}

pub(crate) use diffable_record;
