//! Scalar and optional values.

use super::Diffable;

/// Applies the scalar rule: a value moving away from zero only shows up in the
/// positive half, a value cleared back to zero only in the negative half.
fn scalar_delta<T: Clone + Default + PartialEq>(old: &T, new: &T) -> (Option<T>, Option<T>) {
    if old == new {
        return (None, None);
    }
    let zero = T::default();
    if *old == zero {
        return (Some(new.clone()), None);
    }
    if *new == zero {
        return (None, Some(old.clone()));
    }
    (Some(new.clone()), Some(old.clone()))
}

macro_rules! impl_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Diffable for $ty {
                fn is_empty(&self) -> bool {
                    *self == <$ty>::default()
                }

                fn equals(&self, other: &Self) -> bool {
                    self == other
                }

                fn delta(&self, new: &Self) -> (Option<Self>, Option<Self>) {
                    scalar_delta(self, new)
                }
            }
        )+
    };
}

impl_scalar!(String, bool, i64, u64, f64);

/// `None` is empty; `Some` is not, whatever it holds. JSON `null` and an
/// explicit zero are different facts.
impl<T: Diffable + Clone> Diffable for Option<T> {
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.equals(b),
            _ => false,
        }
    }

    fn delta(&self, new: &Self) -> (Option<Self>, Option<Self>) {
        match (self, new) {
            (None, None) => (None, None),
            (None, Some(n)) => (Some(Some(n.clone())), None),
            (Some(o), None) => (None, Some(Some(o.clone()))),
            (Some(o), Some(n)) => {
                let (p, n) = o.delta(n);
                (p.map(Some), n.map(Some))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_zero_is_empty() {
        assert!(Diffable::is_empty(&String::new()));
        assert!(!Diffable::is_empty(&"abc".to_string()));
    }

    #[test]
    fn test_numbers_and_bools_zero_is_empty() {
        assert!(Diffable::is_empty(&0i64));
        assert!(Diffable::is_empty(&0u64));
        assert!(Diffable::is_empty(&0.0f64));
        assert!(Diffable::is_empty(&false));
        assert!(!Diffable::is_empty(&7u64));
        assert!(!Diffable::is_empty(&true));
    }

    #[test]
    fn test_scalar_set_from_zero_is_positive_only() {
        let (pos, neg) = String::new().delta(&"new".to_string());
        assert_eq!(pos.as_deref(), Some("new"));
        assert_eq!(neg, None);
    }

    #[test]
    fn test_scalar_cleared_is_negative_only() {
        let (pos, neg) = "x".to_string().delta(&String::new());
        assert_eq!(pos, None);
        assert_eq!(neg.as_deref(), Some("x"));
    }

    #[test]
    fn test_scalar_changed_is_matched_pair() {
        assert_eq!(3u64.delta(&5), (Some(5), Some(3)));
        assert_eq!(true.delta(&false), (None, Some(true)));
        assert_eq!(false.delta(&true), (Some(true), None));
    }

    #[test]
    fn test_scalar_unchanged() {
        assert_eq!(42i64.delta(&42), (None, None));
    }

    #[test]
    fn test_option_presence_is_not_empty() {
        assert!(Diffable::is_empty(&None::<f64>));
        assert!(!Diffable::is_empty(&Some(0.0f64)));
    }

    #[test]
    fn test_option_delta() {
        assert_eq!(None::<f64>.delta(&Some(4.5)), (Some(Some(4.5)), None));
        assert_eq!(Some(4.5f64).delta(&None), (None, Some(Some(4.5))));
        assert_eq!(Some(1.0f64).delta(&Some(2.0)), (Some(Some(2.0)), Some(Some(1.0))));
        assert_eq!(Some(true).delta(&Some(true)), (None, None));
    }
}
