//! Diff result types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Changes holds the result of diffing two values of the same shape.
///
/// `positive` holds what was added or changed, taken from the new value.
/// `negative` holds what was removed or overwritten, taken from the old value.
/// `None` means that half has nothing in it; if both halves are `None` the
/// values were equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Changes<T> {
    pub positive: Option<T>,
    pub negative: Option<T>,
}

impl<T> Default for Changes<T> {
    fn default() -> Self {
        Changes::none()
    }
}

impl<T> Changes<T> {
    /// Creates a result with no changes in either half.
    pub fn none() -> Self {
        Changes {
            positive: None,
            negative: None,
        }
    }

    /// Returns true if there are no changes.
    pub fn is_same(&self) -> bool {
        self.positive.is_none() && self.negative.is_none()
    }

    pub fn has_positive(&self) -> bool {
        self.positive.is_some()
    }

    pub fn has_negative(&self) -> bool {
        self.negative.is_some()
    }

    /// Swaps the halves, giving the diff in the opposite direction.
    pub fn reversed(self) -> Self {
        Changes {
            positive: self.negative,
            negative: self.positive,
        }
    }

    /// Maps both halves through `f`.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Changes<U> {
        Changes {
            positive: self.positive.map(&mut f),
            negative: self.negative.map(&mut f),
        }
    }

    /// Splits into `(positive, negative)`.
    pub fn into_parts(self) -> (Option<T>, Option<T>) {
        (self.positive, self.negative)
    }
}

impl<T: Serialize> Changes<T> {
    /// Serializes the changes to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the changes to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl<T: Serialize> fmt::Display for Changes<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_same() {
            return write!(f, "No Changes");
        }

        let mut first = true;
        for (title, half) in [("Added or Changed", &self.positive), ("Removed", &self.negative)] {
            let Some(value) = half else {
                continue;
            };
            if !first {
                writeln!(f)?;
            }
            first = false;
            let rendered = serde_json::to_string(value).map_err(|_| fmt::Error)?;
            write!(f, "- {}: {}", title, rendered)?;
        }
        Ok(())
    }
}
