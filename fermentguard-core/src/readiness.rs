//! Visual readiness mapping
//!
//! The classifier names a class; whether that class "looks ready" is an
//! explicit property of the class name, not of its position in the label file.
//!
//! ```rust
//! use fermentguard_core::ReadinessMap;
//!
//! let labels = ["Banana", "Papaya", "Pumpkin"];
//!
//! // Compatibility with label files whose first entry is the ready class
//! let map = ReadinessMap::first_label_ready(&labels);
//! assert!(map.is_ready("Banana"));
//! assert!(!map.is_ready("Papaya"));
//!
//! // Explicit mapping
//! let map = ReadinessMap::from_ready_classes(["Papaya", "Pumpkin"]);
//! assert!(map.is_ready("Pumpkin"));
//! ```

use std::collections::BTreeSet;

/// Set of class names that count as visually ready
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ReadinessMap {
    ready: BTreeSet<String>,
}

impl ReadinessMap {
    /// Map with an explicit list of ready classes
    pub fn from_ready_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ready: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// Mark only the first label of a label list as ready
    pub fn first_label_ready<S: AsRef<str>>(labels: &[S]) -> Self {
        Self::from_ready_classes(labels.first().map(|label| label.as_ref().to_string()))
    }

    /// Whether `label` is a ready-looking class. Unknown labels are not ready.
    pub fn is_ready(&self, label: &str) -> bool {
        self.ready.contains(label)
    }

    /// Ready class names in sorted order
    pub fn ready_classes(&self) -> impl Iterator<Item = &str> {
        self.ready.iter().map(String::as_str)
    }

    /// True when no class is marked ready
    pub fn is_empty(&self) -> bool {
        self.ready.is_empty()
    }
}
