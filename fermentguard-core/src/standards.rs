//! Reference Standards per Fruit Type
//!
//! ## Overview
//!
//! Each fruit ferments into a liquid with its own chemistry. A reference
//! standard records the window a finished liquid should sit in:
//!
//! ```text
//! Fruit       | pH min | pH max | EC min (mS/cm)
//! ------------|--------|--------|---------------
//! Banana      |  3.5   |  4.0   |  6.0
//! Papaya      |  3.2   |  3.8   |  4.0
//! Pumpkin     |  3.4   |  4.2   |  6.0
//! Pineapple   |  3.0   |  3.5   |  3.5
//! Watermelon  |  3.4   |  4.5   |  2.5
//! ```
//!
//! The table is immutable once built and is shared read-only across requests.
//!
//! ## Lookups Never Default
//!
//! `StandardsTable::get` returns `None` for unknown fruit and
//! `StandardsTable::require` turns that into `EvaluationError::UnknownStandard`.
//! There is no fallback entry.
//!
//! ## EC Maximum
//!
//! The sample data only bounds EC from below. `ec_max` exists in the schema so
//! a deployment can add an upper bound; when it is `None` only the minimum
//! gates.

use crate::errors::{EvaluationError, EvaluationResult, StandardsError};
use crate::traits::Validatable;

/// Fruit, pH min, pH max, EC min
const SAMPLE_ROWS: [(&str, f32, f32, f32); 5] = [
    ("Banana", 3.5, 4.0, 6.0),
    ("Papaya", 3.2, 3.8, 4.0),
    ("Pumpkin", 3.4, 4.2, 6.0),
    ("Pineapple", 3.0, 3.5, 3.5),
    ("Watermelon", 3.4, 4.5, 2.5),
];

/// Chemistry window for one fruit type
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReferenceStandard {
    fruit: String,
    ph_min: f32,
    ph_max: f32,
    ec_min: f32,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    ec_max: Option<f32>,
}

impl ReferenceStandard {
    /// Build a standard, checking `ph_min <= ph_max` and `ec_min >= 0`
    pub fn new(fruit: impl Into<String>, ph_min: f32, ph_max: f32, ec_min: f32) -> Result<Self, StandardsError> {
        Self::with_ec_max(fruit, ph_min, ph_max, ec_min, None)
    }

    /// Build a standard that also caps EC
    pub fn with_ec_max(
        fruit: impl Into<String>,
        ph_min: f32,
        ph_max: f32,
        ec_min: f32,
        ec_max: Option<f32>,
    ) -> Result<Self, StandardsError> {
        let fruit = fruit.into();
        let fruit_trimmed = fruit.trim();
        if fruit_trimmed.is_empty() {
            return Err(StandardsError::EmptyName);
        }
        let fruit = fruit_trimmed.to_string();

        let finite = ph_min.is_valid()
            && ph_max.is_valid()
            && ec_min.is_valid()
            && ec_max.map_or(true, |max| max.is_valid());
        if !finite {
            return Err(StandardsError::NonFinite { fruit });
        }

        if ph_min > ph_max {
            return Err(StandardsError::InvertedPhRange { fruit, ph_min, ph_max });
        }

        if ec_min < 0.0 {
            return Err(StandardsError::InvalidEcBounds {
                fruit,
                reason: "ec_min is negative",
            });
        }

        if let Some(max) = ec_max {
            if max < ec_min {
                return Err(StandardsError::InvalidEcBounds {
                    fruit,
                    reason: "ec_max is below ec_min",
                });
            }
        }

        Ok(Self {
            fruit,
            ph_min,
            ph_max,
            ec_min,
            ec_max,
        })
    }

    /// Fruit type name
    pub fn fruit(&self) -> &str {
        &self.fruit
    }

    /// Lowest acceptable pH (inclusive)
    pub fn ph_min(&self) -> f32 {
        self.ph_min
    }

    /// Highest acceptable pH (inclusive)
    pub fn ph_max(&self) -> f32 {
        self.ph_max
    }

    /// Lowest acceptable EC (inclusive)
    pub fn ec_min(&self) -> f32 {
        self.ec_min
    }

    /// Highest acceptable EC (inclusive), if capped
    pub fn ec_max(&self) -> Option<f32> {
        self.ec_max
    }
}

/// Ordered, immutable set of reference standards
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StandardsTable {
    entries: Vec<ReferenceStandard>,
}

impl StandardsTable {
    /// Build from entries, rejecting duplicate fruit names
    pub fn new(entries: Vec<ReferenceStandard>) -> Result<Self, StandardsError> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|earlier| earlier.fruit == entry.fruit) {
                return Err(StandardsError::Duplicate {
                    fruit: entry.fruit.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Sample table shipped with the dashboards
    ///
    /// Cannot fail: every row in `SAMPLE_ROWS` satisfies the checks in
    /// `ReferenceStandard::new` and the names are distinct.
    pub fn sample() -> Self {
        let entries = SAMPLE_ROWS
            .iter()
            .map(|&(fruit, ph_min, ph_max, ec_min)| ReferenceStandard {
                fruit: fruit.to_string(),
                ph_min,
                ph_max,
                ec_min,
                ec_max: None,
            })
            .collect();

        Self { entries }
    }

    /// Exact-name lookup
    pub fn get(&self, fruit: &str) -> Option<&ReferenceStandard> {
        self.entries.iter().find(|entry| entry.fruit == fruit)
    }

    /// Lookup that reports a missing entry as an evaluation error
    pub fn require(&self, fruit: &str) -> EvaluationResult<&ReferenceStandard> {
        self.get(fruit).ok_or_else(|| EvaluationError::UnknownStandard {
            label: fruit.to_string(),
        })
    }

    /// Whether a standard exists for `fruit`
    pub fn contains(&self, fruit: &str) -> bool {
        self.get(fruit).is_some()
    }

    /// Fruit names in table order (what a fruit selector offers)
    pub fn fruits(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.fruit.as_str())
    }

    /// All entries in table order
    pub fn iter(&self) -> impl Iterator<Item = &ReferenceStandard> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no fruit is known
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
