//! Error Types for Readiness Evaluation
//!
//! ## Error Categories
//!
//! Errors fall into three groups, each owned by a different stage:
//!
//! ### Input Violations (`ValidationError`)
//! - `OutOfRange`: Reading outside its measurement domain (e.g., pH 15)
//! - `InvalidValue`: Mathematically invalid (NaN, infinity)
//!
//! These are small and `Copy` so validators can return them cheaply.
//!
//! ### Evaluation Failures (`EvaluationError`)
//! - `UnknownStandard`: The classifier (or the user) named a fruit that has no
//!   reference entry. This is a terminal result, never a silent default.
//! - `MissingOdorScore`: The table-lookup strategy gates on smell, so it cannot
//!   run without a score.
//!
//! ### Table Construction (`StandardsError`)
//! Raised once at startup when a reference table is malformed.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use fermentguard_core::{
//!     ChemistryInput, Classification, EvaluationError, Evaluator, OdorScore,
//! };
//!
//! let evaluator = Evaluator::sample();
//! let classification = Classification::new("Durian", 0, 0.91);
//! let chemistry = ChemistryInput::new(3.6, 7.0)?.with_odor(OdorScore::new(4)?);
//!
//! match evaluator.evaluate(&classification, &chemistry) {
//!     Ok(verdict) => println!("{:?}", verdict.status),
//!     Err(EvaluationError::UnknownStandard { label }) => {
//!         println!("no standard found for {label}");
//!     }
//!     Err(other) => println!("cannot evaluate: {other}"),
//! }
//! # Ok::<(), fermentguard_core::ValidationError>(())
//! ```

use thiserror::Error;

/// Result type for input validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for readiness evaluation
pub type EvaluationResult<T> = Result<T, EvaluationError>;

/// Measured quantity an input error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Quantity {
    /// Acidity, 0-14 scale
    Ph,
    /// Electrical conductivity in mS/cm
    Conductivity,
    /// Ordinal smell-quality rating
    Odor,
}

impl Quantity {
    /// Short display name
    pub const fn name(&self) -> &'static str {
        match self {
            Quantity::Ph => "pH",
            Quantity::Conductivity => "EC",
            Quantity::Odor => "odor",
        }
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Input errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Value outside its measurement domain
    #[error("{quantity} value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Which reading failed
        quantity: Quantity,
        /// The rejected reading
        value: f32,
        /// Lowest accepted value
        min: f32,
        /// Highest accepted value
        max: f32,
    },

    /// Value makes no sense as a number (NaN, infinity)
    #[error("invalid {quantity} value: not a finite number")]
    InvalidValue {
        /// Which reading failed
        quantity: Quantity,
    },
}

/// Errors produced while turning inputs into a verdict
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// No reference entry for the detected or selected fruit
    #[error("no standard found for '{label}'")]
    UnknownStandard {
        /// Label that failed the lookup
        label: String,
    },

    /// Table lookup gates on odor but none was supplied
    #[error("odor score is required by the table-lookup strategy")]
    MissingOdorScore,
}

/// Malformed reference table
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StandardsError {
    /// `ph_min` greater than `ph_max`
    #[error("standard '{fruit}': ph_min {ph_min} exceeds ph_max {ph_max}")]
    InvertedPhRange {
        /// Offending fruit entry
        fruit: String,
        /// Configured minimum
        ph_min: f32,
        /// Configured maximum
        ph_max: f32,
    },

    /// EC bounds negative or inverted
    #[error("standard '{fruit}': invalid EC bounds ({reason})")]
    InvalidEcBounds {
        /// Offending fruit entry
        fruit: String,
        /// What is wrong with the bounds
        reason: &'static str,
    },

    /// NaN or infinite bound
    #[error("standard '{fruit}': bounds must be finite numbers")]
    NonFinite {
        /// Offending fruit entry
        fruit: String,
    },

    /// Empty fruit name
    #[error("standard name must not be empty")]
    EmptyName,

    /// Same fruit listed twice
    #[error("duplicate standard for '{fruit}'")]
    Duplicate {
        /// Repeated fruit name
        fruit: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_standard_message_names_label() {
        let err = EvaluationError::UnknownStandard { label: "Durian".into() };
        assert_eq!(err.to_string(), "no standard found for 'Durian'");
    }
}
