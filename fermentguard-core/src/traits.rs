//! Core traits for input validators
//!
//! Every chemistry or sensory reading passes through a `Validator` before it
//! reaches an evaluation strategy. Keep them simple - they only check domains.

use crate::errors::ValidationResult;

/// Core validator trait - implement this for each measured quantity
pub trait Validator {
    /// The type of value this validator handles
    type Value;

    /// Validate a single reading
    fn validate(&self, value: Self::Value) -> ValidationResult<()>;

    /// Get the domain limits for this validator
    fn constraints(&self) -> ValidatorConstraints;
}

/// Domain limits for a validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatorConstraints {
    /// Minimum valid value
    pub min_value: f32,

    /// Maximum valid value
    pub max_value: f32,
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
