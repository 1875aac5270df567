//! pH validator
//!
//! Accepts readings on the 0-14 acidity scale.

use crate::{
    constants::chemistry::{PH_DOMAIN_MAX, PH_DOMAIN_MIN},
    errors::{Quantity, ValidationResult},
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// pH validator
#[derive(Debug, Clone)]
pub struct PhValidator {
    min_ph: f32,
    max_ph: f32,
}

impl Default for PhValidator {
    fn default() -> Self {
        Self {
            min_ph: PH_DOMAIN_MIN,
            max_ph: PH_DOMAIN_MAX,
        }
    }
}

impl PhValidator {
    /// Create validator with custom limits, clamped to the pH scale
    pub fn new_with_limits(min: f32, max: f32) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self {
            min_ph: min.max(PH_DOMAIN_MIN),
            max_ph: max.min(PH_DOMAIN_MAX),
        }
    }
}

impl Validator for PhValidator {
    type Value = f32;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_range(Quantity::Ph, value, self.min_ph, self.max_ph)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_ph,
            max_value: self.max_ph,
        }
    }
}
