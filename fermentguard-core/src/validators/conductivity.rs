//! Electrical conductivity validator
//!
//! EC is a proxy for dissolved ions. It cannot be negative; the upper bound
//! is whatever the entry field allows.

use crate::{
    constants::chemistry::{EC_DOMAIN_MAX, EC_DOMAIN_MIN},
    errors::{Quantity, ValidationResult},
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Conductivity validator for mS/cm readings
#[derive(Debug, Clone)]
pub struct ConductivityValidator {
    min_ms_cm: f32,
    max_ms_cm: f32,
}

impl Default for ConductivityValidator {
    fn default() -> Self {
        Self {
            min_ms_cm: EC_DOMAIN_MIN,
            max_ms_cm: EC_DOMAIN_MAX,
        }
    }
}

impl ConductivityValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f32, max: f32) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self {
            min_ms_cm: min.max(EC_DOMAIN_MIN), // Conductivity is never negative
            max_ms_cm: max,
        }
    }

    /// No upper bound, for meters without a fixed range
    pub fn unbounded() -> Self {
        Self {
            min_ms_cm: EC_DOMAIN_MIN,
            max_ms_cm: f32::MAX,
        }
    }
}

impl Validator for ConductivityValidator {
    type Value = f32;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_range(Quantity::Conductivity, value, self.min_ms_cm, self.max_ms_cm)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_ms_cm,
            max_value: self.max_ms_cm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_conductivity() {
        let validator = ConductivityValidator::default();
        assert!(validator.validate(0.0).is_ok());
        assert!(validator.validate(6.5).is_ok());
        assert!(validator.validate(20.0).is_ok());
    }

    #[test]
    fn conductivity_out_of_range() {
        let validator = ConductivityValidator::default();
        assert!(validator.validate(-0.5).is_err());
        assert!(validator.validate(20.5).is_err());
        assert!(validator.validate(f32::INFINITY).is_err());
    }

    #[test]
    fn unbounded_accepts_large_readings() {
        let validator = ConductivityValidator::unbounded();
        assert!(validator.validate(150.0).is_ok());
        assert!(validator.validate(-1.0).is_err());
    }
}
