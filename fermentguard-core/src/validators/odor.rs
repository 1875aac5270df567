//! Odor score validator
//!
//! Smell quality is a human rating on an ordinal 1-5 scale:
//! 1 = putrid, 5 = fully developed sour-sweet.

use crate::{
    constants::chemistry::{ODOR_SCORE_MAX, ODOR_SCORE_MIN},
    errors::{Quantity, ValidationError, ValidationResult},
    traits::{Validator, ValidatorConstraints},
};

/// Odor score validator
#[derive(Debug, Clone, Default)]
pub struct OdorValidator;

impl Validator for OdorValidator {
    type Value = u8;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        if (ODOR_SCORE_MIN..=ODOR_SCORE_MAX).contains(&value) {
            Ok(())
        } else {
            Err(ValidationError::OutOfRange {
                quantity: Quantity::Odor,
                value: value as f32,
                min: ODOR_SCORE_MIN as f32,
                max: ODOR_SCORE_MAX as f32,
            })
        }
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: ODOR_SCORE_MIN as f32,
            max_value: ODOR_SCORE_MAX as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_scale_is_valid() {
        for score in 1..=5 {
            assert!(OdorValidator.validate(score).is_ok());
        }
    }

    #[test]
    fn off_scale_rejected() {
        assert!(OdorValidator.validate(0).is_err());
        assert!(OdorValidator.validate(6).is_err());
    }
}
