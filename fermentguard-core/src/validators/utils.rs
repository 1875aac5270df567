//! Shared validation helpers
//!
//! Pure functions with no side effects, used by every validator and by the
//! evaluation strategies for their inclusive range gates.

use crate::{
    errors::{Quantity, ValidationError, ValidationResult},
    traits::Validatable,
};

/// Check that a reading is finite and inside `[min, max]`
pub fn check_range(quantity: Quantity, value: f32, min: f32, max: f32) -> ValidationResult<()> {
    if !value.is_valid() {
        return Err(ValidationError::InvalidValue { quantity });
    }

    if value < min || value > max {
        Err(ValidationError::OutOfRange {
            quantity,
            value,
            min,
            max,
        })
    } else {
        Ok(())
    }
}

/// Inclusive range membership, both ends counted as inside
pub fn within(value: f32, min: f32, max: f32) -> bool {
    min <= value && value <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check() {
        assert!(check_range(Quantity::Ph, 5.0, 0.0, 10.0).is_ok());
        assert!(check_range(Quantity::Ph, -1.0, 0.0, 10.0).is_err());
        assert!(check_range(Quantity::Ph, 11.0, 0.0, 10.0).is_err());
    }

    #[test]
    fn range_check_rejects_nan() {
        assert_eq!(
            check_range(Quantity::Conductivity, f32::NAN, 0.0, 20.0),
            Err(ValidationError::InvalidValue { quantity: Quantity::Conductivity })
        );
    }

    #[test]
    fn within_is_inclusive() {
        assert!(within(3.0, 3.0, 4.0));
        assert!(within(4.0, 3.0, 4.0));
        assert!(!within(4.01, 3.0, 4.0));
    }

    #[test]
    fn validatable_floats() {
        assert!(5.0f32.is_valid());
        assert!(!f32::NAN.is_valid());
        assert!(!f32::INFINITY.is_valid());
    }
}
