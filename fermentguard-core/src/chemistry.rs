//! Chemistry and sensory inputs
//!
//! A `ChemistryInput` can only be built from readings that passed the input
//! validators, so the evaluation strategies never see NaN or off-scale values.

use crate::{
    errors::ValidationResult,
    traits::Validator,
    validators::{ConductivityValidator, OdorValidator, PhValidator},
};

/// Ordinal smell-quality rating, 1 (putrid) to 5 (fully sour-sweet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct OdorScore(u8);

impl OdorScore {
    /// Validate and wrap a rating
    pub fn new(score: u8) -> ValidationResult<Self> {
        OdorValidator.validate(score)?;
        Ok(Self(score))
    }

    /// Raw rating
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for OdorScore {
    type Error = crate::errors::ValidationError;

    fn try_from(score: u8) -> Result<Self, Self::Error> {
        Self::new(score)
    }
}

impl From<OdorScore> for u8 {
    fn from(score: OdorScore) -> Self {
        score.0
    }
}

/// Chemistry readings for one sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChemistryInput {
    ph: f32,
    ec: f32,
    odor: Option<OdorScore>,
}

impl ChemistryInput {
    /// Build from pH and EC using the default input domains
    pub fn new(ph: f32, ec: f32) -> ValidationResult<Self> {
        Self::with_validators(ph, ec, &PhValidator::default(), &ConductivityValidator::default())
    }

    /// Build with custom domain validators (e.g. an unbounded EC meter)
    pub fn with_validators(
        ph: f32,
        ec: f32,
        ph_validator: &PhValidator,
        ec_validator: &ConductivityValidator,
    ) -> ValidationResult<Self> {
        ph_validator.validate(ph)?;
        ec_validator.validate(ec)?;
        Ok(Self { ph, ec, odor: None })
    }

    /// Attach a smell rating
    pub fn with_odor(mut self, odor: OdorScore) -> Self {
        self.odor = Some(odor);
        self
    }

    /// pH reading
    pub fn ph(&self) -> f32 {
        self.ph
    }

    /// Conductivity in mS/cm
    pub fn ec(&self) -> f32 {
        self.ec
    }

    /// Smell rating, if one was taken
    pub fn odor(&self) -> Option<OdorScore> {
        self.odor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Quantity, ValidationError};

    #[test]
    fn builds_from_valid_readings() {
        let input = ChemistryInput::new(3.8, 6.2).unwrap().with_odor(OdorScore::new(4).unwrap());
        assert_eq!(input.ph(), 3.8);
        assert_eq!(input.ec(), 6.2);
        assert_eq!(input.odor().map(|o| o.value()), Some(4));
    }

    #[test]
    fn rejects_off_scale_ph() {
        let err = ChemistryInput::new(15.0, 2.0).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { quantity: Quantity::Ph, .. }));
    }

    #[test]
    fn rejects_nan_ec() {
        let err = ChemistryInput::new(4.0, f32::NAN).unwrap_err();
        assert_eq!(err, ValidationError::InvalidValue { quantity: Quantity::Conductivity });
    }

    #[test]
    fn unbounded_meter_accepts_high_ec() {
        let input = ChemistryInput::with_validators(
            4.0,
            35.0,
            &PhValidator::default(),
            &ConductivityValidator::unbounded(),
        );
        assert!(input.is_ok());
    }

    #[test]
    fn odor_score_bounds() {
        assert!(OdorScore::new(0).is_err());
        assert!(OdorScore::new(6).is_err());
        assert!(OdorScore::new(1).unwrap() < OdorScore::new(5).unwrap());
    }
}
