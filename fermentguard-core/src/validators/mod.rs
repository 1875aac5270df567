//! Input Validators
//!
//! ## Overview
//!
//! Each reading that enters the evaluator is checked against the domain of
//! the control it came from:
//! - pH: 0 to 14
//! - EC: 0 to 20 mS/cm
//! - Odor: ordinal 1 to 5
//!
//! Domain checks are not readiness checks. A pH of 6.2 is a perfectly valid
//! reading that simply fails every fruit standard; a pH of 17 is a typo.
//!
//! ## Usage Example
//!
//! ```rust
//! use fermentguard_core::validators::{PhValidator, ConductivityValidator};
//! use fermentguard_core::Validator;
//!
//! PhValidator::default().validate(3.8)?;
//! ConductivityValidator::default().validate(6.5)?;
//!
//! assert!(PhValidator::default().validate(14.5).is_err());
//! # Ok::<(), fermentguard_core::ValidationError>(())
//! ```
//!
//! ## Customization
//!
//! Meters with a narrower range can use tighter limits:
//!
//! ```rust
//! use fermentguard_core::validators::ConductivityValidator;
//!
//! // Handheld meter tops out at 10 mS/cm
//! let handheld = ConductivityValidator::new_with_limits(0.0, 10.0);
//! ```

mod conductivity;
mod odor;
mod ph;
pub(crate) mod utils;

pub use conductivity::ConductivityValidator;
pub use odor::OdorValidator;
pub use ph::PhValidator;
