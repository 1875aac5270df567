//! Readiness evaluation engine for FermentGuard
//!
//! Decides whether a bio-fermented fruit liquid is ready for use by combining
//! an image classifier's verdict with pH, EC and smell readings checked
//! against per-fruit reference standards.
//!
//! Key properties:
//! - Pure, deterministic evaluation - no I/O, no hidden state
//! - Unknown fruit never falls back to a default standard
//! - Every failing criterion is reported, in a stable order
//!
//! ```no_run
//! use fermentguard_core::{ChemistryInput, Classification, Evaluator, OdorScore};
//!
//! let evaluator = Evaluator::sample();
//! let classification = Classification::new("Pumpkin", 2, 0.88);
//! let chemistry = ChemistryInput::new(3.9, 6.1)?.with_odor(OdorScore::new(4)?);
//!
//! match evaluator.evaluate(&classification, &chemistry) {
//!     Ok(verdict) => println!("{}", verdict.status),
//!     Err(e) => println!("{e}"),
//! }
//! # Ok::<(), fermentguard_core::ValidationError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod chemistry;
pub mod classification;
pub mod constants;
pub mod errors;
pub mod evaluator;
pub mod phase;
pub mod readiness;
pub mod standards;
pub mod traits;
pub mod validators;
pub mod verdict;

// Public API
pub use chemistry::{ChemistryInput, OdorScore};
pub use classification::Classification;
pub use errors::{
    EvaluationError, EvaluationResult, Quantity, StandardsError, ValidationError, ValidationResult,
};
pub use evaluator::{EvaluationStrategy, Evaluator, FixedThreshold, TableLookup, VisualGate};
pub use phase::FermentationPhase;
pub use readiness::ReadinessMap;
pub use standards::{ReferenceStandard, StandardsTable};
pub use traits::{Validator, ValidatorConstraints};
pub use validators::{ConductivityValidator, OdorValidator, PhValidator};
pub use verdict::{CriteriaFlags, Criterion, ReadinessStatus, Reason, Severity, Verdict};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
