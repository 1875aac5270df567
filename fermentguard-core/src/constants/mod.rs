//! Constants for FermentGuard Core
//!
//! Centralized, documented constants used by the validators and the
//! evaluation strategies. All numeric thresholds live here so the strategies
//! never carry magic numbers.
//!
//! ## Organization
//!
//! - **Chemistry**: Measurement domains for pH, EC and odor inputs
//! - **Phases**: pH boundaries between fermentation phases
//! - **Thresholds**: Default gates used by the evaluation strategies

/// Measurement domains accepted from the input widgets.
pub mod chemistry;

/// pH boundaries for the informational fermentation phase.
pub mod phases;

/// Default readiness gates.
pub mod thresholds;

pub use chemistry::{EC_DOMAIN_MAX, EC_DOMAIN_MIN, ODOR_SCORE_MAX, ODOR_SCORE_MIN, PH_DOMAIN_MAX, PH_DOMAIN_MIN};
pub use phases::{ACTIVE_PHASE_PH_MAX, ACTIVE_PHASE_PH_MIN};
pub use thresholds::{
    DEFAULT_ODOR_THRESHOLD, FIXED_EC_MIN, FIXED_PH_MAX, FIXED_PH_MIN,
};
