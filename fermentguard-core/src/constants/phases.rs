//! Fermentation Phase Boundaries
//!
//! Phase is a coarse step function of pH alone:
//!
//! ```text
//! pH  0 ────────── 4.0 ══════════ 5.0 ────────── 14
//!      Stationary     Active (incl.)    Initial
//! ```
//!
//! Both boundaries belong to the Active phase.

/// Lowest pH still considered Active (inclusive).
pub const ACTIVE_PHASE_PH_MIN: f32 = 4.0;

/// Highest pH still considered Active (inclusive). Above this is Initial.
pub const ACTIVE_PHASE_PH_MAX: f32 = 5.0;
