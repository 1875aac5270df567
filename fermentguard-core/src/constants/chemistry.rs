//! Measurement Domains
//!
//! Limits of what the input controls can express. A reading outside these is
//! rejected before any standard is consulted.

/// Lowest pH on the scale.
pub const PH_DOMAIN_MIN: f32 = 0.0;

/// Highest pH on the scale.
pub const PH_DOMAIN_MAX: f32 = 14.0;

/// Conductivity cannot be negative (mS/cm).
pub const EC_DOMAIN_MIN: f32 = 0.0;

/// Upper bound of the EC entry field (mS/cm).
///
/// Typical fermented fruit liquids measure 2-10 mS/cm.
pub const EC_DOMAIN_MAX: f32 = 20.0;

/// Worst smell rating (putrid).
pub const ODOR_SCORE_MIN: u8 = 1;

/// Best smell rating (fully sour-sweet).
pub const ODOR_SCORE_MAX: u8 = 5;
