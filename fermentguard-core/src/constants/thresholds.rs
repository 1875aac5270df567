//! Default Readiness Gates

/// Minimum odor score that counts as ready (ordinal 1-5).
pub const DEFAULT_ODOR_THRESHOLD: u8 = 4;

/// Fixed-threshold strategy: lowest acceptable pH (inclusive).
pub const FIXED_PH_MIN: f32 = 3.0;

/// Fixed-threshold strategy: highest acceptable pH (inclusive).
pub const FIXED_PH_MAX: f32 = 4.0;

/// Fixed-threshold strategy: lowest acceptable EC in mS/cm (inclusive).
pub const FIXED_EC_MIN: f32 = 2.0;
