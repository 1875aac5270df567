//! Standards Profiles for FermentGuard
//!
//! ## Overview
//!
//! This crate turns JSON documents into ready-to-use evaluators. A profile
//! bundles the reference table, the visual readiness classes and the
//! evaluation strategy, so the same engine can back both the detector
//! dashboard (table lookup) and the hybrid dashboard (fixed thresholds).
//!
//! ## Built-in Profiles
//!
//! | Name      | Strategy          | Fruit source        |
//! |-----------|-------------------|---------------------|
//! | `default` | `table_lookup`    | inferred from photo |
//! | `hybrid`  | `fixed_threshold` | operator selection  |
//!
//! Both ship the sample reference table.
//!
//! ## Usage Example
//!
//! ```rust
//! use fermentguard_schemas::{ProfileRegistry, DEFAULT_PROFILE_NAME};
//!
//! let registry = ProfileRegistry::new();
//! registry.load_defaults()?;
//!
//! let profile = registry.get(DEFAULT_PROFILE_NAME)?;
//! let evaluator = profile.build_evaluator::<&str>(None)?;
//! assert_eq!(evaluator.standards().len(), 5);
//! # Ok::<(), fermentguard_schemas::ProfileError>(())
//! ```
//!
//! ## Custom Profiles
//!
//! ```rust,no_run
//! use fermentguard_schemas::StandardsProfile;
//!
//! let profile = StandardsProfile::from_path("profiles/site-a.json")?;
//! let evaluator = profile.build_evaluator(Some(&["Banana", "Papaya"][..]))?;
//! # Ok::<(), fermentguard_schemas::ProfileError>(())
//! ```

use fermentguard_core::StandardsError;
use thiserror::Error;

pub mod profile;
pub mod registry;

pub use profile::{StandardDefinition, StandardsProfile, StrategyDefinition};
pub use registry::{ProfileRegistry, GLOBAL_REGISTRY};

/// Name of the table-lookup profile
pub const DEFAULT_PROFILE_NAME: &str = "default";

/// Name of the fixed-threshold profile
pub const HYBRID_PROFILE_NAME: &str = "hybrid";

/// Embedded profile documents
pub(crate) const BUILTIN_PROFILES: [(&str, &str); 2] = [
    (DEFAULT_PROFILE_NAME, include_str!("../profiles/default.json")),
    (HYBRID_PROFILE_NAME, include_str!("../profiles/hybrid.json")),
];

/// Profile-related errors
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to parse profile: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read profile {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Standards(#[from] StandardsError),

    #[error("profile '{0}' has no standards")]
    EmptyStandards(String),

    #[error("invalid strategy: {0}")]
    InvalidStrategy(String),

    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    #[error("profile not found: {0}")]
    NotFound(String),

    #[error("profile '{0}' already registered")]
    Duplicate(String),

    #[error("profile registry lock poisoned")]
    LockPoisoned,
}

/// The built-in table-lookup profile
pub fn default_profile() -> StandardsProfile {
    registry::DEFAULT_PROFILE.clone()
}

/// The built-in fixed-threshold profile
pub fn hybrid_profile() -> StandardsProfile {
    registry::HYBRID_PROFILE.clone()
}
