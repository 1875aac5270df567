//! Profile Registry
//!
//! Thread-safe, name-keyed store of standards profiles. The presentation
//! layer looks profiles up by name; nothing is ever mutated in place.

use std::collections::HashMap;
use std::sync::RwLock;

use fermentguard_core::{EvaluationStrategy, Evaluator, FixedThreshold};

use crate::{profile::StandardsProfile, ProfileError, BUILTIN_PROFILES};

/// Thread-safe profile registry
pub struct ProfileRegistry {
    profiles: RwLock<HashMap<String, StandardsProfile>>,
}

impl ProfileRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
        }
    }

    /// Register a profile under its own name
    pub fn register(&self, profile: StandardsProfile) -> Result<(), ProfileError> {
        let mut profiles = self.profiles.write().map_err(|_| ProfileError::LockPoisoned)?;

        if profiles.contains_key(&profile.name) {
            return Err(ProfileError::Duplicate(profile.name));
        }

        log::debug!("registered standards profile '{}'", profile.name);
        profiles.insert(profile.name.clone(), profile);
        Ok(())
    }

    /// Parse and register a JSON profile
    pub fn register_json(&self, json: &str) -> Result<(), ProfileError> {
        self.register(StandardsProfile::from_json_str(json)?)
    }

    /// Get a profile by name
    pub fn get(&self, name: &str) -> Result<StandardsProfile, ProfileError> {
        let profiles = self.profiles.read().map_err(|_| ProfileError::LockPoisoned)?;

        profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ProfileError::NotFound(name.to_string()))
    }

    /// Registered names, sorted
    pub fn names(&self) -> Result<Vec<String>, ProfileError> {
        let profiles = self.profiles.read().map_err(|_| ProfileError::LockPoisoned)?;

        let mut names: Vec<String> = profiles.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Load the embedded `default` and `hybrid` profiles
    pub fn load_defaults(&self) -> Result<(), ProfileError> {
        for (name, json) in BUILTIN_PROFILES {
            let profile = StandardsProfile::from_json_str(json)?;
            if profile.name != name {
                return Err(ProfileError::InvalidProfile(format!(
                    "embedded profile '{name}' declares name '{}'",
                    profile.name
                )));
            }
            self.register(profile)?;
        }
        Ok(())
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    /// Global registry with the built-in profiles loaded
    pub static ref GLOBAL_REGISTRY: ProfileRegistry = {
        let registry = ProfileRegistry::new();
        if let Err(e) = registry.load_defaults() {
            log::error!("failed to load built-in standards profiles: {e}");
        }
        registry
    };

    /// Parsed built-in table-lookup profile
    pub(crate) static ref DEFAULT_PROFILE: StandardsProfile = {
        let (name, json) = BUILTIN_PROFILES[0];
        builtin(name, json, Evaluator::sample)
    };

    /// Parsed built-in fixed-threshold profile
    pub(crate) static ref HYBRID_PROFILE: StandardsProfile = {
        let (name, json) = BUILTIN_PROFILES[1];
        builtin(name, json, fixed_threshold_sample)
    };
}

/// Parse an embedded profile, falling back to `fallback` with the same strategy kind
fn builtin(name: &str, json: &str, fallback: fn() -> Evaluator) -> StandardsProfile {
    StandardsProfile::from_json_str(json).unwrap_or_else(|e| {
        log::error!("embedded profile '{name}' is invalid ({e}), using the sample table");
        StandardsProfile::from_evaluator(name, &fallback())
    })
}

fn fixed_threshold_sample() -> Evaluator {
    Evaluator::sample().with_strategy(EvaluationStrategy::FixedThreshold(FixedThreshold::default()))
}
