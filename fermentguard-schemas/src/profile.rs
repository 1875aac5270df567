//! Standards Profiles
//!
//! A profile is everything an evaluator needs besides the classifier: the
//! reference table, which classes look ready, and the strategy to apply.
//! Profiles are plain JSON so a deployment can swap thresholds without
//! recompiling.
//!
//! ```json
//! {
//!   "name": "default",
//!   "strategy": { "kind": "table_lookup", "odor_threshold": 4, "visual_gate": "excluded" },
//!   "standards": [
//!     { "fruit": "Banana", "ph_min": 3.5, "ph_max": 4.0, "ec_min": 6.0 }
//!   ],
//!   "ready_classes": ["Banana"]
//! }
//! ```
//!
//! ## Ready Classes
//!
//! `ready_classes` is optional. When it is omitted the first label of the
//! classifier's label file is treated as the ready-looking class, which is
//! what existing label files assume. Without a label file the first fruit of
//! the table stands in for it.

use std::fs;
use std::path::Path;

use fermentguard_core::{
    constants::chemistry::{EC_DOMAIN_MIN, ODOR_SCORE_MAX, ODOR_SCORE_MIN, PH_DOMAIN_MAX, PH_DOMAIN_MIN},
    constants::thresholds::{DEFAULT_ODOR_THRESHOLD, FIXED_EC_MIN, FIXED_PH_MAX, FIXED_PH_MIN},
    EvaluationStrategy, Evaluator, FixedThreshold, ReadinessMap, ReferenceStandard, StandardsTable,
    TableLookup, VisualGate,
};
use serde::{Deserialize, Serialize};

use crate::ProfileError;

/// One row of the reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardDefinition {
    /// Fruit type name, matched exactly against classifier labels
    pub fruit: String,
    /// Lowest acceptable pH
    pub ph_min: f32,
    /// Highest acceptable pH
    pub ph_max: f32,
    /// Lowest acceptable EC in mS/cm
    pub ec_min: f32,
    /// Optional EC cap in mS/cm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ec_max: Option<f32>,
}

impl From<&ReferenceStandard> for StandardDefinition {
    fn from(standard: &ReferenceStandard) -> Self {
        Self {
            fruit: standard.fruit().to_string(),
            ph_min: standard.ph_min(),
            ph_max: standard.ph_max(),
            ec_min: standard.ec_min(),
            ec_max: standard.ec_max(),
        }
    }
}

/// Evaluation strategy as written in a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyDefinition {
    /// Standard looked up by detected label
    TableLookup {
        /// Lowest passing odor score
        #[serde(default = "default_odor_threshold")]
        odor_threshold: u8,
        /// Whether the visual check gates Ready
        #[serde(default)]
        visual_gate: VisualGate,
    },
    /// Fixed chemistry bounds with an operator-selected fruit
    FixedThreshold {
        /// Lowest acceptable pH
        #[serde(default = "default_fixed_ph_min")]
        ph_min: f32,
        /// Highest acceptable pH
        #[serde(default = "default_fixed_ph_max")]
        ph_max: f32,
        /// Lowest acceptable EC
        #[serde(default = "default_fixed_ec_min")]
        ec_min: f32,
    },
}

fn default_odor_threshold() -> u8 {
    DEFAULT_ODOR_THRESHOLD
}

fn default_fixed_ph_min() -> f32 {
    FIXED_PH_MIN
}

fn default_fixed_ph_max() -> f32 {
    FIXED_PH_MAX
}

fn default_fixed_ec_min() -> f32 {
    FIXED_EC_MIN
}

impl Default for StrategyDefinition {
    fn default() -> Self {
        StrategyDefinition::TableLookup {
            odor_threshold: DEFAULT_ODOR_THRESHOLD,
            visual_gate: VisualGate::Excluded,
        }
    }
}

impl StrategyDefinition {
    /// Check bounds and build the runtime strategy
    pub fn to_strategy(&self) -> Result<EvaluationStrategy, ProfileError> {
        match *self {
            StrategyDefinition::TableLookup { odor_threshold, visual_gate } => {
                if !(ODOR_SCORE_MIN..=ODOR_SCORE_MAX).contains(&odor_threshold) {
                    return Err(ProfileError::InvalidStrategy(format!(
                        "odor_threshold {odor_threshold} outside {ODOR_SCORE_MIN}-{ODOR_SCORE_MAX}"
                    )));
                }
                Ok(EvaluationStrategy::TableLookup(TableLookup {
                    odor_threshold,
                    visual_gate,
                }))
            }
            StrategyDefinition::FixedThreshold { ph_min, ph_max, ec_min } => {
                let finite = ph_min.is_finite() && ph_max.is_finite() && ec_min.is_finite();
                if !finite || ph_min > ph_max || ph_min < PH_DOMAIN_MIN || ph_max > PH_DOMAIN_MAX {
                    return Err(ProfileError::InvalidStrategy(format!(
                        "fixed pH window {ph_min} - {ph_max} is not a valid range on the pH scale"
                    )));
                }
                if ec_min < EC_DOMAIN_MIN {
                    return Err(ProfileError::InvalidStrategy(format!(
                        "fixed ec_min {ec_min} is negative"
                    )));
                }
                Ok(EvaluationStrategy::FixedThreshold(FixedThreshold {
                    ph_min,
                    ph_max,
                    ec_min,
                }))
            }
        }
    }
}

impl From<&EvaluationStrategy> for StrategyDefinition {
    fn from(strategy: &EvaluationStrategy) -> Self {
        match strategy {
            EvaluationStrategy::TableLookup(t) => StrategyDefinition::TableLookup {
                odor_threshold: t.odor_threshold,
                visual_gate: t.visual_gate,
            },
            EvaluationStrategy::FixedThreshold(f) => StrategyDefinition::FixedThreshold {
                ph_min: f.ph_min,
                ph_max: f.ph_max,
                ec_min: f.ec_min,
            },
        }
    }
}

/// Complete evaluator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardsProfile {
    /// Registry key
    pub name: String,
    /// Free-form note for operators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Strategy to evaluate with
    #[serde(default)]
    pub strategy: StrategyDefinition,
    /// Reference table rows in display order
    pub standards: Vec<StandardDefinition>,
    /// Class names that look ready; see module docs for the fallback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_classes: Option<Vec<String>>,
}

impl StandardsProfile {
    /// Parse a profile from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, ProfileError> {
        let profile: Self = serde_json::from_str(json)?;
        profile.check()?;
        Ok(profile)
    }

    /// Read and parse a profile file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("loaded standards profile from {}", path.display());
        Self::from_json_str(&text)
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Capture an evaluator's configuration as a profile
    pub fn from_evaluator(name: impl Into<String>, evaluator: &Evaluator) -> Self {
        Self {
            name: name.into(),
            description: None,
            strategy: StrategyDefinition::from(evaluator.strategy()),
            standards: evaluator.standards().iter().map(StandardDefinition::from).collect(),
            ready_classes: Some(evaluator.readiness().ready_classes().map(str::to_string).collect()),
        }
    }

    /// Build the immutable reference table
    pub fn standards_table(&self) -> Result<StandardsTable, ProfileError> {
        if self.standards.is_empty() {
            return Err(ProfileError::EmptyStandards(self.name.clone()));
        }

        let entries = self
            .standards
            .iter()
            .map(|row| ReferenceStandard::with_ec_max(&row.fruit, row.ph_min, row.ph_max, row.ec_min, row.ec_max))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StandardsTable::new(entries)?)
    }

    /// Resolve which classes look ready, given the classifier's labels if known
    pub fn readiness_map<S: AsRef<str>>(&self, labels: Option<&[S]>) -> ReadinessMap {
        match (&self.ready_classes, labels) {
            (Some(classes), _) => ReadinessMap::from_ready_classes(classes.iter().cloned()),
            (None, Some(labels)) => ReadinessMap::first_label_ready(labels),
            (None, None) => {
                ReadinessMap::from_ready_classes(self.standards.first().map(|row| row.fruit.clone()))
            }
        }
    }

    /// Build an evaluator from this profile
    pub fn build_evaluator<S: AsRef<str>>(&self, labels: Option<&[S]>) -> Result<Evaluator, ProfileError> {
        let standards = self.standards_table()?;
        let strategy = self.strategy.to_strategy()?;
        let readiness = self.readiness_map(labels);

        log::info!(
            "profile '{}': {} standards, {} strategy, ready classes [{}]",
            self.name,
            standards.len(),
            strategy.name(),
            readiness.ready_classes().collect::<Vec<_>>().join(", ")
        );

        Ok(Evaluator::new(standards, readiness, strategy))
    }

    fn check(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::InvalidProfile("profile name must not be empty".to_string()));
        }
        self.standards_table()?;
        self.strategy.to_strategy()?;
        Ok(())
    }
}
