//! Readiness Evaluation Engine
//!
//! ## Overview
//!
//! One engine, two strategies. Both are pure functions of the classifier
//! output, the chemistry readings and the static standards data:
//!
//! ```text
//!                    ┌──────────────────────┐
//! Classification ──▶ │                      │
//!                    │      Evaluator       │ ──▶ Verdict
//! ChemistryInput ──▶ │  (strategy + table)  │     (or EvaluationError)
//!                    └──────────────────────┘
//! ```
//!
//! ### Table lookup
//! The detected label selects a reference standard. pH, EC and odor gate the
//! verdict; the visual check is always computed but only gates when
//! [`VisualGate::Included`] is configured. A fermentation phase is attached.
//!
//! ### Fixed threshold
//! The fruit is chosen by the operator, not inferred. Chemistry is judged
//! against fixed bounds (pH 3.0-4.0, EC ≥ 2.0) and combined with the visual
//! check: both pass → Ready, one → Partially Ready, none → Not Ready.
//!
//! ## Usage Example
//!
//! ```rust
//! use fermentguard_core::{
//!     ChemistryInput, Classification, Evaluator, OdorScore, ReadinessStatus,
//! };
//!
//! let evaluator = Evaluator::sample();
//! let classification = Classification::new("Banana", 0, 0.97);
//! let chemistry = ChemistryInput::new(3.8, 6.5)?.with_odor(OdorScore::new(5)?);
//!
//! let verdict = evaluator.evaluate(&classification, &chemistry)?;
//! assert_eq!(verdict.status, ReadinessStatus::Ready);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod fixed_threshold;
mod table_lookup;

pub use fixed_threshold::FixedThreshold;
pub use table_lookup::TableLookup;

use crate::{
    chemistry::ChemistryInput,
    classification::Classification,
    errors::EvaluationResult,
    readiness::ReadinessMap,
    standards::StandardsTable,
    verdict::Verdict,
};

/// Whether the visual check takes part in the Ready gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VisualGate {
    /// Computed and reported, but Ready depends on chemistry and odor only
    #[default]
    Excluded,
    /// Ready also requires a ready-looking class
    Included,
}

/// How a sample is judged
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationStrategy {
    /// Standard looked up by the detected label
    TableLookup(TableLookup),
    /// Fixed chemistry bounds, operator-selected fruit
    FixedThreshold(FixedThreshold),
}

impl Default for EvaluationStrategy {
    fn default() -> Self {
        EvaluationStrategy::TableLookup(TableLookup::default())
    }
}

impl EvaluationStrategy {
    /// Short name for logs and reports
    pub const fn name(&self) -> &'static str {
        match self {
            EvaluationStrategy::TableLookup(_) => "table_lookup",
            EvaluationStrategy::FixedThreshold(_) => "fixed_threshold",
        }
    }

    /// Whether this strategy needs an odor score
    pub fn requires_odor(&self) -> bool {
        matches!(self, EvaluationStrategy::TableLookup(_))
    }
}

/// Readiness evaluator bound to a standards table and readiness mapping
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluator {
    standards: StandardsTable,
    readiness: ReadinessMap,
    strategy: EvaluationStrategy,
}

impl Evaluator {
    /// Create an evaluator
    pub fn new(standards: StandardsTable, readiness: ReadinessMap, strategy: EvaluationStrategy) -> Self {
        Self {
            standards,
            readiness,
            strategy,
        }
    }

    /// Sample standards, first fruit visually ready, table-lookup strategy
    pub fn sample() -> Self {
        let standards = StandardsTable::sample();
        let labels: Vec<&str> = standards.fruits().collect();
        let readiness = ReadinessMap::first_label_ready(&labels);
        Self::new(standards, readiness, EvaluationStrategy::default())
    }

    /// Same standards and mapping, different strategy
    pub fn with_strategy(mut self, strategy: EvaluationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Reference standards in use
    pub fn standards(&self) -> &StandardsTable {
        &self.standards
    }

    /// Visual readiness mapping in use
    pub fn readiness(&self) -> &ReadinessMap {
        &self.readiness
    }

    /// Active strategy
    pub fn strategy(&self) -> &EvaluationStrategy {
        &self.strategy
    }

    /// Judge a sample. The fixed-threshold strategy runs without a fruit
    /// selection; use [`Evaluator::evaluate_with_selection`] to attach one.
    pub fn evaluate(&self, classification: &Classification, chemistry: &ChemistryInput) -> EvaluationResult<Verdict> {
        self.evaluate_with_selection(classification, chemistry, None)
    }

    /// Judge a sample with an operator-selected fruit.
    ///
    /// The selection only matters to the fixed-threshold strategy; table
    /// lookup always uses the detected label.
    pub fn evaluate_with_selection(
        &self,
        classification: &Classification,
        chemistry: &ChemistryInput,
        selected_fruit: Option<&str>,
    ) -> EvaluationResult<Verdict> {
        log_debug!(
            "evaluating '{}' (index {}, confidence {:.3}) with {} strategy",
            classification.label,
            classification.class_index,
            classification.confidence,
            self.strategy.name()
        );

        let verdict = match &self.strategy {
            EvaluationStrategy::TableLookup(strategy) => {
                strategy.judge(&self.standards, &self.readiness, classification, chemistry)
            }
            EvaluationStrategy::FixedThreshold(strategy) => strategy.judge(
                &self.standards,
                &self.readiness,
                classification,
                chemistry,
                selected_fruit,
            ),
        }?;

        log_info!(
            "verdict for {}: {} ({} failing criteria)",
            verdict.fruit.as_deref().unwrap_or("unselected sample"),
            verdict.status,
            verdict.reasons.len()
        );

        Ok(verdict)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::sample()
    }
}
