//! Table-lookup strategy
//!
//! The detected label picks the reference standard. Steps:
//!
//! 1. Look up the standard; unknown label → `UnknownStandard` (terminal).
//! 2. Derive the fermentation phase from pH (informational).
//! 3. Check pH window, EC threshold(s), odor threshold and visual readiness.
//! 4. Gate on pH ∧ EC ∧ odor, plus visual when [`VisualGate::Included`].

use crate::{
    chemistry::ChemistryInput,
    classification::Classification,
    constants::thresholds::DEFAULT_ODOR_THRESHOLD,
    errors::{EvaluationError, EvaluationResult},
    phase::FermentationPhase,
    readiness::ReadinessMap,
    standards::{ReferenceStandard, StandardsTable},
    validators::utils::within,
    verdict::{CriteriaFlags, Criterion, ReadinessStatus, Reason, Verdict},
};

use super::VisualGate;

/// Standard-per-fruit evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLookup {
    /// Lowest odor score that counts as ready
    pub odor_threshold: u8,
    /// Whether the visual check gates Ready
    pub visual_gate: VisualGate,
}

impl Default for TableLookup {
    fn default() -> Self {
        Self {
            odor_threshold: DEFAULT_ODOR_THRESHOLD,
            visual_gate: VisualGate::Excluded,
        }
    }
}

impl TableLookup {
    /// Default thresholds with the visual check gating Ready
    pub fn with_visual_gate(visual_gate: VisualGate) -> Self {
        Self {
            visual_gate,
            ..Self::default()
        }
    }

    pub(crate) fn judge(
        &self,
        standards: &StandardsTable,
        readiness: &ReadinessMap,
        classification: &Classification,
        chemistry: &ChemistryInput,
    ) -> EvaluationResult<Verdict> {
        let standard = standards.require(&classification.label).map_err(|err| {
            log_warn!("no reference standard for detected label '{}'", classification.label);
            err
        })?;
        let odor = chemistry.odor().ok_or(EvaluationError::MissingOdorScore)?;

        let ph = chemistry.ph();
        let ec = chemistry.ec();
        let phase = FermentationPhase::from_ph(ph);

        let flags = CriteriaFlags {
            ph: within(ph, standard.ph_min(), standard.ph_max()),
            ec: ec_passes(standard, ec),
            odor: Some(odor.value() >= self.odor_threshold),
            visual: readiness.is_ready(&classification.label),
        };

        let mut gates = vec![Criterion::Ph, Criterion::Conductivity, Criterion::Odor];
        if self.visual_gate == VisualGate::Included {
            gates.push(Criterion::Visual);
        }

        let reasons: Vec<Reason> = gates
            .iter()
            .filter(|&&criterion| flags.get(criterion) == Some(false))
            .map(|&criterion| self.reason(criterion, standard, classification, chemistry))
            .collect();

        let passed = gates.len() - reasons.len();
        let status = ReadinessStatus::from_counts(passed, gates.len());

        Ok(Verdict {
            status,
            fruit: Some(standard.fruit().to_string()),
            phase: Some(phase),
            flags,
            gates,
            reasons,
        })
    }

    fn reason(
        &self,
        criterion: Criterion,
        standard: &ReferenceStandard,
        classification: &Classification,
        chemistry: &ChemistryInput,
    ) -> Reason {
        let message = match criterion {
            Criterion::Ph => format!(
                "pH {:.2} is outside the standard range ({:.2} - {:.2})",
                chemistry.ph(),
                standard.ph_min(),
                standard.ph_max()
            ),
            Criterion::Conductivity => match standard.ec_max() {
                Some(max) if chemistry.ec() > max => format!(
                    "EC {:.2} is above the threshold (should be <= {:.2})",
                    chemistry.ec(),
                    max
                ),
                _ => format!(
                    "EC {:.2} is below the threshold (should be >= {:.2})",
                    chemistry.ec(),
                    standard.ec_min()
                ),
            },
            Criterion::Odor => format!(
                "Odor level {} has not reached the ready level (needs >= {})",
                chemistry.odor().map_or(0, |odor| odor.value()),
                self.odor_threshold
            ),
            Criterion::Visual => format!(
                "Image classified as '{}', which is not a ready-looking class",
                classification.label
            ),
        };
        Reason::new(criterion, message)
    }
}

fn ec_passes(standard: &ReferenceStandard, ec: f32) -> bool {
    ec >= standard.ec_min() && standard.ec_max().map_or(true, |max| ec <= max)
}
