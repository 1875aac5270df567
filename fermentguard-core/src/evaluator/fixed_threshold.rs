//! Fixed-threshold strategy
//!
//! The operator picks the fruit; chemistry is judged against fixed bounds and
//! combined with the visual check:
//!
//! ```text
//! chemistry ok │ visual ok │ status
//! ─────────────┼───────────┼────────────────
//!      yes     │    yes    │ Ready
//!      yes     │    no     │ Partially Ready
//!      no      │    yes    │ Partially Ready
//!      no      │    no     │ Not Ready
//! ```

use crate::{
    chemistry::ChemistryInput,
    classification::Classification,
    constants::thresholds::{FIXED_EC_MIN, FIXED_PH_MAX, FIXED_PH_MIN},
    errors::EvaluationResult,
    readiness::ReadinessMap,
    standards::StandardsTable,
    validators::utils::within,
    verdict::{CriteriaFlags, Criterion, ReadinessStatus, Reason, Verdict},
};

/// Fixed chemistry bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedThreshold {
    /// Lowest acceptable pH (inclusive)
    pub ph_min: f32,
    /// Highest acceptable pH (inclusive)
    pub ph_max: f32,
    /// Lowest acceptable EC (inclusive)
    pub ec_min: f32,
}

impl Default for FixedThreshold {
    fn default() -> Self {
        Self {
            ph_min: FIXED_PH_MIN,
            ph_max: FIXED_PH_MAX,
            ec_min: FIXED_EC_MIN,
        }
    }
}

impl FixedThreshold {
    pub(crate) fn judge(
        &self,
        standards: &StandardsTable,
        readiness: &ReadinessMap,
        classification: &Classification,
        chemistry: &ChemistryInput,
        selected_fruit: Option<&str>,
    ) -> EvaluationResult<Verdict> {
        // The selector offers table entries only; anything else is rejected
        let fruit = match selected_fruit {
            Some(name) => Some(standards.require(name)?.fruit().to_string()),
            None => None,
        };

        let ph = chemistry.ph();
        let ec = chemistry.ec();

        let flags = CriteriaFlags {
            ph: within(ph, self.ph_min, self.ph_max),
            ec: ec >= self.ec_min,
            odor: None,
            visual: readiness.is_ready(&classification.label),
        };

        let chemistry_ok = flags.ph && flags.ec;
        let passed = usize::from(chemistry_ok) + usize::from(flags.visual);
        let status = ReadinessStatus::from_counts(passed, 2);

        let gates = vec![Criterion::Ph, Criterion::Conductivity, Criterion::Visual];
        let mut reasons = Vec::new();
        if !flags.ph {
            reasons.push(Reason::new(
                Criterion::Ph,
                format!(
                    "pH {:.2} is outside the fixed range ({:.2} - {:.2})",
                    ph, self.ph_min, self.ph_max
                ),
            ));
        }
        if !flags.ec {
            reasons.push(Reason::new(
                Criterion::Conductivity,
                format!("EC {:.2} is below the threshold (should be >= {:.2})", ec, self.ec_min),
            ));
        }
        if !flags.visual {
            reasons.push(Reason::new(
                Criterion::Visual,
                format!(
                    "Image classified as '{}', which is not a ready-looking class",
                    classification.label
                ),
            ));
        }

        Ok(Verdict {
            status,
            fruit,
            phase: None,
            flags,
            gates,
            reasons,
        })
    }
}
