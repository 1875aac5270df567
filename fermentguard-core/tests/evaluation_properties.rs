//! Property tests for the readiness evaluator

mod common;

use fermentguard_core::{
    Classification, EvaluationError, EvaluationStrategy, Evaluator, FermentationPhase,
    FixedThreshold, ReadinessStatus,
};
use proptest::prelude::*;

use common::{sample, SAMPLE_LABELS};

proptest! {
    #[test]
    fn in_window_readings_are_always_ready(
        fruit in 0usize..5,
        ph_frac in 0.0f32..=1.0,
        ec_extra in 0.0f32..10.0,
        odor in 4u8..=5,
    ) {
        let evaluator = Evaluator::sample();
        let standard = evaluator.standards().get(SAMPLE_LABELS[fruit]).unwrap().clone();
        let ph = (standard.ph_min() + ph_frac * (standard.ph_max() - standard.ph_min()))
            .clamp(standard.ph_min(), standard.ph_max());
        let ec = (standard.ec_min() + ec_extra).min(20.0);

        let classification = Classification::new(SAMPLE_LABELS[fruit], fruit, 0.5);
        let verdict = evaluator.evaluate(&classification, &sample(ph, ec, odor)).unwrap();
        prop_assert_eq!(verdict.status, ReadinessStatus::Ready);
        prop_assert!(verdict.reasons.is_empty());
    }

    #[test]
    fn unknown_labels_never_panic(label in "[A-Za-z]{1,12}", ph in 0.0f32..=14.0, ec in 0.0f32..=20.0) {
        prop_assume!(!SAMPLE_LABELS.contains(&label.as_str()));

        let evaluator = Evaluator::sample();
        let result = evaluator.evaluate(&Classification::new(label.clone(), 0, 0.5), &sample(ph, ec, 3));
        prop_assert_eq!(result, Err(EvaluationError::UnknownStandard { label }));
    }

    #[test]
    fn phase_is_a_step_function(ph in 0.0f32..=14.0) {
        let expected = if ph > 5.0 {
            FermentationPhase::Initial
        } else if ph >= 4.0 {
            FermentationPhase::Active
        } else {
            FermentationPhase::Stationary
        };
        prop_assert_eq!(FermentationPhase::from_ph(ph), expected);
    }

    #[test]
    fn reasons_match_failing_gates(fruit in 0usize..5, ph in 0.0f32..=14.0, ec in 0.0f32..=20.0, odor in 1u8..=5) {
        let evaluator = Evaluator::sample();
        let classification = Classification::new(SAMPLE_LABELS[fruit], fruit, 0.5);
        let verdict = evaluator.evaluate(&classification, &sample(ph, ec, odor)).unwrap();

        let failing = verdict
            .gates
            .iter()
            .filter(|&&gate| verdict.flags.get(gate) == Some(false))
            .count();
        prop_assert_eq!(verdict.reasons.len(), failing);
        prop_assert_eq!(verdict.is_ready(), failing == 0);
    }

    #[test]
    fn fixed_threshold_status_counts_two_gates(ph in 0.0f32..=14.0, ec in 0.0f32..=20.0, index in 0usize..5) {
        let evaluator = Evaluator::sample()
            .with_strategy(EvaluationStrategy::FixedThreshold(FixedThreshold::default()));
        let classification = Classification::new(SAMPLE_LABELS[index], index, 0.5);
        let verdict = evaluator.evaluate(&classification, &common::chemistry_only(ph, ec)).unwrap();

        let chemistry_ok = (3.0..=4.0).contains(&ph) && ec >= 2.0;
        let visual_ok = index == 0;
        let expected = match (chemistry_ok, visual_ok) {
            (true, true) => ReadinessStatus::Ready,
            (false, false) => ReadinessStatus::NotReady,
            _ => ReadinessStatus::PartiallyReady,
        };
        prop_assert_eq!(verdict.status, expected);
    }
}
