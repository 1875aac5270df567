//! Integration tests for the readiness evaluator
//!
//! Covers both strategies end to end through the public `Evaluator` API.

mod common;

use fermentguard_core::{
    Classification, Criterion, EvaluationError, EvaluationStrategy, Evaluator, FermentationPhase,
    FixedThreshold, ReadinessMap, ReadinessStatus, StandardsTable, TableLookup, VisualGate,
};

use common::{chemistry_only, classified, sample, SAMPLE_LABELS};

fn fixed_threshold_evaluator() -> Evaluator {
    Evaluator::sample().with_strategy(EvaluationStrategy::FixedThreshold(FixedThreshold::default()))
}

#[test]
fn every_sample_fruit_can_be_ready() {
    let evaluator = Evaluator::sample();

    for (index, fruit) in SAMPLE_LABELS.iter().enumerate() {
        let standard = evaluator.standards().get(fruit).unwrap();
        let midpoint = (standard.ph_min() + standard.ph_max()) / 2.0;
        let verdict = evaluator
            .evaluate(&classified(index), &sample(midpoint, standard.ec_min(), 5))
            .unwrap();
        assert_eq!(verdict.status, ReadinessStatus::Ready, "{fruit} should be ready");
    }
}

#[test]
fn unknown_label_yields_no_standard() {
    let evaluator = Evaluator::sample();
    let classification = Classification::new("Mangosteen", 3, 0.64);

    let result = evaluator.evaluate(&classification, &sample(3.5, 5.0, 5));
    assert_eq!(
        result,
        Err(EvaluationError::UnknownStandard { label: "Mangosteen".to_string() })
    );
}

#[test]
fn phase_is_reported_regardless_of_verdict() {
    let evaluator = Evaluator::sample();

    let verdict = evaluator.evaluate(&classified(0), &sample(6.0, 1.0, 1)).unwrap();
    assert_eq!(verdict.status, ReadinessStatus::NotReady);
    assert_eq!(verdict.phase, Some(FermentationPhase::Initial));
}

#[test]
fn table_lookup_with_visual_gate() {
    let evaluator = Evaluator::sample().with_strategy(EvaluationStrategy::TableLookup(
        TableLookup::with_visual_gate(VisualGate::Included),
    ));

    // Banana is the ready-looking class in the sample mapping
    let ready = evaluator.evaluate(&classified(0), &sample(3.8, 6.5, 4)).unwrap();
    assert!(ready.is_ready());
    assert!(ready.is_gated_on(Criterion::Visual));

    let pumpkin = evaluator.evaluate(&classified(2), &sample(3.8, 6.5, 4)).unwrap();
    assert_eq!(pumpkin.status, ReadinessStatus::PartiallyReady);
    assert!(pumpkin.messages().any(|m| m.contains("Pumpkin")));
}

#[test]
fn explicit_readiness_map_replaces_positional_convention() {
    let evaluator = Evaluator::new(
        StandardsTable::sample(),
        ReadinessMap::from_ready_classes(["Pumpkin"]),
        EvaluationStrategy::FixedThreshold(FixedThreshold::default()),
    );

    // Index 0 is no longer special
    let banana = evaluator.evaluate(&classified(0), &chemistry_only(3.5, 2.5)).unwrap();
    assert_eq!(banana.status, ReadinessStatus::PartiallyReady);

    let pumpkin = evaluator.evaluate(&classified(2), &chemistry_only(3.5, 2.5)).unwrap();
    assert_eq!(pumpkin.status, ReadinessStatus::Ready);
}

#[test]
fn fixed_threshold_reference_cases() {
    let evaluator = fixed_threshold_evaluator();

    let ready = evaluator.evaluate(&classified(0), &chemistry_only(3.5, 2.5)).unwrap();
    assert_eq!(ready.status, ReadinessStatus::Ready);

    let partial = evaluator.evaluate(&classified(1), &chemistry_only(3.5, 2.5)).unwrap();
    assert_eq!(partial.status, ReadinessStatus::PartiallyReady);

    let not_ready = evaluator.evaluate(&classified(1), &chemistry_only(5.0, 0.5)).unwrap();
    assert_eq!(not_ready.status, ReadinessStatus::NotReady);
}

#[test]
fn fixed_threshold_records_selection() {
    let evaluator = fixed_threshold_evaluator();

    let verdict = evaluator
        .evaluate_with_selection(&classified(0), &chemistry_only(3.5, 2.5), Some("Watermelon"))
        .unwrap();
    assert_eq!(verdict.fruit.as_deref(), Some("Watermelon"));

    let unknown = evaluator.evaluate_with_selection(&classified(0), &chemistry_only(3.5, 2.5), Some("Kiwi"));
    assert!(matches!(unknown, Err(EvaluationError::UnknownStandard { .. })));
}

#[test]
fn table_lookup_ignores_selection() {
    let evaluator = Evaluator::sample();

    let verdict = evaluator
        .evaluate_with_selection(&classified(3), &sample(3.2, 4.0, 4), Some("Banana"))
        .unwrap();
    assert_eq!(verdict.fruit.as_deref(), Some("Pineapple"));
    assert!(verdict.is_ready());
}

#[test]
fn fixed_threshold_does_not_need_odor() {
    let evaluator = fixed_threshold_evaluator();
    assert!(evaluator.evaluate(&classified(0), &chemistry_only(3.5, 2.5)).is_ok());
    assert!(!evaluator.strategy().requires_odor());
    assert!(Evaluator::sample().strategy().requires_odor());
}
