//! Loading standards profiles from disk and from the built-ins

use std::io::Write;

use fermentguard_core::{
    ChemistryInput, Classification, EvaluationStrategy, Evaluator, OdorScore, ReadinessStatus,
};
use fermentguard_schemas::{
    default_profile, hybrid_profile, ProfileError, StandardsProfile, StrategyDefinition,
};
use tempfile::NamedTempFile;

#[test]
fn default_profile_matches_sample_evaluator() {
    let profile = default_profile();
    let evaluator = profile.build_evaluator(Some(&["Banana", "Papaya"][..])).unwrap();
    let sample = Evaluator::sample();

    assert_eq!(evaluator.standards(), sample.standards());
    assert_eq!(evaluator.strategy(), sample.strategy());
    assert!(evaluator.readiness().is_ready("Banana"));
}

#[test]
fn default_profile_survives_json_round_trip() {
    let profile = default_profile();
    let json = profile.to_json().unwrap();
    assert_eq!(StandardsProfile::from_json_str(&json).unwrap(), profile);
}

#[test]
fn hybrid_profile_uses_fixed_thresholds() {
    let profile = hybrid_profile();
    assert!(matches!(profile.strategy, StrategyDefinition::FixedThreshold { .. }));

    let evaluator = profile.build_evaluator::<&str>(None).unwrap();
    assert!(matches!(evaluator.strategy(), EvaluationStrategy::FixedThreshold(_)));

    let classification = Classification::new("Banana", 0, 0.88);
    let chemistry = ChemistryInput::new(3.5, 2.5).unwrap();
    let verdict = evaluator
        .evaluate_with_selection(&classification, &chemistry, Some("Papaya"))
        .unwrap();
    assert_eq!(verdict.status, ReadinessStatus::Ready);
    assert_eq!(verdict.fruit.as_deref(), Some("Papaya"));
}

#[test]
fn profile_file_drives_evaluation() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "name": "site-a",
            "strategy": {{ "kind": "table_lookup", "odor_threshold": 3 }},
            "standards": [
                {{ "fruit": "Mango", "ph_min": 3.3, "ph_max": 3.9, "ec_min": 5.0, "ec_max": 8.0 }}
            ],
            "ready_classes": ["Mango"]
        }}"#
    )
    .unwrap();

    let profile = StandardsProfile::from_path(file.path()).unwrap();
    let evaluator = profile.build_evaluator::<&str>(None).unwrap();

    let mango = Classification::new("Mango", 0, 0.95);
    let ok = ChemistryInput::new(3.5, 6.0).unwrap().with_odor(OdorScore::new(3).unwrap());
    assert!(evaluator.evaluate(&mango, &ok).unwrap().is_ready());

    let too_salty = ChemistryInput::new(3.5, 9.0).unwrap().with_odor(OdorScore::new(3).unwrap());
    let verdict = evaluator.evaluate(&mango, &too_salty).unwrap();
    assert_eq!(verdict.status, ReadinessStatus::PartiallyReady);
    assert!(!verdict.flags.ec);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    match StandardsProfile::from_path(&path) {
        Err(ProfileError::Io { path: reported, .. }) => assert!(reported.ends_with("absent.json")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn garbage_file_is_a_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();

    assert!(matches!(
        StandardsProfile::from_path(file.path()),
        Err(ProfileError::Parse(_))
    ));
}

#[test]
fn duplicate_fruit_rejected() {
    let json = r#"{
        "name": "dupes",
        "standards": [
            { "fruit": "Banana", "ph_min": 3.5, "ph_max": 4.0, "ec_min": 6.0 },
            { "fruit": "Banana", "ph_min": 3.4, "ph_max": 4.1, "ec_min": 5.0 }
        ]
    }"#;
    assert!(matches!(
        StandardsProfile::from_json_str(json),
        Err(ProfileError::Standards(_))
    ));
}
