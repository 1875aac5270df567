//! Shared fixtures for evaluator integration tests

#![allow(dead_code)]

use fermentguard_core::{ChemistryInput, Classification, OdorScore};

/// Labels in the order the sample label file lists them
pub const SAMPLE_LABELS: [&str; 5] = ["Banana", "Papaya", "Pumpkin", "Pineapple", "Watermelon"];

/// Chemistry with an odor score
pub fn sample(ph: f32, ec: f32, odor: u8) -> ChemistryInput {
    ChemistryInput::new(ph, ec)
        .expect("fixture readings are in domain")
        .with_odor(OdorScore::new(odor).expect("fixture odor is on scale"))
}

/// Chemistry without an odor score
pub fn chemistry_only(ph: f32, ec: f32) -> ChemistryInput {
    ChemistryInput::new(ph, ec).expect("fixture readings are in domain")
}

/// Classification of a sample label by position
pub fn classified(index: usize) -> Classification {
    Classification::new(SAMPLE_LABELS[index], index, 0.9)
}
