//! Table-Lookup Evaluation Example
//!
//! Judges a few samples against the built-in reference table, the way the
//! detector dashboard does once the classifier has named the fruit.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_table_lookup
//! ```

use fermentguard_core::{
    ChemistryInput, Classification, EvaluationError, Evaluator, OdorScore,
};

fn main() -> anyhow::Result<()> {
    println!("FermentGuard Table-Lookup Example");
    println!("=================================\n");

    let evaluator = Evaluator::sample();

    println!("Reference standards:");
    for standard in evaluator.standards().iter() {
        println!(
            "  {:<11} pH {:.2} - {:.2}, EC >= {:.2} mS/cm",
            standard.fruit(),
            standard.ph_min(),
            standard.ph_max(),
            standard.ec_min()
        );
    }
    println!();

    let samples = [
        ("Banana", 0, 3.80, 6.40, 5),
        ("Papaya", 1, 4.60, 3.10, 3),
        ("Pineapple", 3, 3.20, 3.40, 4),
        ("Durian", 5, 3.60, 5.00, 4),
    ];

    for (label, index, ph, ec, odor) in samples {
        let classification = Classification::new(label, index, 0.9);
        let chemistry = ChemistryInput::new(ph, ec)?.with_odor(OdorScore::new(odor)?);

        match evaluator.evaluate(&classification, &chemistry) {
            Ok(verdict) => {
                let phase = verdict.phase.map(|p| p.name()).unwrap_or("-");
                println!("{label}: {} [{}]", verdict.status, phase);
                for message in verdict.messages() {
                    println!("  - {message}");
                }
            }
            Err(EvaluationError::UnknownStandard { label }) => {
                println!("{label}: no standard found");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
