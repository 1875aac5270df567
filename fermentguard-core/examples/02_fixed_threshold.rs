//! Fixed-Threshold Evaluation Example
//!
//! The hybrid dashboard: the operator selects the fruit, chemistry is judged
//! against fixed bounds and combined with the classifier's visual check.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_fixed_threshold
//! ```

use fermentguard_core::{
    ChemistryInput, Classification, EvaluationStrategy, Evaluator, FixedThreshold,
};

fn main() -> anyhow::Result<()> {
    println!("FermentGuard Fixed-Threshold Example");
    println!("====================================\n");

    let evaluator = Evaluator::sample()
        .with_strategy(EvaluationStrategy::FixedThreshold(FixedThreshold::default()));

    let cases = [
        ("Banana", 0, 3.5, 2.5),
        ("Papaya", 1, 3.5, 2.5),
        ("Papaya", 1, 5.0, 0.5),
    ];

    for (selected, index, ph, ec) in cases {
        let classification = Classification::new(selected, index, 0.85);
        let chemistry = ChemistryInput::new(ph, ec)?;
        let verdict = evaluator.evaluate_with_selection(&classification, &chemistry, Some(selected))?;

        println!(
            "{selected} (pH {ph:.2}, EC {ec:.2}): {} [{}]",
            verdict.status,
            verdict.status.severity().color()
        );
        for message in verdict.messages() {
            println!("  - {message}");
        }
    }

    Ok(())
}
