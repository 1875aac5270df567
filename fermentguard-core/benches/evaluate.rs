use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fermentguard_core::{
    ChemistryInput, Classification, EvaluationStrategy, Evaluator, FixedThreshold, OdorScore,
};

fn table_lookup(c: &mut Criterion) {
    let evaluator = Evaluator::sample();
    let classification = Classification::new("Watermelon", 4, 0.93);
    let chemistry = ChemistryInput::new(4.1, 2.2)
        .unwrap()
        .with_odor(OdorScore::new(3).unwrap());

    c.bench_function("table_lookup_evaluate", |b| {
        b.iter(|| evaluator.evaluate(black_box(&classification), black_box(&chemistry)))
    });
}

fn fixed_threshold(c: &mut Criterion) {
    let evaluator = Evaluator::sample()
        .with_strategy(EvaluationStrategy::FixedThreshold(FixedThreshold::default()));
    let classification = Classification::new("Banana", 0, 0.81);
    let chemistry = ChemistryInput::new(3.5, 2.5).unwrap();

    c.bench_function("fixed_threshold_evaluate", |b| {
        b.iter(|| {
            evaluator.evaluate_with_selection(
                black_box(&classification),
                black_box(&chemistry),
                Some("Papaya"),
            )
        })
    });
}

criterion_group!(benches, table_lookup, fixed_threshold);
criterion_main!(benches);
