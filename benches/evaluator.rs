use criterion::{black_box, criterion_group, criterion_main, Criterion};

use clinit_eval::{EvalConfig, Evaluator, OverrideMode};

fn bench_run(c: &mut Criterion) {
    c.bench_function("run_sum", |b| {
        b.iter(|| {
            let mut evaluator = Evaluator::new(black_box(EvalConfig::sum()));
            evaluator.run()
        })
    });

    c.bench_function("run_hello_world_report", |b| {
        b.iter(|| {
            let mut evaluator = Evaluator::new(black_box(EvalConfig::hello_world()));
            evaluator.run_report()
        })
    });

    let config = EvalConfig::sum()
        .with_override_mode(OverrideMode::ChainThrough)
        .with_warmup_increments(1000);
    c.bench_function("run_chain_through_warmup_1000", |b| {
        b.iter(|| {
            let mut evaluator = Evaluator::new(black_box(config.clone()));
            evaluator.run()
        })
    });
}

criterion_group!(benches, bench_run);
criterion_main!(benches);
