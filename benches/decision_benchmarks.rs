//! Performance benchmarks for the Credit Line Decision Engine.
//!
//! Every decision is a constant-time table lookup plus a square root, so
//! these benchmarks mainly guard against regressions in audit trace
//! construction.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use credit_line_engine::calculation::optimal_line;
use credit_line_engine::engine::{evaluate, evaluate_input};
use credit_line_engine::models::{DecisionInput, Gender, PayrollCategory};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 19).unwrap()
}

/// Builds one input per gender, category and month of tenure up to `months`.
fn create_inputs(months: u32) -> Vec<DecisionInput> {
    let mut inputs = Vec::new();
    for gender in [Gender::Male, Gender::Female] {
        for payroll_category in PayrollCategory::ALL {
            for months_ago in 0..months {
                inputs.push(DecisionInput {
                    payroll_category,
                    gender,
                    first_employment_date: as_of()
                        .checked_sub_months(chrono::Months::new(months_ago))
                        .unwrap(),
                    as_of: as_of(),
                });
            }
        }
    }
    inputs
}

/// Benchmark: single textual evaluation.
fn bench_single_evaluation(c: &mut Criterion) {
    let first_employment = NaiveDate::from_ymd_opt(2024, 4, 4).unwrap();

    c.bench_function("single_evaluation", |b| {
        b.iter(|| black_box(evaluate(black_box("B"), black_box("m"), first_employment, as_of())))
    });
}

/// Benchmark: optimal line formula alone.
fn bench_optimal_line(c: &mut Criterion) {
    let minimum = Decimal::new(1000, 0);
    let maximum = Decimal::new(4700, 0);

    c.bench_function("optimal_line", |b| {
        b.iter(|| black_box(optimal_line(black_box(minimum), black_box(maximum))))
    });
}

/// Benchmark: every gender/category combination across tenure ranges.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for months in [12u32, 40, 120] {
        let inputs = create_inputs(months);
        group.throughput(Throughput::Elements(inputs.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(inputs.len()), &inputs, |b, inputs| {
            b.iter(|| {
                for input in inputs {
                    black_box(evaluate_input(input).unwrap());
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_evaluation,
    bench_optimal_line,
    bench_batch
);
criterion_main!(benches);
