use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ridestats::models::record::ClassRecord;
use ridestats::models::stats::{aggregate, AggregateOptions};

/// Roughly five years of near-daily riding.
fn synthetic_records(count: usize) -> Vec<ClassRecord> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date");
    (0..count)
        .map(|i| ClassRecord {
            date: start + chrono::Duration::days(i as i64),
            rank: if i % 3 == 0 { Some((i % 20 + 1) as i64) } else { None },
        })
        .collect()
}

fn benchmark_aggregate(c: &mut Criterion) {
    let records = synthetic_records(1800);
    let options = AggregateOptions::default();

    c.bench_function("aggregate_1800_records", |b| {
        b.iter(|| aggregate(black_box(&records), &options))
    });
}

criterion_group!(benches, benchmark_aggregate);
criterion_main!(benches);
