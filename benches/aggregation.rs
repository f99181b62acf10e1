use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kwhstat::{
    aggregation::Aggregator,
    charts::{GraphType, build_chart},
    diagnostics::SilentSink,
    filters::DateRange,
    types::{Metric, RowRecord},
};
use kwhstat_provider_pge::data_loader::parse_records;
use std::hint::black_box;
use std::io::Cursor;

fn create_test_records(days: u64) -> Vec<RowRecord> {
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    let mut records = Vec::with_capacity(days as usize * 24);

    for offset in 0..days {
        let date = start + Days::new(offset);
        for hour in 0..24u32 {
            let usage = 0.2 + f64::from((hour * 7 + offset as u32) % 13) * 0.1;
            let rate = if (16..21).contains(&hour) { 0.49 } else { 0.33 };
            records.push(RowRecord::new(date, format!("{hour}:00"), usage, usage * rate));
        }
    }

    records
}

fn create_test_export(days: u64) -> String {
    let mut export = String::from(
        "Name,JANE DOE\nAddress,\"1 MAIN ST, SPRINGFIELD CA 94000\"\nAccount Number,0000000000\nService,Service 1\n\n\n",
    );
    export.push_str("TYPE,DATE,START TIME,END TIME,USAGE (kWh),COST,NOTES\n");
    for record in create_test_records(days) {
        export.push_str(&format!(
            "Electric usage,{},{},{},{:.2},${:.2},\n",
            record.date_label, record.start_time, record.start_time, record.usage_kwh, record.cost
        ));
    }
    export
}

fn benchmark_groupings(c: &mut Criterion) {
    let mut group = c.benchmark_group("groupings");

    for days in [30u64, 365, 3 * 365] {
        let records = create_test_records(days);
        let aggregator = Aggregator::new(DateRange::new()).with_metric(Metric::Cost);

        group.bench_with_input(BenchmarkId::new("month_weekday", days), &records, |b, records| {
            b.iter(|| {
                let mut sink = SilentSink::new();
                black_box(aggregator.by_month_weekday(black_box(records), &mut sink))
            });
        });

        group.bench_with_input(BenchmarkId::new("weekday_hour", days), &records, |b, records| {
            b.iter(|| {
                let mut sink = SilentSink::new();
                black_box(aggregator.by_weekday_hour(black_box(records), &mut sink))
            });
        });

        group.bench_with_input(BenchmarkId::new("per_day", days), &records, |b, records| {
            b.iter(|| black_box(aggregator.by_day(black_box(records))));
        });
    }

    group.finish();
}

fn benchmark_all_views(c: &mut Criterion) {
    let records = create_test_records(365);
    let range = DateRange::new();

    c.bench_function("build_all_views_1_year", |b| {
        b.iter(|| {
            for graph in GraphType::ALL {
                let mut sink = SilentSink::new();
                black_box(build_chart(graph, &records, &range, "bench.csv", &mut sink));
            }
        });
    });
}

fn benchmark_parsing(c: &mut Criterion) {
    let export = create_test_export(365);

    c.bench_function("parse_export_1_year", |b| {
        b.iter(|| {
            let loaded = parse_records(Cursor::new(export.as_bytes()), 6, "bench.csv").unwrap();
            black_box(loaded.records.len())
        });
    });
}

criterion_group!(benches, benchmark_groupings, benchmark_all_views, benchmark_parsing);
criterion_main!(benches);
