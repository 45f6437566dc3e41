//! Performance benchmarks for the Annual Leave Engine.
//!
//! Covers the pure calculation core and the HTTP round trip:
//! - Full pipeline, called directly
//! - Attendance summaries over growing exports
//! - Pipeline requests through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use leave_engine::api::{AppState, create_router};
use leave_engine::calculation::{full_pipeline, summarize_nice_records};
use leave_engine::models::{RawAttendanceRecord, ServiceFields, WageFields};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const CATEGORIES: [&str; 5] = [
    "Annual leave",
    "Sick leave",
    "Official trip",
    "Training",
    "Family care",
];

/// Creates an attendance export with `count` records spread over five categories.
fn create_records(count: usize) -> Vec<RawAttendanceRecord> {
    (0..count)
        .map(|i| {
            RawAttendanceRecord::new(
                CATEGORIES[i % CATEGORIES.len()],
                format!("{} days {} hours {} minutes", i % 3, i % 8, (i * 7) % 60),
            )
        })
        .collect()
}

fn create_pipeline_body(i: usize) -> String {
    serde_json::json!({
        "rule_id": ["law_basic", "gw_school_cba", "gw_institute_cba", "custom"][i % 4],
        "service": {
            "full_years": i % 25,
            "full_months": i % 13,
            "attendance_rate": 70 + (i % 31)
        },
        "wage": {
            "wage_type": "monthly",
            "wage_amount": 2_000_000 + i * 1_000,
            "monthly_work_days": 22
        },
        "granted_days": 15,
        "used_days": i % 16
    })
    .to_string()
}

/// Benchmark: Full pipeline without the HTTP layer.
fn bench_full_pipeline(c: &mut Criterion) {
    let service = ServiceFields {
        full_years: 6,
        full_months: 12,
        attendance_rate: Decimal::from(93),
        ..ServiceFields::default()
    };
    let wage = WageFields {
        wage_type: "monthly".to_string(),
        wage_amount: Decimal::from(2_000_000),
        monthly_work_days: Decimal::from(22),
        ..WageFields::default()
    };

    c.bench_function("full_pipeline", |b| {
        b.iter(|| {
            black_box(full_pipeline(
                black_box("law_basic"),
                service.clone(),
                wage.clone(),
                Decimal::from(17),
                Decimal::from(9),
            ))
        })
    });
}

/// Benchmark: Attendance summaries at several export sizes.
fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    for record_count in [10, 100, 1_000, 10_000].iter() {
        let records = create_records(*record_count);

        group.throughput(Throughput::Elements(*record_count as u64));
        group.bench_with_input(
            BenchmarkId::new("records", record_count),
            &records,
            |b, records| b.iter(|| black_box(summarize_nice_records(records))),
        );
    }

    group.finish();
}

/// Benchmark: Single pipeline request through the router.
fn bench_pipeline_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::builtin());
    let body = create_pipeline_body(0);

    c.bench_function("pipeline_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/pipeline")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 100 pipeline requests.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::builtin();
    let requests: Vec<String> = (0..100).map(create_pipeline_body).collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/pipeline")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_full_pipeline,
    bench_summarize,
    bench_pipeline_request,
    bench_batch_100,
);
criterion_main!(benches);
