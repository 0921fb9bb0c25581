//! Performance benchmarks for the Severance Settlement Engine.
//!
//! This benchmark suite verifies that the engine stays fast enough to sit
//! behind an interactive API:
//! - Single settlement calculation: < 50μs mean
//! - Long-service settlement (decades of months to iterate): < 200μs mean
//! - HTTP round-trip through the router: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use rescisao_engine::api::{AppState, create_router};
use rescisao_engine::calculation::calculate_settlement;
use rescisao_engine::config::{ConfigLoader, SettlementRules};
use rescisao_engine::models::{NoticeType, TerminationReason, TerminationRequest};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn create_request(hire_year: i32) -> TerminationRequest {
    TerminationRequest {
        monthly_salary: Decimal::new(300000, 2),
        hire_date: NaiveDate::from_ymd_opt(hire_year, 1, 1).unwrap(),
        termination_date: NaiveDate::from_ymd_opt(2023, 6, 20).unwrap(),
        reason: TerminationReason::DismissalWithoutCause,
        notice_type: NoticeType::PaidInLieu,
        has_expired_vacation: false,
        unexcused_absence_days: None,
    }
}

fn bench_single_settlement(c: &mut Criterion) {
    let rules = SettlementRules::default();
    let request = create_request(2023);

    c.bench_function("settlement_six_months", |b| {
        b.iter(|| calculate_settlement(black_box(&request), black_box(&rules)).unwrap())
    });
}

fn bench_service_span(c: &mut Criterion) {
    // The 15-day-rule counter iterates one step per calendar month, so the
    // cost grows with the employment span
    let rules = SettlementRules::default();
    let mut group = c.benchmark_group("settlement_by_service_years");

    for hire_year in [2022, 2013, 1993] {
        let request = create_request(hire_year);
        let years = 2023 - hire_year;
        group.bench_with_input(BenchmarkId::from_parameter(years), &request, |b, request| {
            b.iter(|| calculate_settlement(black_box(request), black_box(&rules)).unwrap())
        });
    }

    group.finish();
}

fn bench_http_round_trip(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/clt").expect("Failed to load config");
    let state = AppState::new(config);

    let body = serde_json::json!({
        "monthly_salary": "3000.00",
        "hire_date": "2023-01-01",
        "termination_date": "2023-06-20",
        "reason": "dismissal_without_cause",
        "notice_type": "paid_in_lieu"
    })
    .to_string();

    c.bench_function("http_calculate", |b| {
        b.to_async(&runtime).iter(|| {
            let router = create_router(state.clone());
            let body = body.clone();
            async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response.status())
            }
        })
    });
}

criterion_group!(
    benches,
    bench_single_settlement,
    bench_service_span,
    bench_http_round_trip
);
criterion_main!(benches);
