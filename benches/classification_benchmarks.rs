//! Performance benchmarks for the compliance engine.
//!
//! This benchmark suite verifies that classification stays cheap enough to
//! re-derive on every read:
//! - Single carer classification: < 10μs mean
//! - Roster aggregation of 1000 carers: < 1ms mean
//! - Full /classify round-trip through the router: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use compliance_engine::api::{AppState, create_router};
use compliance_engine::classification::{agency_stats, assess_carer};
use compliance_engine::config::{ComplianceRules, ConfigLoader, ScoreBands, ThresholdConfig};
use compliance_engine::events::NoopNotifier;
use compliance_engine::models::{Carer, CarerDocument, ComplianceStatus, DocumentStatus};
use compliance_engine::store::MemoryStore;

use axum::{body::Body, http::Request};
use chrono::{Duration, NaiveDate};
use tower::ServiceExt;

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}

/// Creates a document expiring the given number of days after the
/// benchmark's fixed evaluation date.
fn create_document(id: usize, expires_in_days: i64) -> CarerDocument {
    CarerDocument {
        id: format!("doc_{id}"),
        template_id: "dbs_check".to_string(),
        issued_on: as_of() - Duration::days(365),
        expires_on: as_of() + Duration::days(expires_in_days),
        status: DocumentStatus::Approved,
        verified_by: None,
        notes: None,
    }
}

/// Creates a roster cycling through the three statuses.
fn create_roster(count: usize) -> Vec<Carer> {
    (0..count)
        .map(|i| Carer {
            id: format!("carer_{i}"),
            first_name: "Bench".to_string(),
            last_name: "Carer".to_string(),
            email: None,
            phone: None,
            employee_id: None,
            status: match i % 3 {
                0 => ComplianceStatus::Green,
                1 => ComplianceStatus::Amber,
                _ => ComplianceStatus::Red,
            },
        })
        .collect()
}

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/compliance").expect("Failed to load config");
    AppState::new(config, Arc::new(MemoryStore::new()), Arc::new(NoopNotifier))
}

fn bench_assess_carer(c: &mut Criterion) {
    let thresholds = ThresholdConfig::default();
    let mut group = c.benchmark_group("assess_carer");

    for document_count in [1usize, 10, 50] {
        let documents: Vec<CarerDocument> = (0..document_count)
            .map(|i| create_document(i, (i as i64 * 37) % 400 - 50))
            .collect();

        group.throughput(Throughput::Elements(document_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(document_count),
            &documents,
            |b, documents| {
                b.iter(|| assess_carer(black_box(documents), as_of(), &thresholds));
            },
        );
    }

    group.finish();
}

fn bench_agency_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("agency_stats");

    for roster_size in [10usize, 100, 1000] {
        let carers = create_roster(roster_size);

        group.throughput(Throughput::Elements(roster_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(roster_size),
            &carers,
            |b, carers| {
                b.iter(|| agency_stats(black_box(carers)));
            },
        );
    }

    group.finish();
}

fn bench_classify_endpoint(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    let state = create_test_state();

    let documents: Vec<serde_json::Value> = (0..10)
        .map(|i| {
            serde_json::json!({
                "id": format!("doc_{i}"),
                "template_id": "dbs_check",
                "issued_on": "2025-03-01",
                "expires_on": "2026-09-01",
                "status": "approved"
            })
        })
        .collect();
    let body = serde_json::json!({
        "as_of": "2026-03-01",
        "documents": documents
    })
    .to_string();

    c.bench_function("classify_endpoint_10_documents", |b| {
        b.iter(|| {
            let router = create_router(state.clone());
            let body = body.clone();
            runtime.block_on(async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/classify")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response.status())
            })
        });
    });
}

fn bench_rules_without_disk(c: &mut Criterion) {
    // Classification against programmatic rules, isolating engine cost
    // from config loading
    let loader = ConfigLoader::from_rules(ComplianceRules::new(
        ThresholdConfig::default(),
        ScoreBands::default(),
        std::collections::HashMap::new(),
    ));
    let documents: Vec<CarerDocument> = (0..10).map(|i| create_document(i, 100)).collect();

    c.bench_function("assess_carer_with_loaded_rules", |b| {
        b.iter(|| assess_carer(black_box(&documents), as_of(), loader.thresholds()));
    });
}

criterion_group!(
    benches,
    bench_assess_carer,
    bench_agency_stats,
    bench_classify_endpoint,
    bench_rules_without_disk
);
criterion_main!(benches);
