//! HTTP request handlers for the compliance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::classification::{agency_stats, assess_carer, expiring_documents, score_band};
use crate::error::EngineError;
use crate::events::ComplianceEvent;
use crate::models::{Carer, CarerDocument, ComplianceSnapshot, ComplianceStatus};
use crate::store::CarerRecord;

use super::request::{
    AddDocumentRequest, ClassifyRequest, CreateCarerRequest, ExpiringQuery, StatsRequest,
    UpdateCarerRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, ClassifyResponse, DashboardResponse, DocumentMutationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(classify_handler))
        .route("/stats", post(stats_handler))
        .route("/carers", get(list_carers_handler).post(create_carer_handler))
        .route(
            "/carers/:id",
            get(get_carer_handler)
                .put(update_carer_handler)
                .delete(delete_carer_handler),
        )
        .route("/carers/:id/documents", post(add_document_handler))
        .route(
            "/carers/:id/documents/:document_id",
            axum::routing::delete(delete_document_handler),
        )
        .route(
            "/carers/:id/documents/expiring",
            get(expiring_documents_handler),
        )
        .route("/dashboard", get(dashboard_handler))
        .route(
            "/dashboard/snapshots",
            get(list_snapshots_handler).post(take_snapshot_handler),
        )
        .with_state(state)
}

/// The evaluation date for requests that do not supply one.
fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Maps a JSON extraction failure to a typed API error.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Unwraps a JSON payload or produces the 400 response.
fn require_json<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            Err((StatusCode::BAD_REQUEST, Json(error)).into_response())
        }
    }
}

/// Derives a record's fresh status and returns the carer with it applied.
fn carer_with_fresh_status(state: &AppState, record: &CarerRecord, as_of: NaiveDate) -> Carer {
    let assessment = assess_carer(&record.documents, as_of, state.config().thresholds());
    let mut carer = record.carer.clone();
    carer.status = assessment.status;
    carer
}

/// Re-derives and persists a carer's status after a document mutation.
fn refresh_carer_status(
    state: &AppState,
    carer_id: &str,
) -> Result<ComplianceStatus, ApiErrorResponse> {
    let record = state
        .store()
        .get_carer(carer_id)?
        .ok_or(crate::store::StoreError::NotFound)?;
    let status = crate::classification::carer_status(
        &record.documents,
        today(),
        state.config().thresholds(),
    );
    state.store().set_carer_status(carer_id, status)?;
    Ok(status)
}

/// Handler for POST /classify.
///
/// Classifies a submitted document snapshot. Pure compute: the store is
/// never touched.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing classification request");

    let request = match require_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    for document in &request.documents {
        if let Err(err) = document.validate() {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid document");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    }

    let as_of = request.as_of.unwrap_or_else(today);
    let assessment = assess_carer(&request.documents, as_of, state.config().thresholds());

    info!(
        correlation_id = %correlation_id,
        documents = request.documents.len(),
        status = %assessment.status,
        "Classification completed"
    );

    Json(ClassifyResponse {
        as_of,
        status: assessment.status,
        documents: assessment.documents,
    })
    .into_response()
}

/// Handler for POST /stats.
///
/// Aggregates a submitted roster. Each carer's status is trusted as
/// already derived.
async fn stats_handler(
    State(_state): State<AppState>,
    payload: Result<Json<StatsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing stats request");

    let request = match require_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let stats = agency_stats(&request.carers);

    info!(
        correlation_id = %correlation_id,
        total_carers = stats.total_carers,
        overall_score = stats.overall_score,
        "Stats aggregation completed"
    );

    Json(stats).into_response()
}

/// Handler for GET /carers.
async fn list_carers_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    let records = match state.store().list_carers() {
        Ok(records) => records,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Store error");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let as_of = today();
    let carers: Vec<Carer> = records
        .iter()
        .map(|record| carer_with_fresh_status(&state, record, as_of))
        .collect();

    info!(correlation_id = %correlation_id, carers = carers.len(), "Listed carers");
    Json(carers).into_response()
}

/// Handler for POST /carers.
async fn create_carer_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateCarerRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing carer creation");

    let request = match require_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    if request.first_name.trim().is_empty() {
        let api_error: ApiErrorResponse = EngineError::InvalidCarer {
            field: "first_name".to_string(),
            message: "must not be empty".to_string(),
        }
        .into();
        return api_error.into_response();
    }
    if request.last_name.trim().is_empty() {
        let api_error: ApiErrorResponse = EngineError::InvalidCarer {
            field: "last_name".to_string(),
            message: "must not be empty".to_string(),
        }
        .into();
        return api_error.into_response();
    }

    let carer = request.into_carer();
    if let Err(err) = state.store().insert_carer(carer.clone()) {
        warn!(correlation_id = %correlation_id, carer_id = %carer.id, error = %err, "Carer creation failed");
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    state.notifier().notify(ComplianceEvent::CarerUpserted {
        carer_id: carer.id.clone(),
    });

    info!(correlation_id = %correlation_id, carer_id = %carer.id, "Carer created");
    (StatusCode::CREATED, Json(carer)).into_response()
}

/// Handler for GET /carers/:id.
async fn get_carer_handler(
    State(state): State<AppState>,
    Path(carer_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let record = match state.store().get_carer(&carer_id) {
        Ok(Some(record)) => record,
        Ok(None) => {
            return (StatusCode::NOT_FOUND, Json(ApiError::carer_not_found(&carer_id)))
                .into_response();
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Store error");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let carer = carer_with_fresh_status(&state, &record, today());
    Json(CarerRecord {
        carer,
        documents: record.documents,
    })
    .into_response()
}

/// Handler for PUT /carers/:id.
async fn update_carer_handler(
    State(state): State<AppState>,
    Path(carer_id): Path<String>,
    payload: Result<Json<UpdateCarerRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, carer_id = %carer_id, "Processing carer update");

    let request = match require_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let record = match state.store().get_carer(&carer_id) {
        Ok(Some(record)) => record,
        Ok(None) => {
            return (StatusCode::NOT_FOUND, Json(ApiError::carer_not_found(&carer_id)))
                .into_response();
        }
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    // Identity changes do not affect the derived status
    let carer = Carer {
        id: carer_id.clone(),
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
        phone: request.phone,
        employee_id: request.employee_id,
        status: record.carer.status,
    };

    if let Err(err) = state.store().update_carer(carer.clone()) {
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    state.notifier().notify(ComplianceEvent::CarerUpserted {
        carer_id: carer_id.clone(),
    });

    info!(correlation_id = %correlation_id, carer_id = %carer_id, "Carer updated");
    Json(carer).into_response()
}

/// Handler for DELETE /carers/:id.
async fn delete_carer_handler(
    State(state): State<AppState>,
    Path(carer_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    if let Err(err) = state.store().delete_carer(&carer_id) {
        warn!(correlation_id = %correlation_id, carer_id = %carer_id, error = %err, "Carer deletion failed");
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    state.notifier().notify(ComplianceEvent::CarerDeleted {
        carer_id: carer_id.clone(),
    });

    info!(correlation_id = %correlation_id, carer_id = %carer_id, "Carer deleted");
    StatusCode::NO_CONTENT.into_response()
}

/// Handler for POST /carers/:id/documents.
///
/// Validates the document against the template catalogue, stores it, and
/// re-derives the carer's status in the same request.
async fn add_document_handler(
    State(state): State<AppState>,
    Path(carer_id): Path<String>,
    payload: Result<Json<AddDocumentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, carer_id = %carer_id, "Processing document upload");

    let request = match require_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let template = match state.config().get_template(&request.template_id) {
        Ok(template) => template.clone(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                template_id = %request.template_id,
                "Template not found"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let document = request.into_document(&template);
    if let Err(err) = document.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid document");
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    if let Err(err) = state.store().upsert_document(&carer_id, document.clone()) {
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let carer_status = match refresh_carer_status(&state, &carer_id) {
        Ok(status) => status,
        Err(api_error) => return api_error.into_response(),
    };

    state.notifier().notify(ComplianceEvent::DocumentUpserted {
        carer_id: carer_id.clone(),
        document_id: document.id.clone(),
    });

    info!(
        correlation_id = %correlation_id,
        carer_id = %carer_id,
        document_id = %document.id,
        carer_status = %carer_status,
        "Document stored"
    );

    (
        StatusCode::CREATED,
        Json(DocumentMutationResponse {
            carer_id,
            document_id: document.id,
            carer_status,
        }),
    )
        .into_response()
}

/// Handler for DELETE /carers/:id/documents/:document_id.
async fn delete_document_handler(
    State(state): State<AppState>,
    Path((carer_id, document_id)): Path<(String, String)>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    if let Err(err) = state.store().delete_document(&carer_id, &document_id) {
        warn!(
            correlation_id = %correlation_id,
            carer_id = %carer_id,
            document_id = %document_id,
            error = %err,
            "Document deletion failed"
        );
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let carer_status = match refresh_carer_status(&state, &carer_id) {
        Ok(status) => status,
        Err(api_error) => return api_error.into_response(),
    };

    state.notifier().notify(ComplianceEvent::DocumentDeleted {
        carer_id: carer_id.clone(),
        document_id: document_id.clone(),
    });

    info!(
        correlation_id = %correlation_id,
        carer_id = %carer_id,
        document_id = %document_id,
        carer_status = %carer_status,
        "Document deleted"
    );

    Json(DocumentMutationResponse {
        carer_id,
        document_id,
        carer_status,
    })
    .into_response()
}

/// Handler for GET /carers/:id/documents/expiring.
async fn expiring_documents_handler(
    State(state): State<AppState>,
    Path(carer_id): Path<String>,
    Query(query): Query<ExpiringQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let record = match state.store().get_carer(&carer_id) {
        Ok(Some(record)) => record,
        Ok(None) => {
            return (StatusCode::NOT_FOUND, Json(ApiError::carer_not_found(&carer_id)))
                .into_response();
        }
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let window_days = query
        .days
        .unwrap_or(state.config().thresholds().expiring_window_days);
    let expiring: Vec<CarerDocument> = expiring_documents(&record.documents, today(), window_days)
        .into_iter()
        .cloned()
        .collect();

    info!(
        correlation_id = %correlation_id,
        carer_id = %carer_id,
        window_days,
        expiring = expiring.len(),
        "Expiring documents listed"
    );

    Json(expiring).into_response()
}

/// Computes fresh agency stats over the whole store.
fn compute_dashboard(state: &AppState) -> Result<DashboardResponse, ApiErrorResponse> {
    let records = state.store().list_carers()?;
    let as_of = today();
    let carers: Vec<Carer> = records
        .iter()
        .map(|record| carer_with_fresh_status(state, record, as_of))
        .collect();

    let stats = agency_stats(&carers);
    let band = score_band(stats.overall_score, state.config().score_bands());
    Ok(DashboardResponse {
        stats,
        score_band: band,
    })
}

/// Handler for GET /dashboard.
async fn dashboard_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    match compute_dashboard(&state) {
        Ok(dashboard) => {
            info!(
                correlation_id = %correlation_id,
                total_carers = dashboard.stats.total_carers,
                overall_score = dashboard.stats.overall_score,
                "Dashboard computed"
            );
            Json(dashboard).into_response()
        }
        Err(api_error) => api_error.into_response(),
    }
}

/// Handler for POST /dashboard/snapshots.
async fn take_snapshot_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    let dashboard = match compute_dashboard(&state) {
        Ok(dashboard) => dashboard,
        Err(api_error) => return api_error.into_response(),
    };

    let snapshot = ComplianceSnapshot::now(dashboard.stats);
    if let Err(err) = state.store().record_snapshot(snapshot.clone()) {
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    info!(
        correlation_id = %correlation_id,
        snapshot_id = %snapshot.id,
        overall_score = snapshot.stats.overall_score,
        "Snapshot recorded"
    );

    (StatusCode::CREATED, Json(snapshot)).into_response()
}

/// Handler for GET /dashboard/snapshots.
async fn list_snapshots_handler(State(state): State<AppState>) -> Response {
    match state.store().snapshots() {
        Ok(snapshots) => Json(snapshots).into_response(),
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
