//! Response types for the compliance engine API.
//!
//! This module defines the success payloads specific to the API plus the
//! error response structures and error mapping for the HTTP surface.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classification::DocumentAssessment;
use crate::error::EngineError;
use crate::models::{ComplianceStats, ComplianceStatus};
use crate::store::StoreError;

/// Response body for the `/classify` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// The evaluation date the classification was computed against.
    pub as_of: NaiveDate,
    /// The carer's derived traffic-light status.
    pub status: ComplianceStatus,
    /// The assessment of each submitted document, in input order.
    pub documents: Vec<DocumentAssessment>,
}

/// Response body for the `/dashboard` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// The agency-wide statistics.
    #[serde(flatten)]
    pub stats: ComplianceStats,
    /// The presentation band for the overall score.
    pub score_band: ComplianceStatus,
}

/// Response body for document add/remove operations.
///
/// Carries the carer's re-derived status so callers can update their
/// views without a second request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMutationResponse {
    /// The owning carer.
    pub carer_id: String,
    /// The affected document.
    pub document_id: String,
    /// The carer's status after the mutation.
    pub carer_status: ComplianceStatus,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a template not found error response.
    pub fn template_not_found(id: &str) -> Self {
        Self::with_details(
            "TEMPLATE_NOT_FOUND",
            format!("Document template not found: {}", id),
            format!("The template id '{}' is not in the configured catalogue", id),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a carer not found error response.
    pub fn carer_not_found(carer_id: &str) -> Self {
        Self::with_details(
            "NOT_FOUND",
            format!("Carer not found: {}", carer_id),
            "No carer with this id exists in the store",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::TemplateNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::template_not_found(&id),
            },
            EngineError::InvalidDocument {
                document_id,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DOCUMENT",
                    format!("Invalid document '{}': {}", document_id, message),
                    "The document data contains invalid information",
                ),
            },
            EngineError::InvalidCarer { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_CARER",
                    format!("Invalid carer field '{}': {}", field, message),
                    "The carer data contains invalid information",
                ),
            },
        }
    }
}

impl From<StoreError> for ApiErrorResponse {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("NOT_FOUND", "record not found"),
            },
            StoreError::Conflict => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("CONFLICT", "record already exists"),
            },
            StoreError::Unavailable(message) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORE_ERROR", "Store unavailable", message),
            },
        }
    }
}
