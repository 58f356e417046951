//! HTTP API module for the compliance engine.
//!
//! This module provides the REST API endpoints for classifying carers,
//! aggregating agency statistics, and managing carers and their documents.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AddDocumentRequest, ClassifyRequest, CreateCarerRequest, ExpiringQuery, StatsRequest,
    UpdateCarerRequest,
};
pub use response::{ApiError, ClassifyResponse, DashboardResponse, DocumentMutationResponse};
pub use state::AppState;
