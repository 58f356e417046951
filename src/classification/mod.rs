//! Classification logic for the compliance engine.
//!
//! This module contains the pure rule functions that map documents and
//! carers to traffic-light statuses, aggregate agency-wide statistics,
//! filter documents by expiry window, and map statuses to presentation
//! tokens. Every function here is deterministic and side-effect free: the
//! evaluation date is an explicit argument and no function touches a data
//! source.

mod aggregate;
mod carer_status;
mod document_status;
mod expiry;
mod presentation;

pub use aggregate::agency_stats;
pub use carer_status::{CarerAssessment, assess_carer, carer_status};
pub use document_status::{
    DEFAULT_AMBER_THRESHOLD_DAYS, DocumentAssessment, assess_document, document_status,
};
pub use expiry::{
    DEFAULT_EXPIRING_WINDOW_DAYS, days_until_expiry, expired_documents, expiring_documents,
};
pub use presentation::{score_band, status_glyph, status_label};
