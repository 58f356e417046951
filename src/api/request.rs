//! Request types for the compliance engine API.
//!
//! This module defines the JSON request structures for the classification,
//! statistics, and carer management endpoints.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Carer, CarerDocument, ComplianceStatus, DocumentStatus, DocumentTemplate};

/// Request body for the `POST /classify` endpoint.
///
/// Carries a snapshot of one carer's documents. The engine never fetches
/// data itself; callers submit a complete, point-in-time document list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// The evaluation date; defaults to today when omitted.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    /// The carer's documents (possibly empty).
    pub documents: Vec<CarerDocument>,
}

/// Request body for the `POST /stats` endpoint.
///
/// Each carer carries a pre-computed status; the aggregator trusts it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsRequest {
    /// The roster to aggregate.
    pub carers: Vec<Carer>,
}

/// Request body for the `POST /carers` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCarerRequest {
    /// Optional id; a UUID is generated when omitted.
    #[serde(default)]
    pub id: Option<String>,
    /// The carer's first name.
    pub first_name: String,
    /// The carer's last name.
    pub last_name: String,
    /// Contact email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// The agency's internal employee id.
    #[serde(default)]
    pub employee_id: Option<String>,
}

impl CreateCarerRequest {
    /// Builds the carer record to store.
    ///
    /// A new carer has no documents yet, so their status starts red.
    pub fn into_carer(self) -> Carer {
        Carer {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            employee_id: self.employee_id,
            status: ComplianceStatus::Red,
        }
    }
}

/// Request body for the `PUT /carers/:id` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCarerRequest {
    /// The carer's first name.
    pub first_name: String,
    /// The carer's last name.
    pub last_name: String,
    /// Contact email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// The agency's internal employee id.
    #[serde(default)]
    pub employee_id: Option<String>,
}

/// Request body for the `POST /carers/:id/documents` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddDocumentRequest {
    /// Optional id; a UUID is generated when omitted.
    #[serde(default)]
    pub id: Option<String>,
    /// The document template this document satisfies.
    pub template_id: String,
    /// The date the document was issued.
    pub issued_on: NaiveDate,
    /// The expiry date; defaults to `issued_on` plus the template's
    /// validity period when omitted.
    #[serde(default)]
    pub expires_on: Option<NaiveDate>,
    /// The lifecycle status; defaults to pending.
    #[serde(default)]
    pub status: Option<DocumentStatus>,
    /// The id of the user who verified the document, if verified.
    #[serde(default)]
    pub verified_by: Option<String>,
    /// Free-form verification notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl AddDocumentRequest {
    /// Builds the document to store, filling defaults from the template.
    pub fn into_document(self, template: &DocumentTemplate) -> CarerDocument {
        let expires_on = self
            .expires_on
            .unwrap_or(self.issued_on + Duration::days(i64::from(template.validity_days)));
        CarerDocument {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            template_id: self.template_id,
            issued_on: self.issued_on,
            expires_on,
            status: self.status.unwrap_or(DocumentStatus::Pending),
            verified_by: self.verified_by,
            notes: self.notes,
        }
    }
}

/// Query parameters for the `GET /carers/:id/documents/expiring` endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExpiringQuery {
    /// Look-ahead window in days; defaults to the configured window.
    #[serde(default)]
    pub days: Option<i64>,
}
