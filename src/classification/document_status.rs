//! Per-document status classification.
//!
//! This module classifies a single document into a traffic-light status
//! from its expiry date and lifecycle status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::ThresholdConfig;
use crate::models::{CarerDocument, ComplianceStatus, DocumentStatus};

use super::expiry::days_until_expiry;

/// Default amber threshold in calendar days.
///
/// A document within this many days of expiry classifies amber; at or
/// below zero days it classifies red.
pub const DEFAULT_AMBER_THRESHOLD_DAYS: i64 = 60;

/// The classification of a single document.
///
/// Captures the derived status together with the day count that produced
/// it, so dashboards can show "expires in N days" next to the colour.
///
/// # Example
///
/// ```
/// use compliance_engine::classification::DocumentAssessment;
/// use compliance_engine::models::ComplianceStatus;
///
/// let assessment = DocumentAssessment {
///     document_id: "doc_001".to_string(),
///     status: ComplianceStatus::Amber,
///     days_until_expiry: 45,
/// };
/// assert_eq!(assessment.status, ComplianceStatus::Amber);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAssessment {
    /// The id of the assessed document.
    pub document_id: String,
    /// The derived traffic-light status.
    pub status: ComplianceStatus,
    /// Whole calendar days until the document expires (negative once past).
    pub days_until_expiry: i64,
}

/// Classifies a single document as of the given date.
///
/// Rules, in order:
/// 1. Red if the document expires today or earlier, or its lifecycle
///    status is [`DocumentStatus::Expired`]. A document expiring today is
///    red, not amber.
/// 2. Amber if it expires within `thresholds.amber_threshold_days` days.
/// 3. Green otherwise.
///
/// Total over well-formed input: always returns one of the three statuses
/// and never fails.
///
/// # Arguments
///
/// * `document` - The document to classify
/// * `as_of` - The evaluation date (normally "today")
/// * `thresholds` - The classification thresholds
///
/// # Examples
///
/// ```
/// use compliance_engine::classification::document_status;
/// use compliance_engine::config::ThresholdConfig;
/// use compliance_engine::models::{CarerDocument, ComplianceStatus, DocumentStatus};
/// use chrono::NaiveDate;
///
/// let thresholds = ThresholdConfig::default();
/// let as_of = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
///
/// let document = CarerDocument {
///     id: "doc_001".to_string(),
///     template_id: "first_aid".to_string(),
///     issued_on: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
///     expires_on: NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
///     status: DocumentStatus::Approved,
///     verified_by: None,
///     notes: None,
/// };
///
/// // 45 days out with a 60-day amber window
/// assert_eq!(document_status(&document, as_of, &thresholds), ComplianceStatus::Amber);
/// ```
pub fn document_status(
    document: &CarerDocument,
    as_of: NaiveDate,
    thresholds: &ThresholdConfig,
) -> ComplianceStatus {
    let days = days_until_expiry(document.expires_on, as_of);

    if days <= 0 || document.status == DocumentStatus::Expired {
        ComplianceStatus::Red
    } else if days <= thresholds.amber_threshold_days {
        ComplianceStatus::Amber
    } else {
        ComplianceStatus::Green
    }
}

/// Classifies a single document and returns the full assessment.
///
/// Same rules as [`document_status`], with the day count attached for
/// presentation.
pub fn assess_document(
    document: &CarerDocument,
    as_of: NaiveDate,
    thresholds: &ThresholdConfig,
) -> DocumentAssessment {
    DocumentAssessment {
        document_id: document.id.clone(),
        status: document_status(document, as_of, thresholds),
        days_until_expiry: days_until_expiry(document.expires_on, as_of),
    }
}
