//! Per-carer status classification.
//!
//! This module derives a carer's traffic-light status from the statuses of
//! their documents. This is the single place carer status is computed;
//! every stored copy is a cache of this derivation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::ThresholdConfig;
use crate::models::{CarerDocument, ComplianceStatus};

use super::document_status::{DocumentAssessment, assess_document};

/// The classification of a carer with the per-document breakdown.
///
/// # Example
///
/// ```
/// use compliance_engine::classification::CarerAssessment;
/// use compliance_engine::models::ComplianceStatus;
///
/// let assessment = CarerAssessment {
///     status: ComplianceStatus::Red,
///     documents: vec![],
/// };
/// assert_eq!(assessment.status, ComplianceStatus::Red);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarerAssessment {
    /// The carer's derived traffic-light status.
    pub status: ComplianceStatus,
    /// The assessment of each document, in input order.
    pub documents: Vec<DocumentAssessment>,
}

/// Derives a carer's status from their documents as of the given date.
///
/// A carer with no documents is red: missing required documents is itself
/// a compliance failure. Otherwise the carer's status is the most severe
/// status among their documents (red > amber > green), so a single red
/// document drags the whole carer to red.
///
/// Total over well-formed input: always returns one of the three statuses
/// and never fails.
///
/// # Arguments
///
/// * `documents` - The carer's documents (possibly empty)
/// * `as_of` - The evaluation date (normally "today")
/// * `thresholds` - The classification thresholds
///
/// # Examples
///
/// ```
/// use compliance_engine::classification::carer_status;
/// use compliance_engine::config::ThresholdConfig;
/// use compliance_engine::models::ComplianceStatus;
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
///
/// // No documents at all is red
/// assert_eq!(
///     carer_status(&[], as_of, &ThresholdConfig::default()),
///     ComplianceStatus::Red
/// );
/// ```
pub fn carer_status(
    documents: &[CarerDocument],
    as_of: NaiveDate,
    thresholds: &ThresholdConfig,
) -> ComplianceStatus {
    documents
        .iter()
        .map(|doc| super::document_status(doc, as_of, thresholds))
        .max()
        .unwrap_or(ComplianceStatus::Red)
}

/// Derives a carer's status and the per-document breakdown.
///
/// Same rules as [`carer_status`], returning each document's assessment
/// alongside the aggregate for dashboard display.
pub fn assess_carer(
    documents: &[CarerDocument],
    as_of: NaiveDate,
    thresholds: &ThresholdConfig,
) -> CarerAssessment {
    let assessments: Vec<DocumentAssessment> = documents
        .iter()
        .map(|doc| assess_document(doc, as_of, thresholds))
        .collect();

    let status = assessments
        .iter()
        .map(|a| a.status)
        .max()
        .unwrap_or(ComplianceStatus::Red);

    CarerAssessment {
        status,
        documents: assessments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentStatus;
    use chrono::Duration;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn as_of() -> NaiveDate {
        make_date("2026-03-01")
    }

    fn make_document(id: &str, expires_in_days: i64, status: DocumentStatus) -> CarerDocument {
        CarerDocument {
            id: id.to_string(),
            template_id: "dbs_check".to_string(),
            issued_on: make_date("2025-01-01"),
            expires_on: as_of() + Duration::days(expires_in_days),
            status,
            verified_by: None,
            notes: None,
        }
    }

    // ==========================================================================
    // CS-001: zero documents is red
    // ==========================================================================
    #[test]
    fn test_cs_001_no_documents_is_red() {
        assert_eq!(
            carer_status(&[], as_of(), &ThresholdConfig::default()),
            ComplianceStatus::Red
        );
    }

    // ==========================================================================
    // CS-002: one document expiring in 45 days is amber
    // ==========================================================================
    #[test]
    fn test_cs_002_single_amber_document() {
        let documents = vec![make_document("doc_001", 45, DocumentStatus::Approved)];
        assert_eq!(
            carer_status(&documents, as_of(), &ThresholdConfig::default()),
            ComplianceStatus::Amber
        );
    }

    // ==========================================================================
    // CS-003: one approved document that expired yesterday is red
    // ==========================================================================
    #[test]
    fn test_cs_003_expired_yesterday_is_red() {
        let documents = vec![make_document("doc_001", -1, DocumentStatus::Approved)];
        assert_eq!(
            carer_status(&documents, as_of(), &ThresholdConfig::default()),
            ComplianceStatus::Red
        );
    }

    // ==========================================================================
    // CS-004: green + amber + red documents aggregate to red
    // ==========================================================================
    #[test]
    fn test_cs_004_worst_status_wins() {
        let documents = vec![
            make_document("green", 120, DocumentStatus::Approved),
            make_document("amber", 45, DocumentStatus::Approved),
            make_document("red", -10, DocumentStatus::Approved),
        ];
        assert_eq!(
            carer_status(&documents, as_of(), &ThresholdConfig::default()),
            ComplianceStatus::Red
        );
    }

    // ==========================================================================
    // CS-005: green + amber aggregates to amber
    // ==========================================================================
    #[test]
    fn test_cs_005_amber_beats_green() {
        let documents = vec![
            make_document("green", 120, DocumentStatus::Approved),
            make_document("amber", 45, DocumentStatus::Approved),
        ];
        assert_eq!(
            carer_status(&documents, as_of(), &ThresholdConfig::default()),
            ComplianceStatus::Amber
        );
    }

    // ==========================================================================
    // CS-006: all green documents aggregate to green
    // ==========================================================================
    #[test]
    fn test_cs_006_all_green() {
        let documents = vec![
            make_document("a", 120, DocumentStatus::Approved),
            make_document("b", 365, DocumentStatus::Pending),
        ];
        assert_eq!(
            carer_status(&documents, as_of(), &ThresholdConfig::default()),
            ComplianceStatus::Green
        );
    }

    #[test]
    fn test_document_order_does_not_matter() {
        let forward = vec![
            make_document("a", 120, DocumentStatus::Approved),
            make_document("b", 45, DocumentStatus::Approved),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let thresholds = ThresholdConfig::default();
        assert_eq!(
            carer_status(&forward, as_of(), &thresholds),
            carer_status(&reversed, as_of(), &thresholds)
        );
    }

    #[test]
    fn test_classification_is_idempotent() {
        let documents = vec![make_document("doc_001", 45, DocumentStatus::Approved)];
        let thresholds = ThresholdConfig::default();
        let first = assess_carer(&documents, as_of(), &thresholds);
        let second = assess_carer(&documents, as_of(), &thresholds);
        assert_eq!(first, second);
    }

    #[test]
    fn test_assess_carer_empty_documents() {
        let assessment = assess_carer(&[], as_of(), &ThresholdConfig::default());
        assert_eq!(assessment.status, ComplianceStatus::Red);
        assert!(assessment.documents.is_empty());
    }

    #[test]
    fn test_assess_carer_breakdown_in_input_order() {
        let documents = vec![
            make_document("first", -5, DocumentStatus::Approved),
            make_document("second", 45, DocumentStatus::Approved),
            make_document("third", 120, DocumentStatus::Approved),
        ];
        let assessment = assess_carer(&documents, as_of(), &ThresholdConfig::default());

        assert_eq!(assessment.status, ComplianceStatus::Red);
        assert_eq!(assessment.documents.len(), 3);
        assert_eq!(assessment.documents[0].document_id, "first");
        assert_eq!(assessment.documents[0].status, ComplianceStatus::Red);
        assert_eq!(assessment.documents[1].status, ComplianceStatus::Amber);
        assert_eq!(assessment.documents[2].status, ComplianceStatus::Green);
    }

    #[test]
    fn test_assessment_serialization() {
        let documents = vec![make_document("doc_001", 45, DocumentStatus::Approved)];
        let assessment = assess_carer(&documents, as_of(), &ThresholdConfig::default());

        let json = serde_json::to_string(&assessment).unwrap();
        assert!(json.contains("\"status\":\"amber\""));

        let deserialized: CarerAssessment = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, assessment);
    }
}
