//! Status enums for carers and their documents.
//!
//! This module defines the traffic-light compliance status derived by the
//! engine and the externally-managed document lifecycle status.

use serde::{Deserialize, Serialize};

/// The traffic-light compliance status of a carer or document.
///
/// The variants are ordered by severity: `Green < Amber < Red`. This makes
/// "worst status wins" aggregation a plain `Iterator::max` over document
/// statuses.
///
/// # Example
///
/// ```
/// use compliance_engine::models::ComplianceStatus;
///
/// assert!(ComplianceStatus::Red > ComplianceStatus::Amber);
/// assert!(ComplianceStatus::Amber > ComplianceStatus::Green);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// All documents valid and outside the amber window.
    Green,
    /// At least one document is due to expire within the amber window.
    Amber,
    /// At least one document is expired or missing, or the carer has no documents.
    Red,
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceStatus::Green => write!(f, "green"),
            ComplianceStatus::Amber => write!(f, "amber"),
            ComplianceStatus::Red => write!(f, "red"),
        }
    }
}

/// The lifecycle status of a carer document.
///
/// This status is set by an external verification workflow and is
/// independent of the expiry-based classification: a document may be
/// `Approved` yet classified red because its expiry date has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Uploaded but not yet verified.
    Pending,
    /// Verified and accepted.
    Approved,
    /// Marked expired by the verification workflow.
    Expired,
    /// Verified and rejected.
    Rejected,
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentStatus::Pending => write!(f, "pending"),
            DocumentStatus::Approved => write!(f, "approved"),
            DocumentStatus::Expired => write!(f, "expired"),
            DocumentStatus::Rejected => write!(f, "rejected"),
        }
    }
}
