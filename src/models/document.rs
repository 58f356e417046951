//! Carer document and document template models.
//!
//! This module defines the CarerDocument struct tracked per carer and the
//! DocumentTemplate catalogue entry it references.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::DocumentStatus;

/// Represents a compliance document held by a carer.
///
/// A document belongs to exactly one carer; ownership is structural (the
/// store keeps documents inside the carer's record). The lifecycle
/// `status` is set by an external verification workflow and is independent
/// of the expiry-based classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarerDocument {
    /// Unique identifier for the document.
    pub id: String,
    /// The document template this document satisfies (e.g., "dbs_check").
    pub template_id: String,
    /// The date the document was issued.
    pub issued_on: NaiveDate,
    /// The date the document expires.
    pub expires_on: NaiveDate,
    /// The lifecycle status set by the verification workflow.
    pub status: DocumentStatus,
    /// The id of the user who verified the document, if verified.
    #[serde(default)]
    pub verified_by: Option<String>,
    /// Free-form verification notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl CarerDocument {
    /// Validates the document's internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDocument`] if `expires_on` is earlier
    /// than `issued_on`.
    ///
    /// # Examples
    ///
    /// ```
    /// use compliance_engine::models::{CarerDocument, DocumentStatus};
    /// use chrono::NaiveDate;
    ///
    /// let document = CarerDocument {
    ///     id: "doc_001".to_string(),
    ///     template_id: "dbs_check".to_string(),
    ///     issued_on: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
    ///     expires_on: NaiveDate::from_ymd_opt(2029, 1, 10).unwrap(),
    ///     status: DocumentStatus::Approved,
    ///     verified_by: None,
    ///     notes: None,
    /// };
    /// assert!(document.validate().is_ok());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.expires_on < self.issued_on {
            return Err(EngineError::InvalidDocument {
                document_id: self.id.clone(),
                message: format!(
                    "expires on {} before it was issued on {}",
                    self.expires_on, self.issued_on
                ),
            });
        }
        Ok(())
    }
}

/// A catalogue entry describing a kind of compliance document.
///
/// Templates are loaded from the rules configuration and referenced by
/// [`CarerDocument::template_id`]. `validity_days` is used to default a
/// new document's expiry date from its issue date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTemplate {
    /// The human-readable name of the document kind.
    pub name: String,
    /// The compliance category (e.g., "background", "training").
    pub category: String,
    /// A description of what the document certifies.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether every carer must hold a valid document of this kind.
    pub is_required: bool,
    /// How long a newly issued document of this kind remains valid.
    pub validity_days: u32,
}
