//! Carer model.
//!
//! This module defines the Carer struct representing a care worker whose
//! compliance documents are tracked by the engine.

use serde::{Deserialize, Serialize};

use super::ComplianceStatus;

/// Represents a care worker tracked for compliance.
///
/// The `status` field is derived from the carer's documents and is never
/// authoritative: it is recomputed by the classification engine on every
/// read and refreshed after every document mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carer {
    /// Unique identifier for the carer.
    pub id: String,
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
    /// The derived traffic-light compliance status.
    pub status: ComplianceStatus,
}

impl Carer {
    /// Returns the carer's full name.
    ///
    /// # Examples
    ///
    /// ```
    /// use compliance_engine::models::{Carer, ComplianceStatus};
    ///
    /// let carer = Carer {
    ///     id: "carer_001".to_string(),
    ///     first_name: "Amara".to_string(),
    ///     last_name: "Okafor".to_string(),
    ///     email: None,
    ///     phone: None,
    ///     employee_id: None,
    ///     status: ComplianceStatus::Red,
    /// };
    /// assert_eq!(carer.full_name(), "Amara Okafor");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
