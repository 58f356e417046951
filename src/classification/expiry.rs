//! Expiry date arithmetic and document filters.
//!
//! This module provides the calendar-day expiry calculation shared by the
//! classification rules, along with the "expiring soon" and "expired"
//! document filters used by reminder views.

use chrono::{Duration, NaiveDate};

use crate::models::{CarerDocument, DocumentStatus};

/// Default window for the "expiring soon" filter, in calendar days.
pub const DEFAULT_EXPIRING_WINDOW_DAYS: i64 = 60;

/// Returns the number of whole calendar days until a document expires.
///
/// Both dates are plain calendar dates, so the result has day granularity
/// by construction; time of day and timezone offsets cannot introduce
/// off-by-one errors. The result is negative once the expiry date has
/// passed and zero on the expiry day itself.
///
/// # Arguments
///
/// * `expires_on` - The document's expiry date
/// * `as_of` - The evaluation date (normally "today")
///
/// # Examples
///
/// ```
/// use compliance_engine::classification::days_until_expiry;
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
///
/// let next_month = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
/// assert_eq!(days_until_expiry(next_month, as_of), 30);
///
/// assert_eq!(days_until_expiry(as_of, as_of), 0);
///
/// let yesterday = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
/// assert_eq!(days_until_expiry(yesterday, as_of), -1);
/// ```
pub fn days_until_expiry(expires_on: NaiveDate, as_of: NaiveDate) -> i64 {
    (expires_on - as_of).num_days()
}

/// Filters documents expiring within the given window.
///
/// A document is "expiring" when its expiry date lies between `as_of` and
/// `as_of + window_days`, both inclusive. Documents that have already
/// expired are not included; they belong to [`expired_documents`].
///
/// # Arguments
///
/// * `documents` - The documents to filter
/// * `as_of` - The evaluation date (normally "today")
/// * `window_days` - The look-ahead window in calendar days
///
/// # Examples
///
/// ```
/// use compliance_engine::classification::expiring_documents;
/// use compliance_engine::models::{CarerDocument, DocumentStatus};
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
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
/// let expiring = expiring_documents(std::slice::from_ref(&document), as_of, 60);
/// assert_eq!(expiring.len(), 1);
///
/// let expiring = expiring_documents(std::slice::from_ref(&document), as_of, 30);
/// assert!(expiring.is_empty());
/// ```
pub fn expiring_documents<'a>(
    documents: &'a [CarerDocument],
    as_of: NaiveDate,
    window_days: i64,
) -> Vec<&'a CarerDocument> {
    let window_end = as_of + Duration::days(window_days);
    documents
        .iter()
        .filter(|doc| doc.expires_on >= as_of && doc.expires_on <= window_end)
        .collect()
}

/// Filters documents that have expired.
///
/// A document is "expired" when its expiry date is strictly before `as_of`
/// or its lifecycle status is [`DocumentStatus::Expired`]. Note the
/// asymmetry with the classification rule: a document expiring today is
/// classified red but does not appear in this filter until tomorrow.
///
/// # Arguments
///
/// * `documents` - The documents to filter
/// * `as_of` - The evaluation date (normally "today")
pub fn expired_documents<'a>(
    documents: &'a [CarerDocument],
    as_of: NaiveDate,
) -> Vec<&'a CarerDocument> {
    documents
        .iter()
        .filter(|doc| doc.expires_on < as_of || doc.status == DocumentStatus::Expired)
        .collect()
}
