//! Aggregate compliance statistics and dashboard snapshots.
//!
//! This module contains the [`ComplianceStats`] aggregate produced by the
//! classification engine and the [`ComplianceSnapshot`] record used to keep
//! score history for the dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Agency-wide compliance statistics derived from a roster of carers.
///
/// Invariant: `green_count + amber_count + red_count == total_carers`.
///
/// # Example
///
/// ```
/// use compliance_engine::models::ComplianceStats;
///
/// let stats = ComplianceStats {
///     overall_score: 63,
///     green_count: 2,
///     amber_count: 1,
///     red_count: 1,
///     total_carers: 4,
///     expiring_soon: 1,
///     overdue: 1,
/// };
/// assert_eq!(
///     stats.green_count + stats.amber_count + stats.red_count,
///     stats.total_carers
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceStats {
    /// Weighted compliance score from 0 to 100.
    pub overall_score: u8,
    /// Number of carers with green status.
    pub green_count: u32,
    /// Number of carers with amber status.
    pub amber_count: u32,
    /// Number of carers with red status.
    pub red_count: u32,
    /// Total number of carers in the roster.
    pub total_carers: u32,
    /// Number of carers with documents due to expire (amber).
    pub expiring_soon: u32,
    /// Number of carers with expired or missing documents (red).
    pub overdue: u32,
}

impl ComplianceStats {
    /// Returns stats for an empty roster: all counts and the score zero.
    pub fn empty() -> Self {
        Self {
            overall_score: 0,
            green_count: 0,
            amber_count: 0,
            red_count: 0,
            total_carers: 0,
            expiring_soon: 0,
            overdue: 0,
        }
    }
}

/// A timestamped record of agency compliance statistics.
///
/// Snapshots are persisted through the repository so the dashboard can
/// chart how the agency's score moves over time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceSnapshot {
    /// Unique identifier for the snapshot.
    pub id: Uuid,
    /// When the snapshot was taken.
    pub taken_at: DateTime<Utc>,
    /// The statistics captured at that moment.
    #[serde(flatten)]
    pub stats: ComplianceStats,
}

impl ComplianceSnapshot {
    /// Creates a snapshot of the given stats taken now.
    pub fn now(stats: ComplianceStats) -> Self {
        Self {
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            stats,
        }
    }
}
