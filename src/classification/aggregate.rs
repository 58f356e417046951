//! Agency-wide statistics aggregation.
//!
//! This module rolls a roster of carers up into the dashboard's
//! [`ComplianceStats`], trusting each carer's pre-computed status field.

use crate::models::{Carer, ComplianceStats, ComplianceStatus};

/// Aggregates compliance statistics over a roster of carers.
///
/// Each carer's `status` field is trusted as already derived by
/// [`assess_carer`](super::assess_carer); this function does not recompute
/// it. Green carers count toward `green_count`; amber carers additionally
/// count as `expiring_soon`; red carers additionally count as `overdue`.
///
/// The overall score is a weighted average: green carers count 100, amber
/// carers 50, red carers 0, divided by the roster size and rounded
/// half-away-from-zero. An empty roster scores 0.
///
/// Pure function, no side effects, no error conditions.
///
/// # Arguments
///
/// * `carers` - The roster, each carrying a derived status
///
/// # Examples
///
/// ```
/// use compliance_engine::classification::agency_stats;
/// use compliance_engine::models::{Carer, ComplianceStatus};
///
/// let make_carer = |id: &str, status| Carer {
///     id: id.to_string(),
///     first_name: "Test".to_string(),
///     last_name: "Carer".to_string(),
///     email: None,
///     phone: None,
///     employee_id: None,
///     status,
/// };
///
/// let carers = vec![
///     make_carer("a", ComplianceStatus::Green),
///     make_carer("b", ComplianceStatus::Green),
///     make_carer("c", ComplianceStatus::Amber),
///     make_carer("d", ComplianceStatus::Red),
/// ];
///
/// let stats = agency_stats(&carers);
/// assert_eq!(stats.overall_score, 63); // round((2*100 + 1*50) / 4) = round(62.5)
/// assert_eq!(stats.expiring_soon, 1);
/// assert_eq!(stats.overdue, 1);
/// ```
pub fn agency_stats(carers: &[Carer]) -> ComplianceStats {
    let mut stats = ComplianceStats::empty();
    stats.total_carers = carers.len() as u32;

    for carer in carers {
        match carer.status {
            ComplianceStatus::Green => {
                stats.green_count += 1;
            }
            ComplianceStatus::Amber => {
                stats.amber_count += 1;
                stats.expiring_soon += 1;
            }
            ComplianceStatus::Red => {
                stats.red_count += 1;
                stats.overdue += 1;
            }
        }
    }

    if stats.total_carers > 0 {
        let weighted = stats.green_count * 100 + stats.amber_count * 50;
        stats.overall_score = (f64::from(weighted) / f64::from(stats.total_carers)).round() as u8;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_carer(id: &str, status: ComplianceStatus) -> Carer {
        Carer {
            id: id.to_string(),
            first_name: "Test".to_string(),
            last_name: "Carer".to_string(),
            email: None,
            phone: None,
            employee_id: None,
            status,
        }
    }

    fn roster(green: u32, amber: u32, red: u32) -> Vec<Carer> {
        let mut carers = Vec::new();
        for i in 0..green {
            carers.push(make_carer(&format!("green_{i}"), ComplianceStatus::Green));
        }
        for i in 0..amber {
            carers.push(make_carer(&format!("amber_{i}"), ComplianceStatus::Amber));
        }
        for i in 0..red {
            carers.push(make_carer(&format!("red_{i}"), ComplianceStatus::Red));
        }
        carers
    }

    // ==========================================================================
    // AG-001: empty roster is all zeros
    // ==========================================================================
    #[test]
    fn test_ag_001_empty_roster() {
        let stats = agency_stats(&[]);
        assert_eq!(stats, ComplianceStats::empty());
    }

    // ==========================================================================
    // AG-002: 2 green, 1 amber, 1 red rounds 62.5 up to 63
    // ==========================================================================
    #[test]
    fn test_ag_002_score_rounds_half_up() {
        let stats = agency_stats(&roster(2, 1, 1));
        assert_eq!(stats.green_count, 2);
        assert_eq!(stats.amber_count, 1);
        assert_eq!(stats.red_count, 1);
        assert_eq!(stats.total_carers, 4);
        assert_eq!(stats.overall_score, 63);
    }

    // ==========================================================================
    // AG-003: all green scores 100
    // ==========================================================================
    #[test]
    fn test_ag_003_all_green_scores_100() {
        let stats = agency_stats(&roster(5, 0, 0));
        assert_eq!(stats.overall_score, 100);
        assert_eq!(stats.expiring_soon, 0);
        assert_eq!(stats.overdue, 0);
    }

    // ==========================================================================
    // AG-004: all red scores 0
    // ==========================================================================
    #[test]
    fn test_ag_004_all_red_scores_0() {
        let stats = agency_stats(&roster(0, 0, 3));
        assert_eq!(stats.overall_score, 0);
        assert_eq!(stats.overdue, 3);
    }

    // ==========================================================================
    // AG-005: all amber scores 50
    // ==========================================================================
    #[test]
    fn test_ag_005_all_amber_scores_50() {
        let stats = agency_stats(&roster(0, 4, 0));
        assert_eq!(stats.overall_score, 50);
        assert_eq!(stats.expiring_soon, 4);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let stats = agency_stats(&roster(3, 2, 4));
        assert_eq!(
            stats.green_count + stats.amber_count + stats.red_count,
            stats.total_carers
        );
    }

    #[test]
    fn test_amber_counts_as_expiring_soon_only() {
        let stats = agency_stats(&roster(0, 2, 1));
        assert_eq!(stats.expiring_soon, 2);
        assert_eq!(stats.overdue, 1);
    }

    #[test]
    fn test_score_improves_as_statuses_improve() {
        let red = agency_stats(&roster(1, 1, 2)).overall_score;
        let amber = agency_stats(&roster(1, 2, 1)).overall_score;
        let green = agency_stats(&roster(2, 1, 1)).overall_score;
        assert!(red <= amber);
        assert!(amber <= green);
    }

    #[test]
    fn test_single_carer_scores() {
        assert_eq!(agency_stats(&roster(1, 0, 0)).overall_score, 100);
        assert_eq!(agency_stats(&roster(0, 1, 0)).overall_score, 50);
        assert_eq!(agency_stats(&roster(0, 0, 1)).overall_score, 0);
    }
}
