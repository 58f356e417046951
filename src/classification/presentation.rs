//! Presentation mappings for statuses and scores.
//!
//! Pure enum-to-token tables consumed by dashboard and table views.

use crate::config::ScoreBands;
use crate::models::ComplianceStatus;

/// Returns the human-readable label for a status.
///
/// # Examples
///
/// ```
/// use compliance_engine::classification::status_label;
/// use compliance_engine::models::ComplianceStatus;
///
/// assert_eq!(status_label(ComplianceStatus::Amber), "Due to expire");
/// ```
pub fn status_label(status: ComplianceStatus) -> &'static str {
    match status {
        ComplianceStatus::Green => "Compliant",
        ComplianceStatus::Amber => "Due to expire",
        ComplianceStatus::Red => "Action required",
    }
}

/// Returns the glyph shown beside a status.
pub fn status_glyph(status: ComplianceStatus) -> &'static str {
    match status {
        ComplianceStatus::Green => "✓",
        ComplianceStatus::Amber => "⚠",
        ComplianceStatus::Red => "✕",
    }
}

/// Maps an overall score to its presentation band.
///
/// Scores at or above `green_min` band green, at or above `amber_min`
/// band amber, and anything lower bands red.
///
/// # Examples
///
/// ```
/// use compliance_engine::classification::score_band;
/// use compliance_engine::config::ScoreBands;
/// use compliance_engine::models::ComplianceStatus;
///
/// let bands = ScoreBands::default();
/// assert_eq!(score_band(92, &bands), ComplianceStatus::Green);
/// assert_eq!(score_band(71, &bands), ComplianceStatus::Amber);
/// assert_eq!(score_band(40, &bands), ComplianceStatus::Red);
/// ```
pub fn score_band(score: u8, bands: &ScoreBands) -> ComplianceStatus {
    if score >= bands.green_min {
        ComplianceStatus::Green
    } else if score >= bands.amber_min {
        ComplianceStatus::Amber
    } else {
        ComplianceStatus::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(ComplianceStatus::Green), "Compliant");
        assert_eq!(status_label(ComplianceStatus::Amber), "Due to expire");
        assert_eq!(status_label(ComplianceStatus::Red), "Action required");
    }

    #[test]
    fn test_status_glyphs() {
        assert_eq!(status_glyph(ComplianceStatus::Green), "✓");
        assert_eq!(status_glyph(ComplianceStatus::Amber), "⚠");
        assert_eq!(status_glyph(ComplianceStatus::Red), "✕");
    }

    #[test]
    fn test_score_band_boundaries() {
        let bands = ScoreBands::default();
        assert_eq!(score_band(100, &bands), ComplianceStatus::Green);
        assert_eq!(score_band(80, &bands), ComplianceStatus::Green);
        assert_eq!(score_band(79, &bands), ComplianceStatus::Amber);
        assert_eq!(score_band(60, &bands), ComplianceStatus::Amber);
        assert_eq!(score_band(59, &bands), ComplianceStatus::Red);
        assert_eq!(score_band(0, &bands), ComplianceStatus::Red);
    }

    #[test]
    fn test_score_band_custom_bands() {
        let bands = ScoreBands {
            green_min: 90,
            amber_min: 50,
        };
        assert_eq!(score_band(85, &bands), ComplianceStatus::Amber);
        assert_eq!(score_band(49, &bands), ComplianceStatus::Red);
    }
}
