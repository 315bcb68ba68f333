//! JSON serialization of analysis reports.

use crate::analysis::AnalysisReport;

/// Serialize a report to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `AnalysisReport`).
pub fn to_json(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `AnalysisReport`).
pub fn to_json_pretty(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::run_analysis;
    use crate::data::WeightedSeries;

    fn make_report() -> AnalysisReport {
        let series = WeightedSeries::unweighted(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        run_analysis(&series).unwrap()
    }

    #[test]
    fn test_to_json_contains_sections() {
        let json = to_json(&make_report()).unwrap();
        assert!(json.contains("\"correlation\""));
        assert!(json.contains("\"blocking\""));
        assert!(json.contains("\"histogram\""));
        assert!(json.contains("\"mean\":3.5"));
    }

    #[test]
    fn test_to_json_pretty_has_newlines() {
        let json = to_json_pretty(&make_report()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("effective_count"));
    }

    #[test]
    fn test_report_round_trips() {
        let report = make_report();
        let json = to_json(&report).unwrap();
        let back: AnalysisReport = serde_json::from_str(&json).unwrap();

        assert_eq!(back.correlation.mean, report.correlation.mean);
        assert_eq!(back.correlation.curve, report.correlation.curve);
        assert_eq!(back.blocking.points, report.blocking.points);
        assert_eq!(back.histogram.bins, report.histogram.bins);
        assert_eq!(back.warnings, report.warnings);
    }
}
