//! Display module for rendering classification reports.
pub mod report;
pub use report::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AddressInput, InputSource};

    #[test]
    fn test_report_round_trip_through_formatter() {
        let formatter = ReportFormatter::new();
        let inputs = vec![AddressInput::parse(InputSource::Stdin, "8.8.8.8".to_string())];
        let report = formatter.format(&inputs);

        assert!(report.summary.all_public());
        assert!(!formatter.render_text(&report).is_empty());
    }
}
