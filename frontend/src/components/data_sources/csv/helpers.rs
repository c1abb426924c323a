//! Formatting and file checks for the CSV upload dialog. Kept free of DOM
//! access so they can be unit tested off the browser.

use common::upload::{BatchOutcome, BatchReport, BatchSpan};
use num_format::{Locale, ToFormattedString};

/// Accepts a file when either its MIME type or its extension says CSV.
pub fn is_csv_file(name: &str, mime: &str) -> bool {
    mime == "text/csv" || name.to_ascii_lowercase().ends_with(".csv")
}

/// Row label of a batch in the progress list, with 1-based record numbers.
pub fn batch_label(span: &BatchSpan) -> String {
    format!(
        "Uploading {}-{}",
        (span.start + 1).to_formatted_string(&Locale::en),
        (span.end + 1).to_formatted_string(&Locale::en)
    )
}

/// Line shown under the file picker once a file was parsed.
pub fn records_summary(records: usize, dropped: usize) -> String {
    let noun = if records == 1 { "record" } else { "records" };
    let mut line = format!(
        "{} {} ready to upload",
        records.to_formatted_string(&Locale::en),
        noun
    );
    if dropped > 0 {
        line.push_str(&format!(
            ", {} incomplete {} skipped",
            dropped.to_formatted_string(&Locale::en),
            if dropped == 1 { "row" } else { "rows" }
        ));
    }
    line
}

/// Glyph and CSS class for a batch row.
pub fn batch_marker(report: &BatchReport) -> (&'static str, &'static str) {
    match report.outcome {
        BatchOutcome::Completed => ("✓", "batch-done"),
        BatchOutcome::Uploading => ("", "batch-spinner"),
        BatchOutcome::Failed => ("✕", "batch-failed"),
        BatchOutcome::Skipped => ("–", "batch-skipped"),
        BatchOutcome::Pending => ("", "batch-pending"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_files_are_recognized_by_type_or_extension() {
        assert!(is_csv_file("readings.csv", ""));
        assert!(is_csv_file("READINGS.CSV", "application/octet-stream"));
        assert!(is_csv_file("export", "text/csv"));
        assert!(!is_csv_file("readings.xlsx", "application/vnd.ms-excel"));
    }

    #[test]
    fn batch_label_is_one_based() {
        let span = BatchSpan {
            number: 2,
            start: 1000,
            end: 1999,
        };
        assert_eq!(batch_label(&span), "Uploading 1,001-2,000");
    }

    #[test]
    fn summary_mentions_dropped_rows_only_when_present() {
        assert_eq!(records_summary(1, 0), "1 record ready to upload");
        assert_eq!(
            records_summary(2500, 3),
            "2,500 records ready to upload, 3 incomplete rows skipped"
        );
    }

    #[test]
    fn markers_follow_outcome() {
        let span = BatchSpan {
            number: 1,
            start: 0,
            end: 9,
        };
        let report = |outcome| BatchReport {
            span,
            attempts: 1,
            outcome,
            last_error: None,
        };
        assert_eq!(batch_marker(&report(BatchOutcome::Completed)).0, "✓");
        assert_eq!(batch_marker(&report(BatchOutcome::Failed)).1, "batch-failed");
        assert_eq!(batch_marker(&report(BatchOutcome::Uploading)).1, "batch-spinner");
    }
}
