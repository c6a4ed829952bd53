//! End-to-end summarisation pipeline: load, aggregate, write.

use std::path::Path;
use std::time::Instant;

use hr_core::error::Result;
use hr_core::models::SummaryOrder;
use tracing::info;

use crate::aggregator::DayAggregator;
use crate::reader::read_document;
use crate::writer::write_summaries;

// ── Public types ──────────────────────────────────────────────────────────────

/// What a successful run did.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    /// Number of measurement records read.
    pub records_processed: usize,
    /// Number of day summaries written.
    pub days_written: usize,
    /// Wall-clock seconds spent reading and parsing the input.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent validating and aggregating.
    pub aggregate_time_seconds: f64,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full pipeline.
///
/// 1. Read and parse the JSON document at `input`.
/// 2. Validate it and aggregate per day in the requested `order`.
/// 3. Write the summaries to `output`.
///
/// Any failure aborts before step 3, so `output` is never touched by a
/// failed run.
pub fn summarize_file(input: &Path, output: &Path, order: SummaryOrder) -> Result<PipelineReport> {
    // ── Step 1: Load ──────────────────────────────────────────────────────────
    let load_start = Instant::now();
    let document = read_document(input)?;
    let load_time = load_start.elapsed().as_secs_f64();
    info!("Loaded {}", input.display());

    // ── Step 2: Aggregate ─────────────────────────────────────────────────────
    let aggregate_start = Instant::now();
    let summaries = DayAggregator::aggregate_values(&document, order)?;
    // Validation above guarantees an array.
    let records_processed = document.as_array().map_or(0, Vec::len);
    let aggregate_time = aggregate_start.elapsed().as_secs_f64();
    info!(
        "Aggregated {} records into {} days ({} order)",
        records_processed,
        summaries.len(),
        order
    );

    // ── Step 3: Write ─────────────────────────────────────────────────────────
    write_summaries(output, &summaries)?;

    Ok(PipelineReport {
        records_processed,
        days_written: summaries.len(),
        load_time_seconds: load_time,
        aggregate_time_seconds: aggregate_time,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use hr_core::error::SummaryError;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, content: &serde_json::Value) -> std::path::PathBuf {
        let path = dir.path().join("heartrate.json");
        std::fs::write(&path, content.to_string()).unwrap();
        path
    }

    #[test]
    fn test_summarize_file_end_to_end() {
        let dir = TempDir::new().unwrap();
        let input = write_input(
            &dir,
            &json!([
                {"beatsPerMinute": 60, "timestamps": {"startTime": "2024-01-01T08:00:00Z", "endTime": "2024-01-01T08:05:00Z"}},
                {"beatsPerMinute": 80, "timestamps": {"startTime": "2024-01-01T09:00:00Z", "endTime": "2024-01-01T09:05:00Z"}},
                {"beatsPerMinute": 100, "timestamps": {"startTime": "2024-01-02T08:00:00Z", "endTime": "2024-01-02T08:05:00Z"}},
            ]),
        );
        let output = dir.path().join("output.json");

        let report = summarize_file(&input, &output, SummaryOrder::FirstSeen).unwrap();
        assert_eq!(report.records_processed, 3);
        assert_eq!(report.days_written, 2);

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            written,
            json!([
                {"date": "2024-01-01", "min": 60, "max": 80, "median": 70, "latestDataTimestamp": "2024-01-01T09:05:00.000Z"},
                {"date": "2024-01-02", "min": 100, "max": 100, "median": 100, "latestDataTimestamp": "2024-01-02T08:05:00.000Z"},
            ])
        );
    }

    #[test]
    fn test_summarize_file_empty_input() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, &json!([]));
        let output = dir.path().join("output.json");

        let report = summarize_file(&input, &output, SummaryOrder::FirstSeen).unwrap();
        assert_eq!(report.days_written, 0);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "[]");
    }

    #[test]
    fn test_summarize_file_malformed_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = write_input(
            &dir,
            &json!([
                {"beatsPerMinute": 60, "timestamps": {"startTime": "2024-01-01T08:00:00Z", "endTime": "2024-01-01T08:05:00Z"}},
                {"timestamps": {"startTime": "2024-01-01T09:00:00Z", "endTime": "2024-01-01T09:05:00Z"}},
            ]),
        );
        let output = dir.path().join("output.json");

        let err = summarize_file(&input, &output, SummaryOrder::FirstSeen).unwrap_err();
        assert!(matches!(err, SummaryError::MalformedInput { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_summarize_file_parse_error_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("heartrate.json");
        std::fs::write(&input, "[{").unwrap();
        let output = dir.path().join("output.json");

        let err = summarize_file(&input, &output, SummaryOrder::FirstSeen).unwrap_err();
        assert!(matches!(err, SummaryError::JsonParse(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_summarize_file_invalid_end_time_keeps_previous_output() {
        let dir = TempDir::new().unwrap();
        let input = write_input(
            &dir,
            &json!([
                {"beatsPerMinute": 60, "timestamps": {"startTime": "2024-01-01T08:00:00Z", "endTime": "soon"}},
            ]),
        );
        let output = dir.path().join("output.json");
        std::fs::write(&output, "previous").unwrap();

        let err = summarize_file(&input, &output, SummaryOrder::FirstSeen).unwrap_err();
        assert!(matches!(err, SummaryError::InvalidMeasurement { .. }));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_summarize_file_fractional_and_minute_precision() {
        let dir = TempDir::new().unwrap();
        let input = write_input(
            &dir,
            &json!([
                {"beatsPerMinute": 72.5, "timestamps": {"startTime": "2024-01-01T08:00Z", "endTime": "2024-01-01T08:01Z"}},
                {"beatsPerMinute": 70, "timestamps": {"startTime": "2024-01-01T09:00Z", "endTime": "2024-01-01T09:01Z"}},
            ]),
        );
        let output = dir.path().join("output.json");

        summarize_file(&input, &output, SummaryOrder::FirstSeen).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            written,
            json!([
                {"date": "2024-01-01", "min": 70, "max": 72.5, "median": 71.25, "latestDataTimestamp": "2024-01-01T09:01:00.000Z"},
            ])
        );
    }

    #[test]
    fn test_summarize_file_chronological() {
        let dir = TempDir::new().unwrap();
        let input = write_input(
            &dir,
            &json!([
                {"beatsPerMinute": 70, "timestamps": {"startTime": "2024-02-02T08:00:00Z", "endTime": "2024-02-02T08:05:00Z"}},
                {"beatsPerMinute": 71, "timestamps": {"startTime": "2024-02-01T08:00:00Z", "endTime": "2024-02-01T08:05:00Z"}},
            ]),
        );
        let output = dir.path().join("output.json");

        summarize_file(&input, &output, SummaryOrder::Chronological).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written[0]["date"], "2024-02-01");
        assert_eq!(written[1]["date"], "2024-02-02");
    }
}
