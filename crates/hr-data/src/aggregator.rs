//! Per-day aggregation of heart-rate measurements.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use hr_core::error::{Result, SummaryError};
use hr_core::models::{DaySummary, Measurement, SummaryOrder};
use hr_core::statistics::median;
use hr_core::time_utils::{day_key, parse_timestamp, to_canonical_iso};
use tracing::debug;

// ── DayAccumulator ────────────────────────────────────────────────────────────

/// Running aggregate for one day key. Always holds at least one reading.
#[derive(Debug, Clone)]
pub struct DayAccumulator {
    pub min: f64,
    pub max: f64,
    /// Every value seen for the day, in arrival order.
    pub values: Vec<f64>,
    pub latest_end: DateTime<Utc>,
}

impl DayAccumulator {
    /// Start a day from its first reading.
    pub fn new(beats_per_minute: f64, end: DateTime<Utc>) -> Self {
        Self {
            min: beats_per_minute,
            max: beats_per_minute,
            values: vec![beats_per_minute],
            latest_end: end,
        }
    }

    /// Fold one more reading into the running aggregate.
    pub fn add(&mut self, beats_per_minute: f64, end: DateTime<Utc>) {
        self.min = self.min.min(beats_per_minute);
        self.max = self.max.max(beats_per_minute);
        self.values.push(beats_per_minute);

        if end > self.latest_end {
            self.latest_end = end;
        }
    }

    /// Derive the final summary.
    pub fn finish(&self, date: &str) -> DaySummary {
        DaySummary {
            date: date.to_string(),
            min: self.min,
            max: self.max,
            // `values` is never empty, so the fallback is unreachable.
            median: median(&self.values).unwrap_or(self.min),
            latest_data_timestamp: to_canonical_iso(self.latest_end),
        }
    }
}

// ── DayAggregator ─────────────────────────────────────────────────────────────

/// Stateless helper that groups measurements by calendar day.
pub struct DayAggregator;

impl DayAggregator {
    /// Summarise `records` per day, days in first-seen order.
    pub fn aggregate(records: &[Measurement]) -> Result<Vec<DaySummary>> {
        Self::aggregate_ordered(records, SummaryOrder::FirstSeen)
    }

    /// Summarise `records` per day in the requested `order`.
    ///
    /// Fails on the first record whose `startTime` has no `T` separator or
    /// whose `endTime` cannot be parsed; nothing is returned in that case.
    pub fn aggregate_ordered(
        records: &[Measurement],
        order: SummaryOrder,
    ) -> Result<Vec<DaySummary>> {
        // Accumulators in first-seen order, plus a key -> slot lookup.
        let mut days: Vec<(&str, DayAccumulator)> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();

        for (index, record) in records.iter().enumerate() {
            let start = record.timestamps.start_time.as_str();
            let key = day_key(start).ok_or_else(|| {
                SummaryError::invalid(
                    index,
                    format!("`timestamps.startTime` \"{}\" has no 'T' separator", start),
                )
            })?;

            let end_raw = record.timestamps.end_time.as_str();
            let end = parse_timestamp(end_raw).ok_or_else(|| {
                SummaryError::invalid(
                    index,
                    format!("`timestamps.endTime` \"{}\" is not a valid timestamp", end_raw),
                )
            })?;

            match slots.get(key) {
                Some(&slot) => days[slot].1.add(record.beats_per_minute, end),
                None => {
                    slots.insert(key, days.len());
                    days.push((key, DayAccumulator::new(record.beats_per_minute, end)));
                }
            }
        }

        if order == SummaryOrder::Chronological {
            days.sort_by(|a, b| a.0.cmp(b.0));
        }

        let summaries: Vec<DaySummary> = days
            .iter()
            .map(|(key, acc)| {
                let summary = acc.finish(key);
                debug!(
                    "Day {}: {} readings, min {}, max {}, median {}",
                    key,
                    acc.values.len(),
                    summary.min,
                    summary.max,
                    summary.median
                );
                summary
            })
            .collect();

        Ok(summaries)
    }

    /// Validate an untyped JSON document and aggregate it.
    ///
    /// The document must be an array of measurement objects; see
    /// [`Measurement::from_value`] for how individual elements are checked.
    pub fn aggregate_values(
        document: &serde_json::Value,
        order: SummaryOrder,
    ) -> Result<Vec<DaySummary>> {
        let records = measurements_from_value(document)?;
        Self::aggregate_ordered(&records, order)
    }
}

/// Turn a JSON array into typed measurements, failing on the first bad element.
pub fn measurements_from_value(document: &serde_json::Value) -> Result<Vec<Measurement>> {
    let elements = document.as_array().ok_or_else(|| {
        SummaryError::malformed(None, "expected an array of measurement records")
    })?;

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| Measurement::from_value(index, element))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
