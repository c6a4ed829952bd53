use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Result, SummaryError};

/// Start and end of the interval a measurement covers, as raw ISO-8601 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementTimestamps {
    pub start_time: String,
    pub end_time: String,
}

/// A single heart-rate sample read from the input document.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Beats per minute.
    pub beats_per_minute: f64,
    pub timestamps: MeasurementTimestamps,
}

impl Measurement {
    pub fn new(beats_per_minute: impl Into<f64>, start_time: &str, end_time: &str) -> Self {
        Self {
            beats_per_minute: beats_per_minute.into(),
            timestamps: MeasurementTimestamps {
                start_time: start_time.to_string(),
                end_time: end_time.to_string(),
            },
        }
    }

    /// Build a measurement from the untyped JSON element at position `index`.
    ///
    /// Missing structure is reported as [`SummaryError::MalformedInput`];
    /// fields that are present but of the wrong kind are reported as
    /// [`SummaryError::InvalidMeasurement`]. Unknown fields are ignored.
    pub fn from_value(index: usize, data: &Value) -> Result<Self> {
        let obj = data.as_object().ok_or_else(|| {
            SummaryError::malformed(Some(index), "expected a measurement object")
        })?;

        let bpm_value = obj.get("beatsPerMinute").ok_or_else(|| {
            SummaryError::malformed(Some(index), "missing field `beatsPerMinute`")
        })?;
        let beats_per_minute = parse_bpm(index, bpm_value)?;

        let timestamps = obj
            .get("timestamps")
            .and_then(Value::as_object)
            .ok_or_else(|| SummaryError::malformed(Some(index), "missing field `timestamps`"))?;

        let start_time = required_str(index, timestamps.get("startTime"), "startTime")?;
        let end_time = required_str(index, timestamps.get("endTime"), "endTime")?;

        Ok(Self {
            beats_per_minute,
            timestamps: MeasurementTimestamps {
                start_time,
                end_time,
            },
        })
    }
}

/// Accepts any finite, non-negative JSON number (`72`, `72.0`, `72.5`).
fn parse_bpm(index: usize, value: &Value) -> Result<f64> {
    let Value::Number(n) = value else {
        return Err(SummaryError::invalid(index, "`beatsPerMinute` is not numeric"));
    };

    n.as_f64()
        .filter(|f| f.is_finite() && *f >= 0.0)
        .ok_or_else(|| {
            SummaryError::invalid(
                index,
                format!("`beatsPerMinute` must be a non-negative number, got {}", n),
            )
        })
}

fn required_str(index: usize, value: Option<&Value>, field: &str) -> Result<String> {
    match value {
        None | Some(Value::Null) => Err(SummaryError::malformed(
            Some(index),
            format!("missing field `timestamps.{}`", field),
        )),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(SummaryError::invalid(
            index,
            format!("`timestamps.{}` is not a string", field),
        )),
    }
}

/// Statistics for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    /// Day key, `YYYY-MM-DD`.
    pub date: String,
    #[serde(serialize_with = "serialize_whole_as_integer")]
    pub min: f64,
    #[serde(serialize_with = "serialize_whole_as_integer")]
    pub max: f64,
    #[serde(serialize_with = "serialize_whole_as_integer")]
    pub median: f64,
    /// Latest `endTime` of the day in canonical `...T..:..:...mmmZ` form.
    pub latest_data_timestamp: String,
}

/// Write `75.0` as `75` but keep `72.5` as is.
fn serialize_whole_as_integer<S: Serializer>(
    value: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Ordering of the emitted day summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SummaryOrder {
    /// Days appear in the order their first record was encountered.
    #[default]
    FirstSeen,
    /// Days are sorted ascending by date key.
    Chronological,
}

impl std::fmt::Display for SummaryOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryOrder::FirstSeen => write!(f, "first-seen"),
            SummaryOrder::Chronological => write!(f, "chronological"),
        }
    }
}
