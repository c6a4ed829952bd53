use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use tracing::warn;

// ── Day key ───────────────────────────────────────────────────────────────────

/// Date portion of an ISO-8601 timestamp: everything before the first `T`.
///
/// Purely lexical; no calendar validation happens here. Returns `None` when
/// the string has no `T` separator.
pub fn day_key(start_time: &str) -> Option<&str> {
    start_time.split_once('T').map(|(date, _)| date)
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse an ISO 8601 / RFC 3339 timestamp string into a UTC [`DateTime`].
///
/// Handles the `Z` suffix and any fixed offset. Strings without an offset
/// are taken as UTC; a bare date means midnight UTC.
/// Returns `None` for empty strings or unrecognised formats.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Replace trailing 'Z' with '+00:00' so minute-precision instants such as
    // `2024-01-01T08:01Z` go through the offset-aware formats below.
    let normalised = if let Some(stripped) = s.strip_suffix('Z') {
        format!("{}+00:00", stripped)
    } else {
        s.to_string()
    };

    const OFFSET_FMTS: &[&str] = &["%Y-%m-%dT%H:%M%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];
    for fmt in OFFSET_FMTS {
        if let Ok(dt) = DateTime::parse_from_str(&normalised, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    const FMTS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ];
    for fmt in FMTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let naive = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&naive));
    }

    warn!("could not parse timestamp \"{}\"", s);
    None
}

// ── Formatting ────────────────────────────────────────────────────────────────

/// Canonical output form: UTC, millisecond precision, `Z` suffix
/// (`2024-01-01T12:00:00.000Z`).
pub fn to_canonical_iso(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
