// ── Median helper ─────────────────────────────────────────────────────────────

/// Median of `values`, computed on a sorted copy.
///
/// For an even count this is the mean of the two middle elements
/// (indices `n/2 - 1` and `n/2`), for an odd count the middle element.
/// Returns `None` for an empty slice.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let len = sorted.len();
    let middle = len / 2;
    if len % 2 == 0 {
        Some((sorted[middle - 1] + sorted[middle]) / 2.0)
    } else {
        Some(sorted[middle])
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
