//! Output serialisation for day summaries.

use std::path::Path;

use hr_core::error::{Result, SummaryError};
use hr_core::models::DaySummary;
use tracing::debug;

/// Pretty-print `summaries` as a JSON array with two-space indentation.
pub fn to_json_pretty(summaries: &[DaySummary]) -> Result<String> {
    serde_json::to_string_pretty(summaries).map_err(SummaryError::Serialize)
}

/// Atomically write `summaries` to `path`, creating parent directories if
/// needed. The file either appears complete or not at all.
pub fn write_summaries(path: &Path, summaries: &[DaySummary]) -> Result<()> {
    let json = to_json_pretty(summaries)?;
    let write_err = |source: std::io::Error| SummaryError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    // Write to a temp file then rename for atomicity.
    let tmp = path.with_extension("json.tmp");
    if let Err(e) = std::fs::write(&tmp, &json) {
        let _ = std::fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(write_err(e));
    }

    debug!(
        "Wrote {} summaries ({} bytes) to {}",
        summaries.len(),
        json.len(),
        path.display()
    );
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
