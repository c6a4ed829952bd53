use clap::Parser;
use std::path::PathBuf;

use crate::models::SummaryOrder;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Summarise heart-rate measurements into per-day statistics
#[derive(Parser, Debug, Clone)]
#[command(
    name = "hr-daily",
    about = "Summarise heart-rate measurements into per-day statistics",
    version
)]
pub struct Settings {
    /// JSON file holding an array of measurement records
    #[arg(long, env = "HR_DAILY_INPUT", default_value = "heartrate.json")]
    pub input: PathBuf,

    /// Where the per-day summaries are written
    #[arg(long, env = "HR_DAILY_OUTPUT", default_value = "output.json")]
    pub output: PathBuf,

    /// Ordering of the emitted days
    #[arg(long, env = "HR_DAILY_ORDER", value_enum, default_value_t = SummaryOrder::FirstSeen)]
    pub order: SummaryOrder,

    /// Logging level
    #[arg(long, env = "HR_DAILY_LOG_LEVEL", default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Also append log output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn try_load_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Settings::try_parse_from(args).map(Self::resolve)
    }

    fn resolve(mut settings: Settings) -> Settings {
        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
