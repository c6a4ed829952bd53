mod bootstrap;

use std::process::ExitCode;

use anyhow::{Context, Result};
use hr_core::settings::Settings;
use hr_data::pipeline::{summarize_file, PipelineReport};

fn run(settings: &Settings) -> Result<PipelineReport> {
    summarize_file(&settings.input, &settings.output, settings.order).with_context(|| {
        format!(
            "Error reading or processing {}",
            settings.input.display()
        )
    })
}

fn main() -> ExitCode {
    let settings = Settings::load();

    if let Err(e) = bootstrap::setup_logging(&settings.log_level, settings.log_file.as_deref()) {
        eprintln!("Failed to initialise logging: {:#}", e);
        return ExitCode::FAILURE;
    }

    tracing::info!("hr-daily v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        "Input: {}, Output: {}, Order: {}",
        settings.input.display(),
        settings.output.display(),
        settings.order
    );

    match run(&settings) {
        Ok(report) => {
            tracing::debug!(
                "Processed {} records into {} days (load {:.3}s, aggregate {:.3}s)",
                report.records_processed,
                report.days_written,
                report.load_time_seconds,
                report.aggregate_time_seconds
            );
            println!(
                "Statistics by day written to {} file.",
                settings.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
