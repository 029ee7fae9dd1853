//! modemscan application shell
//!
//! Wires the real collaborators together and runs one inventory pass.
//! Core logic lives in the `crates/` directory.

use modemscan_browser::BrowserEngine;
use modemscan_core::ScannerConfig;
use modemscan_scanner::{
    ConsoleReporter, DailyLogFile, LocalInterfaces, ScanError, ScanOrchestrator, XlsxExporter,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

/// Initialize tracing subscriber for logging
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(config: ScannerConfig) -> anyhow::Result<()> {
    let summary = ScanOrchestrator::new(
        config.discovery.clone(),
        Box::new(LocalInterfaces),
        Arc::new(BrowserEngine::new(config.browser.clone())),
        Box::new(DailyLogFile::new(config.output.clone())),
        Box::new(XlsxExporter::new(config.output.clone())),
        Box::new(ConsoleReporter),
    )
    .run()
    .await?;

    info!(
        "Wrote {} of {} devices to {}",
        summary.records.len(),
        summary.attempted(),
        config.output.workbook_path().display()
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    ConsoleReporter.banner();

    let config = ScannerConfig::from_env();
    info!("Starting modemscan v{}", env!("CARGO_PKG_VERSION"));

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The reporter has already printed the console message for this one.
            if !matches!(
                e.downcast_ref::<ScanError>(),
                Some(ScanError::NoCandidateAddresses { .. })
            ) {
                eprintln!("{e:#}");
            }
            error!("Run failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
