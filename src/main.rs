//! CLI entry point for the gradebook auditor.
//!
//! Reads a gradebook CSV, checks recorded totals against their component
//! sums, and prints general averages, branch-wise averages, and top-3
//! rankings per scoring component.

use anyhow::Result;
use clap::Parser;
use gradebook_auditor::{audit::GradebookSummary, report, source};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gradebook_auditor")]
#[command(about = "A tool to audit a gradebook CSV", long_about = None)]
struct Cli {
    /// Path to the gradebook CSV file
    #[arg(value_name = "GRADEBOOK_CSV")]
    input: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gradebook_auditor.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gradebook_auditor.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let rows = source::load_rows(&cli.input)?;
    let summary = GradebookSummary::from_rows(rows);

    info!(
        records = summary.records.len(),
        discrepancies = summary.discrepancies.len(),
        "Gradebook audited"
    );
    report::print_pretty(&summary);

    let stdout = std::io::stdout();
    report::render(&summary, &mut stdout.lock())?;

    Ok(())
}
