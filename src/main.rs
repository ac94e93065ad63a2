mod config;
mod error;
mod models;
mod utils;
use std::process::ExitCode;
use anyhow::{Context, Result};
use dotenv::dotenv;
use log::{error, info, warn};
use serde_json::to_string_pretty;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};
use crate::config::Config;
use crate::utils::credentials::resolve_credentials;
use crate::utils::faculties::retrieve_faculty_cells;
use crate::utils::grades::retrieve_grade_matrix;
use crate::utils::session::Session;

// Entry point for the async main function, powered by tokio runtime.
#[tokio::main]
async fn main() -> ExitCode {
    // Loads environment variables from a `.env` file, if present.
    dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // Logging goes to the terminal with mixed output (both stdout and stderr) and automatic color support.
    if let Err(e) = TermLogger::init(config.log_level, LogConfig::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

// Login, faculty overview, then the grade statistics of the configured subject.
// The session is dropped on every return path, closing its connections.
async fn run(config: &Config) -> Result<()> {
    let credentials = resolve_credentials().context("Failed to obtain credentials")?;
    let session = Session::new(config.base_url.clone()).context("Failed to build the client")?;
    info!("Connecting to {}", session.base_url());

    session.authenticate(&credentials).await.context("Can't login")?;

    let faculty_cells = retrieve_faculty_cells(&session)
        .await
        .context("Failed to read the faculty overview")?;
    info!("Faculty overview returned {} cells", faculty_cells.len());

    let matrix = retrieve_grade_matrix(&session, &config.stats)
        .await
        .with_context(|| format!("Failed to read grade statistics for subject {}", config.stats.subject))?;

    if matrix.is_empty() {
        warn!("Subject {} has no graded terms", config.stats.subject);
    }
    for (term, row) in matrix.rows().iter().enumerate() {
        let buckets: Vec<String> = row.buckets().map(|(grade, count)| format!("{}={}", grade, count)).collect();
        info!("Term {}: {} ({} students)", term + 1, buckets.join(" "), row.total());
    }
    info!("{}", to_string_pretty(&matrix).context("Failed to serialize grades")?);
    Ok(())
}
