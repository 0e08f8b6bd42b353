//! CLI runner - executes one fetch, export and display run

use crate::cli::commands::Cli;
use crate::config::{ApiConfig, RunParameters};
use crate::error::{Error, ErrorKind, Result};
use crate::http::{HttpClient, HttpClientConfig, PageSource};
use crate::output::{CsvExporter, ExportSummary, TablePresenter};
use crate::pagination::{Paginator, ProgressReporter, TerminalProgress};
use clap::CommandFactory;
use colored::Colorize;
use std::io::Write;
use std::time::Instant;
use tracing::{info, warn};

/// What a finished run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Requests issued
    pub pages: u32,
    /// Rows fetched
    pub rows: usize,
    /// Export result, when an output file was requested and written
    pub exported: Option<ExportSummary>,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run against the real API, reporting to standard output
    pub async fn run(&self) -> Result<RunReport> {
        let params = self.cli.run_parameters().inspect_err(|e| {
            if e.kind() == ErrorKind::Usage {
                let _ = Cli::command().print_help();
            }
        })?;

        let api = self.cli.api_config();
        let client = HttpClient::with_config(HttpClientConfig::from(&api))?;
        let mut paginator = Paginator::new(client, TerminalProgress::stdout());

        execute(&params, &api, &mut paginator, &mut std::io::stdout()).await
    }
}

/// Fetch every page for `params`, export if requested, then display.
///
/// A failed export does not prevent the rows from being displayed; the
/// export error is returned afterwards so the run still fails.
pub async fn execute<S, P, W>(
    params: &RunParameters,
    api: &ApiConfig,
    paginator: &mut Paginator<S, P>,
    out: &mut W,
) -> Result<RunReport>
where
    S: PageSource,
    P: ProgressReporter,
    W: Write,
{
    let run_start = Instant::now();
    info!("Starting {} run", params.mode.label());
    writeln!(out)?;

    let start = params.mode.start_url(api)?;
    let outcome = paginator
        .run(start, &params.access_token, Vec::new())
        .await?;
    let rows = outcome.rows;

    let mut export_error = None;
    let exported = match &params.output {
        Some(path) => match CsvExporter::new().export(&rows, path) {
            Ok(summary) => {
                writeln!(
                    out,
                    "All Data written to {}",
                    summary.path.display().to_string().green()
                )?;
                Some(summary)
            }
            Err(e) => {
                warn!("Export failed, displaying results anyway: {e}");
                export_error = Some(e);
                None
            }
        },
        None => None,
    };

    TablePresenter::new(&mut *out).present(&rows)?;
    writeln!(out)?;

    if let Some(e) = export_error {
        return Err(e);
    }

    info!(
        "Completed {} run: {} records in {} pages ({:?})",
        params.mode.label(),
        rows.len(),
        outcome.pages,
        run_start.elapsed()
    );

    Ok(RunReport {
        pages: outcome.pages,
        rows: rows.len(),
        exported,
    })
}

/// Write the failure line for `err`: a red `Error:` marker and the message.
///
/// The binary sends this to standard error so tables on standard output
/// stay clean.
pub fn report_error<W: Write>(err: &Error, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{} {err}", "Error:".red())
}
