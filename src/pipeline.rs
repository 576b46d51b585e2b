// src/pipeline.rs
use std::{
    path::{Path, PathBuf},
    time::Instant,
};
use tracing::{error, info};

use crate::config::Config;
use crate::error::{ErrorPolicy, Result};
use crate::report::{build_report, certified, ReportKind};
use crate::table::{read_table, write_table};

/// Outcome of one report file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub kind: ReportKind,
    pub path: PathBuf,
    pub rows: usize,
    /// False when the file could not be written and the error was only logged.
    pub written: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Data records in the input, header excluded.
    pub total_records: usize,
    pub certified: u64,
    pub reports: Vec<ReportSummary>,
}

/// Read `input`, keep certified records and write the occupations and states
/// rankings to their paths.
///
/// Failing to read the input is always an error. Every later failure is
/// logged and skipped under `ErrorPolicy::Lenient`, returned under
/// `ErrorPolicy::Strict`.
pub fn generate_reports(
    config: &Config,
    input: &Path,
    occupations_out: &Path,
    states_out: &Path,
) -> Result<RunSummary> {
    let start = Instant::now();

    // ─── 1) load ─────────────────────────────────────────────────────
    let table = read_table(input)?;
    let index = table.column_index();

    // ─── 2) filter ───────────────────────────────────────────────────
    let certified_rows = certified(
        &table.rows,
        &index,
        &config.status_column,
        &config.certified_status,
    )
    .resolve(config.on_error, "filter")?;
    let total = certified_rows.len() as u64;
    info!(
        columns = index.len(),
        records = table.rows.len(),
        certified = total,
        "filtered certified applications"
    );

    // ─── 3) rank, format, write ──────────────────────────────────────
    let mut reports = Vec::with_capacity(2);
    for (kind, path) in [
        (ReportKind::Occupations, occupations_out),
        (ReportKind::States, states_out),
    ] {
        let rows = build_report(kind, &certified_rows, &index, total, config)?;
        let lines: Vec<Vec<String>> = rows.iter().map(|r| r.fields()).collect();

        let written = match write_table(path, &kind.header(), &lines) {
            Ok(()) => true,
            Err(err) if config.on_error == ErrorPolicy::Lenient => {
                error!(report = %kind, error = %err, "failed to write report");
                false
            }
            Err(err) => return Err(err),
        };
        info!(report = %kind, rows = rows.len(), path = %path.display(), written, "report done");

        reports.push(ReportSummary {
            kind,
            path: path.to_path_buf(),
            rows: rows.len(),
            written,
        });
    }

    info!(elapsed = ?start.elapsed(), "completed");
    Ok(RunSummary {
        total_records: table.rows.len(),
        certified: total,
        reports,
    })
}
