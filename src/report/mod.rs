// src/report/mod.rs
pub mod filter;
pub mod percentage;
pub mod rank;

pub use filter::certified;
pub use percentage::{format_percentage, top_percentage, ReportRow, ZeroTotalPolicy};
pub use rank::{top_10, top_n, RankedEntry};

use crate::config::Config;
use crate::error::{Partial, Result};
use crate::table::ColumnIndex;

/// Second and third header column of every report.
pub const COUNT_COLUMN: &str = "NUMBER_CERTIFIED_APPLICATIONS";
pub const PERCENTAGE_COLUMN: &str = "PERCENTAGE";

/// The two published rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Occupations,
    States,
}

impl ReportKind {
    /// First header column.
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Occupations => "TOP_OCCUPATIONS",
            ReportKind::States => "TOP_STATES",
        }
    }

    pub fn header(&self) -> [&'static str; 3] {
        [self.title(), COUNT_COLUMN, PERCENTAGE_COLUMN]
    }

    /// Grouping column configured for this report.
    pub fn column<'a>(&self, config: &'a Config) -> &'a str {
        match self {
            ReportKind::Occupations => &config.occupation_column,
            ReportKind::States => &config.state_column,
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportKind::Occupations => write!(f, "occupations"),
            ReportKind::States => write!(f, "states"),
        }
    }
}

/// Rank `certified` by the report's column and attach percentages of
/// `total`. Ranking and percentage failures obey `config.on_error`.
pub fn build_report<R: AsRef<[String]>>(
    kind: ReportKind,
    certified: &[R],
    index: &ColumnIndex,
    total: u64,
    config: &Config,
) -> Result<Vec<ReportRow>> {
    let ranked = top_n(certified, index, kind.column(config), config.limit)
        .resolve(config.on_error, &format!("rank {}", kind))?;
    let rows = match top_percentage(&ranked, total, config.zero_total) {
        Ok(rows) => Partial::complete(rows),
        Err(err) => Partial::failed(Vec::new(), err),
    };
    rows.resolve(config.on_error, &format!("percentages {}", kind))
}
