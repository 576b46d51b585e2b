use serde::Deserialize;

use super::rank::RankedEntry;
use crate::error::{ReportError, Result};

/// Behaviour when percentages are requested against a total of zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroTotalPolicy {
    /// Fail with `ReportError::ZeroTotal`.
    #[default]
    Reject,
    /// Report every entry as `0.0%`.
    Zero,
}

impl std::str::FromStr for ZeroTotalPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(ZeroTotalPolicy::Reject),
            "zero" => Ok(ZeroTotalPolicy::Zero),
            _ => Err(format!("Unknown zero-total policy: {}. Use reject or zero", s)),
        }
    }
}

/// One published line of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub key: String,
    pub count: u64,
    pub percentage: String,
}

impl ReportRow {
    /// Fields in output column order.
    pub fn fields(&self) -> Vec<String> {
        vec![
            self.key.clone(),
            self.count.to_string(),
            self.percentage.clone(),
        ]
    }
}

/// `count * 100 / total` with one decimal and a trailing `%`.
pub fn format_percentage(count: u64, total: u64) -> Result<String> {
    if total == 0 {
        return Err(ReportError::ZeroTotal);
    }
    Ok(format!("{:.1}%", count as f64 * 100.0 / total as f64))
}

/// Attach a share of `total` to every ranked entry.
///
/// An empty `entries` always succeeds, whatever the total.
pub fn top_percentage(
    entries: &[RankedEntry],
    total: u64,
    policy: ZeroTotalPolicy,
) -> Result<Vec<ReportRow>> {
    entries
        .iter()
        .map(|entry| {
            let percentage = match (total, policy) {
                (0, ZeroTotalPolicy::Zero) => "0.0%".to_string(),
                _ => format_percentage(entry.count, total)?,
            };
            Ok(ReportRow {
                key: entry.key.clone(),
                count: entry.count,
                percentage,
            })
        })
        .collect()
}
