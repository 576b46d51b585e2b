use std::collections::HashMap;
use tracing::debug;

use crate::error::Partial;
use crate::table::{clean_key, field, ColumnIndex};

/// A group key and the number of records that carried it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub key: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// Count records per cleaned value of `column` and keep the `limit` largest
/// groups, count descending then key ascending.
///
/// A record too short to hold `column` ends the scan; the groups counted
/// before it are still ranked and returned in the partial value.
pub fn top_n<R: AsRef<[String]>>(
    records: &[R],
    index: &ColumnIndex,
    column: &str,
    limit: usize,
) -> Partial<Vec<RankedEntry>> {
    let idx = match index.position(column) {
        Ok(idx) => idx,
        Err(err) => return Partial::failed(Vec::new(), err),
    };

    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut failure = None;
    for (row, record) in records.iter().enumerate() {
        match field(record.as_ref(), idx, row, column) {
            Ok(value) => *counts.entry(clean_key(value)).or_default() += 1,
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }

    debug!(column, groups = counts.len(), "counted groups");
    let ranked = rank(counts, limit);
    match failure {
        Some(err) => Partial::failed(ranked, err),
        None => Partial::complete(ranked),
    }
}

/// `top_n` with the ten groups the reports publish.
pub fn top_10<R: AsRef<[String]>>(
    records: &[R],
    index: &ColumnIndex,
    column: &str,
) -> Partial<Vec<RankedEntry>> {
    top_n(records, index, column, 10)
}

fn rank(counts: HashMap<String, u64>, limit: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = counts
        .into_iter()
        .map(|(key, count)| RankedEntry::new(key, count))
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    entries.truncate(limit);
    entries
}
