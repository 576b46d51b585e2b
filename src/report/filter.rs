use tracing::debug;

use crate::error::Partial;
use crate::table::{field, ColumnIndex};

/// Records whose `status_column` equals `status` exactly, in input order.
///
/// Stops at the first record too short to hold the status column; the
/// records accepted before it are kept in the partial value.
pub fn certified<'a>(
    rows: &'a [Vec<String>],
    index: &ColumnIndex,
    status_column: &str,
    status: &str,
) -> Partial<Vec<&'a [String]>> {
    let idx = match index.position(status_column) {
        Ok(idx) => idx,
        Err(err) => return Partial::failed(Vec::new(), err),
    };

    let mut accepted = Vec::new();
    for (row, record) in rows.iter().enumerate() {
        match field(record, idx, row, status_column) {
            Ok(value) if value == status => accepted.push(record.as_slice()),
            Ok(_) => {}
            Err(err) => return Partial::failed(accepted, err),
        }
    }

    debug!(
        total = rows.len(),
        accepted = accepted.len(),
        status,
        "filtered records"
    );
    Partial::complete(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn header(names: &[&str]) -> ColumnIndex {
        let names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        ColumnIndex::new(&names)
    }

    #[test]
    fn test_only_exact_status_is_kept() {
        let index = header(&["WORKSITE_STATE", "CASE_STATUS"]);
        let data = rows(&[
            &["CA", "CERTIFIED"],
            &["CA", "certified"],
            &["NY", "DENIED"],
            &["TX", " CERTIFIED"],
            &["WA", "CERTIFIED-WITHDRAWN"],
            &["NJ", "CERTIFIED"],
        ]);

        let result = certified(&data, &index, "CASE_STATUS", "CERTIFIED");
        assert!(result.is_complete());
        let kept = result.value;
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0][0], "CA");
        assert_eq!(kept[1][0], "NJ");
        // subset of the input, every status matches
        for record in &kept {
            assert!(data.iter().any(|r| r.as_slice() == *record));
            assert_eq!(record[1], "CERTIFIED");
        }
    }

    #[test]
    fn test_missing_status_column() {
        let index = header(&["WORKSITE_STATE"]);
        let data = rows(&[&["CA"]]);

        let result = certified(&data, &index, "CASE_STATUS", "CERTIFIED");
        assert!(result.value.is_empty());
        assert!(matches!(result.error, Some(ReportError::MissingColumn(_))));
    }

    #[test]
    fn test_short_record_keeps_earlier_matches() {
        let index = header(&["WORKSITE_STATE", "CASE_STATUS"]);
        let data = rows(&[&["CA", "CERTIFIED"], &["NY"], &["TX", "CERTIFIED"]]);

        let result = certified(&data, &index, "CASE_STATUS", "CERTIFIED");
        assert_eq!(result.value.len(), 1);
        assert_eq!(result.value[0][0], "CA");
        assert!(matches!(
            result.error,
            Some(ReportError::ShortRecord { row: 1, len: 1, .. })
        ));
    }

    #[test]
    fn test_no_records() {
        let index = header(&["CASE_STATUS"]);
        let result = certified(&[], &index, "CASE_STATUS", "CERTIFIED");
        assert!(result.is_complete());
        assert!(result.value.is_empty());
    }
}
