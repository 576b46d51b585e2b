use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::{fs::File, path::Path};
use tracing::debug;

use super::DELIMITER;
use crate::error::{ReportError, Result};

/// Write `headers` then every row of `rows` to `path`, fields joined by `;`
/// and one `\n`-terminated line per row.
///
/// Values are written as-is: a value containing `;` is not quoted.
#[tracing::instrument(level = "info", skip(path, headers, rows), fields(path = %path.as_ref().display(), rows = rows.len()))]
pub fn write_table<P, H, R>(path: P, headers: &[H], rows: &[R]) -> Result<()>
where
    P: AsRef<Path>,
    H: AsRef<str>,
    R: AsRef<[String]>,
{
    let path = path.as_ref();
    let csv_err = |source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut wtr = WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    wtr.write_record(headers.iter().map(|h| h.as_ref()))
        .map_err(csv_err)?;
    for row in rows {
        wtr.write_record(row.as_ref()).map_err(csv_err)?;
    }
    wtr.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::read_table;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read_round_trip() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("top_10_states.txt");
        let headers = ["TOP_STATES", "NUMBER_CERTIFIED_APPLICATIONS", "PERCENTAGE"];
        let rows = vec![
            vec!["CA".to_string(), "2".to_string(), "66.7%".to_string()],
            vec!["NY".to_string(), "1".to_string(), "33.3%".to_string()],
        ];

        write_table(&path, &headers, &rows)?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(
            content,
            "TOP_STATES;NUMBER_CERTIFIED_APPLICATIONS;PERCENTAGE\nCA;2;66.7%\nNY;1;33.3%\n"
        );

        let table = read_table(&path)?;
        assert_eq!(table.headers, headers);
        assert_eq!(table.rows, rows);
        Ok(())
    }

    #[test]
    fn test_header_only_when_no_rows() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("empty.txt");
        let rows: Vec<Vec<String>> = Vec::new();

        write_table(&path, &["A", "B"], &rows)?;
        assert_eq!(fs::read_to_string(&path)?, "A;B\n");
        Ok(())
    }

    #[test]
    fn test_delimiter_in_value_is_not_escaped() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("raw.txt");
        let rows = vec![vec!["A;B".to_string(), "1".to_string()]];

        write_table(&path, &["KEY", "N"], &rows)?;
        assert_eq!(fs::read_to_string(&path)?, "KEY;N\nA;B;1\n");
        Ok(())
    }

    #[test]
    fn test_unwritable_path_is_io_error() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("missing_dir").join("out.txt");
        let rows: Vec<Vec<String>> = Vec::new();

        let err = write_table(&path, &["A"], &rows).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
        Ok(())
    }
}
