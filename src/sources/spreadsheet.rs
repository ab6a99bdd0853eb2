//! First-sheet reader for `.xlsx` workbooks.

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use csv::StringRecord;

use crate::error::{PayrollError, PayrollResult};

/// Text form of date cells, matching the attendance log's date column.
const DATE_FORMAT: &str = "%m/%d/%Y";

/// Text form of time-of-day cells, matching the `H:mm` log times.
const TIME_FORMAT: &str = "%-H:%M";

/// Reads the first worksheet as text rows, skipping the header row.
///
/// Trailing empty cells are dropped so a short row stays short, and rows
/// with no values at all are ignored. Line numbers are 1-based sheet rows.
pub(super) fn read_sheet_rows(path: &Path) -> PayrollResult<Vec<(u64, StringRecord)>> {
    let unavailable = |message: String| PayrollError::SourceUnavailable {
        path: path.display().to_string(),
        message,
    };

    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| unavailable(format!("{e}")))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| unavailable("workbook has no worksheets".to_string()))?
        .map_err(|e| unavailable(e.to_string()))?;

    let first_line = range.start().map_or(1, |(row, _)| u64::from(row) + 1);

    let rows = range
        .rows()
        .enumerate()
        .skip(1)
        .filter_map(|(offset, cells)| {
            let mut fields: Vec<String> = cells.iter().map(cell_text).collect();
            while fields.last().is_some_and(String::is_empty) {
                fields.pop();
            }
            (!fields.is_empty()).then(|| (first_line + offset as u64, StringRecord::from(fields)))
        })
        .collect();

    Ok(rows)
}

/// Renders a cell the way the same value reads in the CSV export.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.trim().to_string(),
        Data::DateTime(value) => match value.as_datetime() {
            Some(moment) if value.as_f64() < 1.0 => moment.format(TIME_FORMAT).to_string(),
            Some(moment) => moment.format(DATE_FORMAT).to_string(),
            None => value.as_f64().to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    #[test]
    fn test_cell_text_numbers_read_like_csv() {
        assert_eq!(cell_text(&Data::Float(10001.0)), "10001");
        assert_eq!(cell_text(&Data::Float(535.71)), "535.71");
        assert_eq!(cell_text(&Data::Int(90000)), "90000");
        assert_eq!(cell_text(&Data::String(" 8:59 ".to_string())), "8:59");
        assert_eq!(cell_text(&Data::Empty), "");
    }

    #[test]
    fn test_read_sheet_rows_skips_header_and_trims_rows() {
        let rows = read_sheet_rows(&fixture("attendance.xlsx")).unwrap();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].0, 2);
        assert_eq!(&rows[0].1[0], "10001");
        // Date and time cells in the second row.
        assert_eq!(&rows[1].1[3], "06/04/2024");
        assert_eq!(&rows[1].1[4], "6:00");
        assert_eq!(&rows[1].1[5], "15:00");
        // The missing logout is a trailing empty cell.
        assert_eq!(rows[2].1.len(), 5);
    }

    #[test]
    fn test_read_sheet_rows_missing_workbook_is_unavailable() {
        assert!(matches!(
            read_sheet_rows(&fixture("missing.xlsx")),
            Err(PayrollError::SourceUnavailable { .. })
        ));
    }
}
