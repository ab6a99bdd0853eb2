//! Attendance log reader.

use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use super::{Rows, SourceData, field, load_rows, read_rows};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceEntry, AuditWarning};

/// Minimum number of columns in an attendance row; a seventh daily-total
/// column is ignored when present.
pub const ATTENDANCE_COLUMNS: usize = 6;

const SOURCE: &str = "attendance";

/// Reads the attendance log from any reader.
///
/// Columns, in order: employee number, last name, first name, date, log in,
/// log out. Dates and times are kept as text and validated during
/// aggregation, so a bad value only skips that day.
///
/// # Examples
///
/// ```
/// use payroll_engine::sources::read_attendance;
///
/// let csv = "\
/// Employee #,Last Name,First Name,Date,Log In,Log Out
/// 10001,Garcia,Manuel III,06/03/2024,8:59,18:31
/// 10001,Garcia,Manuel III,06/04/2024,9:47,19:07
/// ";
///
/// let attendance = read_attendance(csv.as_bytes()).unwrap();
/// assert_eq!(attendance.data.len(), 2);
/// assert_eq!(attendance.data[1].login, "9:47");
/// ```
pub fn read_attendance<R: Read>(reader: R) -> PayrollResult<SourceData<Vec<AttendanceEntry>>> {
    Ok(entries_from_rows(read_rows(reader, SOURCE)?))
}

/// Loads the attendance log from a `.csv` or `.xlsx` path.
///
/// A workbook is read from its first sheet; the header row is skipped.
pub fn load_attendance<P: AsRef<Path>>(
    path: P,
) -> PayrollResult<SourceData<Vec<AttendanceEntry>>> {
    let path = path.as_ref();
    let loaded = entries_from_rows(load_rows(path, SOURCE)?);

    for warning in &loaded.warnings {
        warn!(path = %path.display(), code = %warning.code, message = %warning.message, "Skipped attendance row");
    }
    info!(
        path = %path.display(),
        entries = loaded.data.len(),
        skipped = loaded.warnings.len(),
        "Loaded attendance"
    );

    Ok(loaded)
}

fn entries_from_rows((rows, mut warnings): Rows) -> SourceData<Vec<AttendanceEntry>> {
    let mut entries = Vec::with_capacity(rows.len());

    for (line, record) in rows {
        let employee_number = field(&record, 0);
        if record.len() < ATTENDANCE_COLUMNS || employee_number.is_empty() {
            let error = PayrollError::MalformedRecord {
                record: format!("{SOURCE} line {line}"),
                message: format!(
                    "expected at least {ATTENDANCE_COLUMNS} fields with an employee number, found {}",
                    record.len()
                ),
            };
            warnings.push(AuditWarning::from(&error));
            continue;
        }

        entries.push(AttendanceEntry {
            employee_number,
            last_name: field(&record, 1),
            first_name: field(&record, 2),
            date: field(&record, 3),
            login: field(&record, 4),
            logout: field(&record, 5),
        });
    }

    SourceData {
        data: entries,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Employee #,Last Name,First Name,Date,Log In,Log Out";

    fn read(body: &str) -> SourceData<Vec<AttendanceEntry>> {
        let csv = format!("{HEADER}\n{body}");
        read_attendance(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_reads_rows_in_input_order() {
        let loaded = read("10002,Lim,Antonio,06/03/2024,10:35,19:44\n10001,Garcia,Manuel III,06/03/2024,8:59,18:31\n");

        assert_eq!(loaded.data.len(), 2);
        assert_eq!(loaded.data[0].employee_number, "10002");
        assert_eq!(loaded.data[0].last_name, "Lim");
        assert_eq!(loaded.data[1].date, "06/03/2024");
        assert_eq!(loaded.data[1].logout, "18:31");
    }

    #[test]
    fn test_ignores_trailing_total_column() {
        let loaded = read("10001,Garcia,Manuel III,06/03/2024,8:59,18:31,9:32\n");

        assert_eq!(loaded.data.len(), 1);
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn test_keeps_empty_times_for_aggregation() {
        let loaded = read("10001,Garcia,Manuel III,06/03/2024,8:59,\n");

        assert_eq!(loaded.data.len(), 1);
        assert!(loaded.data[0].logout.is_empty());
    }

    #[test]
    fn test_short_row_skipped_with_warning() {
        let loaded = read("10001,Garcia,Manuel III,06/03/2024\n10001,Garcia,Manuel III,06/04/2024,8:00,17:00\n");

        assert_eq!(loaded.data.len(), 1);
        assert_eq!(loaded.warnings.len(), 1);
        assert_eq!(loaded.warnings[0].code, "MALFORMED_RECORD");
        assert!(loaded.warnings[0].message.contains("attendance line 2"));
    }

    #[test]
    fn test_missing_employee_number_skipped() {
        let loaded = read(",Garcia,Manuel III,06/03/2024,8:00,17:00\n");

        assert!(loaded.data.is_empty());
        assert_eq!(loaded.warnings.len(), 1);
    }

    #[test]
    fn test_header_only_is_empty() {
        let loaded = read("");
        assert!(loaded.data.is_empty());
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn test_loads_first_sheet_of_workbook() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/attendance.xlsx");
        let loaded = load_attendance(path).unwrap();

        assert_eq!(loaded.data.len(), 2);
        assert_eq!(loaded.data[0], {
            let mut entry = AttendanceEntry::new("10001", "06/03/2024", "8:59", "18:31");
            entry.last_name = "Garcia".to_string();
            entry.first_name = "Manuel III".to_string();
            entry
        });
        // Date and time cells read as the log's text forms.
        assert_eq!(loaded.data[1].date, "06/04/2024");
        assert_eq!(loaded.data[1].login, "6:00");
        assert_eq!(loaded.data[1].logout, "15:00");

        // A row ending before the logout cell, and one without an employee number.
        assert_eq!(loaded.warnings.len(), 2);
        assert!(loaded.warnings.iter().all(|w| w.code == "MALFORMED_RECORD"));
        assert!(loaded.warnings[0].message.contains("attendance line 4"));
    }

    #[test]
    fn test_load_rejects_non_csv() {
        assert!(matches!(
            load_attendance("attendance.txt"),
            Err(PayrollError::UnsupportedFormat { .. })
        ));
    }
}
