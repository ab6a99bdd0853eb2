//! Input sources for the Payroll Engine.
//!
//! Reads the employee master file and the attendance log from CSV or from the
//! first sheet of an `.xlsx` workbook. Both formats become the same text rows,
//! so a row is validated the same way whatever file it came from. A row that
//! cannot be used is skipped with a warning; only an unreadable or
//! unsupported source fails the whole load.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::sources::{load_attendance, load_employees};
//!
//! let employees = load_employees("data/employees.csv")?;
//! let attendance = load_attendance("data/attendance.csv")?;
//! println!(
//!     "{} employees, {} attendance rows, {} skipped",
//!     employees.data.len(),
//!     attendance.data.len(),
//!     employees.warnings.len() + attendance.warnings.len()
//! );
//! # Ok::<(), payroll_engine::error::PayrollError>(())
//! ```

mod attendance;
mod employees;
mod spreadsheet;

pub use attendance::{ATTENDANCE_COLUMNS, load_attendance, read_attendance};
pub use employees::{EMPLOYEE_COLUMNS, load_employees, read_employees};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{PayrollError, PayrollResult};
use crate::models::AuditWarning;

/// Data read from a source along with the rows that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceData<T> {
    /// The usable data.
    pub data: T,
    /// One warning per skipped row.
    pub warnings: Vec<AuditWarning>,
}

/// Data rows with their 1-based line numbers, plus warnings for rows that
/// could not be read at all.
type Rows = (Vec<(u64, StringRecord)>, Vec<AuditWarning>);

/// File formats the loaders accept, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceFormat {
    Csv,
    Xlsx,
}

impl SourceFormat {
    fn from_path(path: &Path) -> PayrollResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        if extension.eq_ignore_ascii_case("csv") {
            Ok(Self::Csv)
        } else if extension.eq_ignore_ascii_case("xlsx") {
            Ok(Self::Xlsx)
        } else {
            Err(PayrollError::UnsupportedFormat {
                path: path.display().to_string(),
            })
        }
    }
}

/// Reads the data rows of a `.csv` or `.xlsx` source, header excluded.
fn load_rows(path: &Path, source: &str) -> PayrollResult<Rows> {
    match SourceFormat::from_path(path)? {
        SourceFormat::Csv => {
            let file = File::open(path).map_err(|e| PayrollError::SourceUnavailable {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            read_rows(file, source)
        }
        SourceFormat::Xlsx => Ok((spreadsheet::read_sheet_rows(path)?, Vec::new())),
    }
}

/// Builds the CSV reader shared by every source: header row, ragged rows allowed.
fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// Reads every row, handing parse failures back as warnings.
///
/// Row-level CSV errors skip the row; I/O errors abort the read.
fn read_rows<R: Read>(reader: R, source: &str) -> PayrollResult<Rows> {
    let mut rdr = csv_reader(reader);
    let mut rows = Vec::new();
    let mut warnings = Vec::new();

    for result in rdr.records() {
        match result {
            Ok(record) => {
                let line = record.position().map_or(0, |p| p.line());
                rows.push((line, record));
            }
            Err(e) if e.is_io_error() => {
                return Err(PayrollError::SourceUnavailable {
                    path: source.to_string(),
                    message: e.to_string(),
                });
            }
            Err(e) => {
                let line = e.position().map_or(0, |p| p.line());
                let error = PayrollError::MalformedRecord {
                    record: format!("{source} line {line}"),
                    message: e.to_string(),
                };
                warnings.push(AuditWarning::from(&error));
            }
        }
    }

    Ok((rows, warnings))
}

/// Parses a money amount that may carry thousands separators.
fn parse_amount(text: &str) -> Option<Decimal> {
    let cleaned: String = text.chars().filter(|c| *c != ',').collect();
    cleaned.trim().parse().ok()
}

/// Returns the field at `index`, or an empty string.
fn field(record: &StringRecord, index: usize) -> String {
    record.get(index).unwrap_or_default().to_string()
}
