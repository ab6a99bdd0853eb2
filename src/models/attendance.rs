//! Attendance models.
//!
//! This module defines the raw [`AttendanceEntry`] as read from an attendance
//! log and the validated [`AttendanceRecord`] derived from it.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single attendance row exactly as read from the source.
///
/// Times are kept as text in `H:mm` form; an empty string means the field was
/// missing. Parsing happens in the attendance aggregator so that a bad row
/// only skips that row.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendanceEntry;
///
/// let entry = AttendanceEntry::new("10001", "06/03/2024", "8:59", "18:31");
/// assert_eq!(entry.describe(), "employee 10001 on 06/03/2024");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// Employee number the row belongs to.
    pub employee_number: String,
    /// Family name as written in the log (inert).
    #[serde(default)]
    pub last_name: String,
    /// Given name as written in the log (inert).
    #[serde(default)]
    pub first_name: String,
    /// Date text, `MM/dd/yyyy` by default.
    pub date: String,
    /// Login time text, `H:mm`.
    pub login: String,
    /// Logout time text, `H:mm`.
    pub logout: String,
}

impl AttendanceEntry {
    /// Creates an entry without the inert name columns.
    pub fn new(
        employee_number: impl Into<String>,
        date: impl Into<String>,
        login: impl Into<String>,
        logout: impl Into<String>,
    ) -> Self {
        Self {
            employee_number: employee_number.into(),
            last_name: String::new(),
            first_name: String::new(),
            date: date.into(),
            login: login.into(),
            logout: logout.into(),
        }
    }

    /// Returns a short label identifying the row in warnings.
    pub fn describe(&self) -> String {
        format!("employee {} on {}", self.employee_number, self.date)
    }
}

/// A validated day of attendance for one employee.
///
/// `worked_hours` and `is_late` are derived once when the record is built and
/// never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The day worked.
    pub date: NaiveDate,
    /// Wall-clock login time.
    pub login: NaiveTime,
    /// Wall-clock logout time.
    pub logout: NaiveTime,
    /// Hours worked after the unpaid lunch break.
    pub worked_hours: Decimal,
    /// Whether the login was after the lateness cutoff.
    pub is_late: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_leaves_names_empty() {
        let entry = AttendanceEntry::new("10001", "06/03/2024", "8:00", "17:00");
        assert!(entry.last_name.is_empty());
        assert!(entry.first_name.is_empty());
        assert_eq!(entry.login, "8:00");
    }

    #[test]
    fn test_describe_names_employee_and_date() {
        let entry = AttendanceEntry::new("10002", "06/04/2024", "8:00", "17:00");
        assert_eq!(entry.describe(), "employee 10002 on 06/04/2024");
    }

    #[test]
    fn test_record_serializes_times_and_hours() {
        let record = AttendanceRecord {
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            login: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            logout: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            worked_hours: Decimal::new(8, 0),
            is_late: false,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"date\":\"2024-06-03\""));
        assert!(json.contains("\"is_late\":false"));

        let deserialized: AttendanceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
