//! Attendance work log view.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::money;
use crate::calculation::build_attendance_record;
use crate::config::AttendancePolicy;
use crate::models::AttendanceEntry;

/// One attendance row with the worked hours and lateness derived from it.
///
/// `worked_hours` and `is_late` are `None` and `problem` says why when the row
/// would be skipped by payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkLog {
    /// Employee number the row belongs to.
    pub employee_number: String,
    /// Date as written in the log.
    pub date: String,
    /// Login time as written in the log.
    pub login: String,
    /// Logout time as written in the log.
    pub logout: String,
    /// Hours worked after the lunch break.
    pub worked_hours: Option<Decimal>,
    /// Whether the login was after the lateness cutoff.
    pub is_late: Option<bool>,
    /// Why the row cannot be used, if it cannot.
    pub problem: Option<String>,
}

/// Derives a work log line for every attendance row, in log order.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::AttendanceEntry;
/// use payroll_engine::report::work_logs;
///
/// let entries = vec![AttendanceEntry::new("10001", "06/03/2024", "8:59", "18:31")];
/// let logs = work_logs(&entries, &PayrollPolicy::default().attendance);
///
/// assert_eq!(logs[0].is_late, Some(true));
/// assert_eq!(
///     logs[0].to_string(),
///     "10001 06/03/2024 8:59-18:31 Worked Hours: 8.53, Is Late: true"
/// );
/// ```
pub fn work_logs(entries: &[AttendanceEntry], policy: &AttendancePolicy) -> Vec<WorkLog> {
    entries
        .iter()
        .map(|entry| {
            let (worked_hours, is_late, problem) = match build_attendance_record(entry, policy) {
                Ok(record) => (Some(record.worked_hours), Some(record.is_late), None),
                Err(e) => (None, None, Some(e.to_string())),
            };

            WorkLog {
                employee_number: entry.employee_number.clone(),
                date: entry.date.clone(),
                login: entry.login.clone(),
                logout: entry.logout.clone(),
                worked_hours,
                is_late,
                problem,
            }
        })
        .collect()
}

impl fmt::Display for WorkLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}-{} ",
            self.employee_number, self.date, self.login, self.logout
        )?;

        match (self.worked_hours, self.is_late, &self.problem) {
            (Some(hours), Some(late), _) => {
                write!(f, "Worked Hours: {}, Is Late: {}", money(hours), late)
            }
            (_, _, Some(problem)) => write!(f, "Skipped: {problem}"),
            _ => write!(f, "Skipped"),
        }
    }
}

/// Renders work log lines, one per row, followed by a count.
pub fn render_work_logs(logs: &[WorkLog]) -> String {
    let mut out = String::new();
    for log in logs {
        out.push_str(&format!("{log}\n"));
    }

    let skipped = logs.iter().filter(|log| log.problem.is_some()).count();
    out.push_str(&format!("Records: {} ({} skipped)\n", logs.len(), skipped));
    out
}
