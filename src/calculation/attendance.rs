//! Daily attendance calculation.
//!
//! Turns a raw [`AttendanceEntry`] into a validated [`AttendanceRecord`]:
//! parses the date and wall-clock times, computes worked hours net of the
//! unpaid lunch break, and flags late logins.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::config::AttendancePolicy;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceEntry, AttendanceRecord};

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Parses an `H:mm` wall-clock time, ignoring surrounding whitespace.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock_time(" 8:05 ").unwrap(), NaiveTime::from_hms_opt(8, 5, 0).unwrap());
/// assert!(parse_clock_time("25:00").is_err());
/// ```
pub fn parse_clock_time(text: &str) -> PayrollResult<NaiveTime> {
    let trimmed = text.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|e| PayrollError::MalformedRecord {
        record: trimmed.to_string(),
        message: format!("invalid time: {e}"),
    })
}

/// Calculates hours worked between login and logout, less the lunch break.
///
/// The result is negative when the span is shorter than the lunch break or
/// the logout is earlier than the login.
pub fn calculate_worked_hours(
    login: NaiveTime,
    logout: NaiveTime,
    lunch_break_minutes: i64,
) -> Decimal {
    let minutes = (logout - login).num_minutes() - lunch_break_minutes;
    Decimal::from(minutes) / MINUTES_PER_HOUR
}

/// Returns true when the login is strictly after the lateness cutoff.
pub fn is_late(login: NaiveTime, late_after: NaiveTime) -> bool {
    login > late_after
}

/// Validates an attendance entry and derives its worked hours and lateness.
///
/// # Errors
///
/// Returns [`PayrollError::MalformedRecord`] when a field is missing or a date
/// or time does not parse. A logout earlier than the login is kept and yields
/// negative worked hours.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::build_attendance_record;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::AttendanceEntry;
/// use rust_decimal::Decimal;
///
/// let policy = PayrollPolicy::default();
/// let entry = AttendanceEntry::new("10001", "06/03/2024", "8:30", "17:30");
///
/// let record = build_attendance_record(&entry, &policy.attendance).unwrap();
/// assert_eq!(record.worked_hours, Decimal::from(8));
/// assert!(record.is_late);
/// ```
pub fn build_attendance_record(
    entry: &AttendanceEntry,
    policy: &AttendancePolicy,
) -> PayrollResult<AttendanceRecord> {
    let malformed = |message: String| PayrollError::MalformedRecord {
        record: entry.describe(),
        message,
    };

    let date_text = required(&entry.date, "date").map_err(malformed)?;
    let login_text = required(&entry.login, "login time").map_err(malformed)?;
    let logout_text = required(&entry.logout, "logout time").map_err(malformed)?;

    let date = NaiveDate::parse_from_str(date_text, &policy.date_format)
        .map_err(|e| malformed(format!("invalid date '{date_text}': {e}")))?;
    let login = parse_clock_time(login_text)
        .map_err(|_| malformed(format!("invalid login time '{login_text}'")))?;
    let logout = parse_clock_time(logout_text)
        .map_err(|_| malformed(format!("invalid logout time '{logout_text}'")))?;

    Ok(AttendanceRecord {
        date,
        login,
        logout,
        worked_hours: calculate_worked_hours(login, logout, policy.lunch_break_minutes),
        is_late: is_late(login, policy.late_after),
    })
}

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(format!("missing {field}"))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayrollPolicy;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn policy() -> AttendancePolicy {
        PayrollPolicy::default().attendance
    }

    // ==========================================================================
    // ATT-001: clock parsing
    // ==========================================================================
    #[test]
    fn test_att_001_parses_single_digit_hour() {
        assert_eq!(parse_clock_time("8:59").unwrap(), time(8, 59));
        assert_eq!(parse_clock_time("18:31").unwrap(), time(18, 31));
    }

    #[test]
    fn test_att_001_rejects_garbage() {
        match parse_clock_time("noon") {
            Err(PayrollError::MalformedRecord { record, .. }) => assert_eq!(record, "noon"),
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    // ==========================================================================
    // ATT-002: worked hours
    // ==========================================================================
    #[test]
    fn test_att_002_full_day_less_lunch() {
        assert_eq!(calculate_worked_hours(time(8, 0), time(17, 0), 60), dec("8"));
    }

    #[test]
    fn test_att_002_fractional_hours() {
        assert_eq!(calculate_worked_hours(time(8, 0), time(17, 30), 60), dec("8.5"));
        assert_eq!(
            calculate_worked_hours(time(8, 0), time(16, 45), 60),
            dec("7.75")
        );
    }

    #[test]
    fn test_att_002_span_shorter_than_lunch_is_negative() {
        assert_eq!(calculate_worked_hours(time(8, 0), time(8, 30), 60), dec("-0.5"));
    }

    // ==========================================================================
    // ATT-003: lateness
    // ==========================================================================
    #[test]
    fn test_att_003_cutoff_is_not_late() {
        assert!(!is_late(time(8, 11), time(8, 11)));
        assert!(is_late(time(8, 12), time(8, 11)));
        assert!(!is_late(time(7, 45), time(8, 11)));
    }

    // ==========================================================================
    // ATT-004: record building
    // ==========================================================================
    #[test]
    fn test_att_004_builds_valid_record() {
        let entry = AttendanceEntry::new("10001", "06/03/2024", "8:00", "17:00");
        let record = build_attendance_record(&entry, &policy()).unwrap();

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(record.worked_hours, dec("8"));
        assert!(!record.is_late);
    }

    #[test]
    fn test_att_004_missing_logout_is_malformed() {
        let entry = AttendanceEntry::new("10001", "06/03/2024", "8:00", "");

        match build_attendance_record(&entry, &policy()) {
            Err(PayrollError::MalformedRecord { record, message }) => {
                assert_eq!(record, "employee 10001 on 06/03/2024");
                assert_eq!(message, "missing logout time");
            }
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_att_004_bad_date_is_malformed() {
        let entry = AttendanceEntry::new("10001", "2024-06-03", "8:00", "17:00");
        assert!(matches!(
            build_attendance_record(&entry, &policy()),
            Err(PayrollError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_att_004_logout_before_login_keeps_negative_hours() {
        let entry = AttendanceEntry::new("10001", "06/03/2024", "8:00", "7:00");
        let record = build_attendance_record(&entry, &policy()).unwrap();

        assert_eq!(record.login, time(8, 0));
        assert_eq!(record.logout, time(7, 0));
        assert_eq!(record.worked_hours, dec("-2"));
        assert!(!record.is_late);
    }

    #[test]
    fn test_att_004_overnight_row_is_not_wrapped() {
        let entry = AttendanceEntry::new("10001", "06/03/2024", "22:00", "6:00");
        let record = build_attendance_record(&entry, &policy()).unwrap();

        assert_eq!(record.worked_hours, dec("-17"));
        assert!(record.is_late);
    }
}
