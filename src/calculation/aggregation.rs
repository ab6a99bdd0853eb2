//! Attendance aggregation into weeks and pay periods.
//!
//! Valid attendance records are grouped by count, not by calendar: every
//! `days_per_week` consecutive records form a week and every
//! `days_per_period` records form a pay period. A trailing partial group
//! still closes a week and a period.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::attendance::build_attendance_record;
use super::weekly_overtime::{COMPANY_POLICY_BASIS, calculate_weekly_overtime};
use crate::config::PayrollPolicy;
use crate::models::{AttendanceEntry, AttendanceRecord, AuditStep, AuditWarning, WeekSummary};

/// One closed pay period of attendance for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodAggregate {
    /// The period number, starting at 1.
    pub period_number: u32,
    /// The records in the period, in input order.
    pub records: Vec<AttendanceRecord>,
    /// Weekly breakdown of the period.
    pub weeks: Vec<WeekSummary>,
    /// Total worked hours.
    pub total_hours: Decimal,
    /// Total weekly overtime pay.
    pub total_overtime_pay: Decimal,
    /// Audit steps for the weekly overtime and period totals.
    pub audit_steps: Vec<AuditStep>,
}

impl PeriodAggregate {
    /// Date of the first record.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    /// Date of the last record.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }

    /// Number of records in the period.
    pub fn days_worked(&self) -> u32 {
        self.records.len() as u32
    }

    /// Number of records flagged late.
    pub fn late_days(&self) -> u32 {
        self.records.iter().filter(|r| r.is_late).count() as u32
    }

    /// Overtime hours summed across weeks.
    pub fn overtime_hours(&self) -> Decimal {
        self.weeks.iter().map(|w| w.overtime_hours).sum()
    }
}

/// Output of [`aggregate_attendance`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceAggregation {
    /// Closed periods in chronological order.
    pub periods: Vec<PeriodAggregate>,
    /// One warning per skipped entry.
    pub warnings: Vec<AuditWarning>,
    /// The step number to continue the audit trail from.
    pub next_step_number: u32,
}

/// Aggregates one employee's attendance entries into pay periods.
///
/// Entries that fail validation are skipped with a `MALFORMED_RECORD`
/// warning; chunking only counts valid records. Week numbers run across the
/// whole log, so the first week of period 2 is week 5 with the default
/// policy.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::aggregate_attendance;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::AttendanceEntry;
/// use rust_decimal::Decimal;
///
/// let entries: Vec<AttendanceEntry> = (1..=7)
///     .map(|day| AttendanceEntry::new("10001", format!("06/{:02}/2024", day), "8:00", "17:00"))
///     .collect();
///
/// let aggregation = aggregate_attendance(&entries, Decimal::from(100), &PayrollPolicy::default(), 1);
///
/// assert_eq!(aggregation.periods.len(), 1);
/// assert_eq!(aggregation.periods[0].weeks.len(), 2);
/// assert_eq!(aggregation.periods[0].total_hours, Decimal::from(56));
/// ```
pub fn aggregate_attendance(
    entries: &[AttendanceEntry],
    hourly_rate: Decimal,
    policy: &PayrollPolicy,
    step_number_start: u32,
) -> AttendanceAggregation {
    let mut warnings = Vec::new();
    let records: Vec<AttendanceRecord> = entries
        .iter()
        .filter_map(
            |entry| match build_attendance_record(entry, &policy.attendance) {
                Ok(record) => Some(record),
                Err(e) => {
                    warnings.push(AuditWarning::from(&e));
                    None
                }
            },
        )
        .collect();

    let mut step_number = step_number_start;
    let mut week_number = 0u32;
    let mut periods = Vec::new();

    for (index, chunk) in records.chunks(policy.days_per_period.max(1)).enumerate() {
        let period_number = index as u32 + 1;
        let mut weeks = Vec::new();
        let mut audit_steps = Vec::new();

        for week in chunk.chunks(policy.days_per_week.max(1)) {
            week_number += 1;
            let weekly_hours: Decimal = week.iter().map(|r| r.worked_hours).sum();
            let overtime = calculate_weekly_overtime(
                weekly_hours,
                hourly_rate,
                &policy.overtime,
                week_number,
                step_number,
            );
            step_number += 1;

            weeks.push(WeekSummary {
                week_number,
                days: week.len() as u32,
                total_hours: weekly_hours,
                overtime_hours: overtime.overtime_hours,
                overtime_pay: overtime.overtime_pay,
            });
            audit_steps.push(overtime.audit_step);
        }

        let total_hours: Decimal = weeks.iter().map(|w| w.total_hours).sum();
        let total_overtime_pay: Decimal = weeks.iter().map(|w| w.overtime_pay).sum();
        let late_days = chunk.iter().filter(|r| r.is_late).count();

        audit_steps.push(AuditStep {
            step_number,
            rule_id: "period_attendance".to_string(),
            rule_name: "Pay Period Attendance".to_string(),
            legal_basis: COMPANY_POLICY_BASIS.to_string(),
            input: serde_json::json!({
                "period_number": period_number,
                "records": chunk.len(),
                "weeks": weeks.len(),
                "lunch_break_minutes": policy.attendance.lunch_break_minutes,
                "late_after": policy.attendance.late_after.format("%H:%M").to_string()
            }),
            output: serde_json::json!({
                "total_hours": total_hours.round_dp(2).to_string(),
                "total_overtime_pay": total_overtime_pay.round_dp(2).to_string(),
                "late_days": late_days
            }),
            reasoning: format!(
                "Period {}: {} records in {} weeks, {}h worked, {} late",
                period_number,
                chunk.len(),
                weeks.len(),
                total_hours.round_dp(2).normalize(),
                late_days
            ),
        });
        step_number += 1;

        periods.push(PeriodAggregate {
            period_number,
            records: chunk.to_vec(),
            weeks,
            total_hours,
            total_overtime_pay,
            audit_steps,
        });
    }

    AttendanceAggregation {
        periods,
        warnings,
        next_step_number: step_number,
    }
}
