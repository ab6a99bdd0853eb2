//! Payroll result models for the Payroll Engine.
//!
//! This module contains the [`PayrollRun`] type and its associated structures
//! that capture all outputs of a batch: per-period results, per-employee audit
//! traces, warnings, and the employees that failed.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Deductions;
use crate::error::PayrollError;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The statute or company policy the rule comes from.
    pub legal_basis: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated while loading or aggregating data.
///
/// Warnings record rows that were skipped; they never stop a batch.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
/// use payroll_engine::models::AuditWarning;
///
/// let warning = AuditWarning::from(&PayrollError::UnknownEmployee {
///     employee_number: "99999".to_string(),
/// });
/// assert_eq!(warning.code, "UNKNOWN_EMPLOYEE");
/// assert_eq!(warning.message, "Unknown employee: 99999");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a new warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

impl From<&PayrollError> for AuditWarning {
    fn from(error: &PayrollError) -> Self {
        Self::new(error.code(), error.to_string(), "medium")
    }
}

/// The complete audit trace for one employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during aggregation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Hours and overtime for one fixed-size week of attendance records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// The week number, counted across the employee's whole log.
    pub week_number: u32,
    /// The number of records in the week.
    pub days: u32,
    /// Total worked hours in the week.
    pub total_hours: Decimal,
    /// Hours beyond the weekly threshold.
    pub overtime_hours: Decimal,
    /// Premium pay for the overtime hours.
    pub overtime_pay: Decimal,
}

/// The payroll result for one employee and one pay period.
///
/// Invariant: `net_pay = gross_pay - deductions.employee_total() + allowance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodResult {
    /// The period number, starting at 1 for each employee.
    pub period_number: u32,
    /// Date of the first record in the period.
    pub start_date: NaiveDate,
    /// Date of the last record in the period.
    pub end_date: NaiveDate,
    /// Number of attendance records in the period.
    pub days_worked: u32,
    /// Number of records flagged late.
    pub late_days: u32,
    /// Total worked hours.
    pub total_hours: Decimal,
    /// Total overtime hours across the period's weeks.
    pub overtime_hours: Decimal,
    /// Total overtime pay across the period's weeks.
    pub overtime_pay: Decimal,
    /// Worked hours times hourly rate.
    pub base_pay: Decimal,
    /// Base pay plus overtime pay.
    pub gross_pay: Decimal,
    /// The four statutory deductions.
    pub deductions: Deductions,
    /// Flat allowance added to net pay.
    pub allowance: Decimal,
    /// Take-home pay.
    pub net_pay: Decimal,
    /// The weeks that make up the period.
    pub weeks: Vec<WeekSummary>,
}

/// All pay periods computed for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayroll {
    /// The employee number.
    pub employee_number: String,
    /// The employee's full name.
    pub employee_name: String,
    /// Pay periods in chronological order.
    pub periods: Vec<PayPeriodResult>,
    /// Audit trace of every rule applied for this employee.
    pub audit_trace: AuditTrace,
}

/// An employee whose payroll could not be computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFailure {
    /// The employee number.
    pub employee_number: String,
    /// The error code.
    pub code: String,
    /// The error message.
    pub message: String,
}

impl EmployeeFailure {
    /// Records a failure for an employee.
    pub fn new(employee_number: impl Into<String>, error: &PayrollError) -> Self {
        Self {
            employee_number: employee_number.into(),
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}

/// The complete result of a payroll batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// Successful payrolls, in ascending employee-number order.
    pub employees: Vec<EmployeePayroll>,
    /// Employees whose payroll was omitted.
    pub failures: Vec<EmployeeFailure>,
    /// Batch-level warnings (e.g. attendance for unknown employees).
    pub warnings: Vec<AuditWarning>,
}

impl PayrollRun {
    /// Finds the payroll of one employee.
    pub fn employee(&self, employee_number: &str) -> Option<&EmployeePayroll> {
        self.employees
            .iter()
            .find(|e| e.employee_number == employee_number)
    }

    /// Total number of pay periods across all employees.
    pub fn period_count(&self) -> usize {
        self.employees.iter().map(|e| e.periods.len()).sum()
    }
}
