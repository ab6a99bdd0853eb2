//! Batch payroll processing.
//!
//! Groups attendance by employee, aggregates each employee's log into pay
//! periods and computes every period. One employee's failure never stops
//! the batch.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::aggregation::aggregate_attendance;
use super::payroll::calculate_pay_period;
use crate::config::PayrollPolicy;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    AttendanceEntry, AuditTrace, AuditWarning, Employee, EmployeeDirectory, EmployeeFailure,
    EmployeePayroll, PayrollRun,
};

/// The engine version stamped on every run.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs payroll for every employee in the directory.
///
/// Attendance entries whose employee number is not in the directory are
/// skipped with one `UNKNOWN_EMPLOYEE` warning per distinct number.
/// Employees are processed in ascending employee-number order; an employee
/// without attendance yields a payroll with no periods.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::process_payroll;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::{AttendanceEntry, Employee, EmployeeDirectory};
/// use rust_decimal::Decimal;
///
/// let directory: EmployeeDirectory = [Employee::new(
///     "10001", "Garcia", "Manuel", Decimal::from(20000), Decimal::from(100),
/// )]
/// .into_iter()
/// .collect();
/// let entries = vec![AttendanceEntry::new("10001", "06/03/2024", "8:00", "17:00")];
///
/// let run = process_payroll(&directory, &entries, &PayrollPolicy::default());
/// assert_eq!(run.period_count(), 1);
/// assert!(run.failures.is_empty());
/// ```
pub fn process_payroll(
    directory: &EmployeeDirectory,
    entries: &[AttendanceEntry],
    policy: &PayrollPolicy,
) -> PayrollRun {
    let run_id = Uuid::new_v4();
    info!(
        %run_id,
        employees = directory.len(),
        entries = entries.len(),
        "Starting payroll run"
    );

    let mut warnings = Vec::new();
    let mut unknown = BTreeSet::new();
    let mut by_employee: BTreeMap<&str, Vec<AttendanceEntry>> = BTreeMap::new();

    for entry in entries {
        let number = entry.employee_number.trim();
        if directory.contains(number) {
            by_employee.entry(number).or_default().push(entry.clone());
        } else if unknown.insert(number) {
            let error = PayrollError::UnknownEmployee {
                employee_number: number.to_string(),
            };
            warn!(employee_number = number, "Skipping attendance for unknown employee");
            warnings.push(AuditWarning::from(&error));
        }
    }

    let mut employees = Vec::new();
    let mut failures = Vec::new();

    for employee in directory.iter() {
        let number = &employee.employee_number;
        let log = by_employee
            .get(number.as_str())
            .map_or(&[][..], Vec::as_slice);

        match process_employee(employee, log, policy) {
            Ok(payroll) => {
                debug!(
                    employee_number = %number,
                    periods = payroll.periods.len(),
                    duration_us = payroll.audit_trace.duration_us,
                    "Employee payroll computed"
                );
                employees.push(payroll);
            }
            Err(e) => {
                warn!(
                    employee_number = %number,
                    code = e.code(),
                    error = %e,
                    "Employee payroll failed"
                );
                failures.push(EmployeeFailure::new(number.clone(), &e));
            }
        }
    }

    info!(
        %run_id,
        employees = employees.len(),
        failures = failures.len(),
        warnings = warnings.len(),
        "Payroll run complete"
    );

    PayrollRun {
        run_id,
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        employees,
        failures,
        warnings,
    }
}

/// Computes every pay period for one employee.
fn process_employee(
    employee: &Employee,
    entries: &[AttendanceEntry],
    policy: &PayrollPolicy,
) -> PayrollResult<EmployeePayroll> {
    let start = Instant::now();

    let aggregation = aggregate_attendance(entries, employee.hourly_rate, policy, 1);
    for warning in &aggregation.warnings {
        warn!(
            employee_number = %employee.employee_number,
            code = %warning.code,
            message = %warning.message,
            "Skipped attendance record"
        );
    }

    let mut steps: Vec<_> = aggregation
        .periods
        .iter()
        .flat_map(|period| period.audit_steps.iter().cloned())
        .collect();

    let mut step_number = aggregation.next_step_number;
    let mut periods = Vec::with_capacity(aggregation.periods.len());
    for aggregate in &aggregation.periods {
        let calculation = calculate_pay_period(employee, aggregate, policy, step_number)?;
        step_number = calculation.next_step_number;
        steps.extend(calculation.audit_steps);
        periods.push(calculation.result);
    }

    Ok(EmployeePayroll {
        employee_number: employee.employee_number.clone(),
        employee_name: employee.full_name(),
        periods,
        audit_trace: AuditTrace {
            steps,
            warnings: aggregation.warnings,
            duration_us: start.elapsed().as_micros() as u64,
        },
    })
}
