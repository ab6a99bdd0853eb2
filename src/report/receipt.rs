//! Payroll receipt rendering.

use std::fmt;

use super::money;
use crate::config::CompanyMetadata;
use crate::models::{EmployeePayroll, PayPeriodResult, PayrollRun, WeekSummary};

const DOUBLE_RULE: &str = "=========================================";
const SINGLE_RULE: &str = "-----------------------------------------";

/// A printable receipt for one employee and one pay period.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::process_payroll;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::{AttendanceEntry, Employee, EmployeeDirectory};
/// use payroll_engine::report::Receipt;
/// use rust_decimal::Decimal;
///
/// let directory: EmployeeDirectory = [Employee::new(
///     "10001", "Garcia", "Manuel", Decimal::from(20000), Decimal::from(100),
/// )]
/// .into_iter()
/// .collect();
/// let entries = vec![AttendanceEntry::new("10001", "06/03/2024", "8:00", "17:00")];
/// let run = process_payroll(&directory, &entries, &PayrollPolicy::default());
///
/// let payroll = &run.employees[0];
/// let receipt = Receipt::new(payroll, &payroll.periods[0]).to_string();
/// assert!(receipt.contains("Employee: Manuel Garcia"));
/// assert!(receipt.contains("SSS Contribution: 900.00"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'a> {
    employee_name: &'a str,
    employee_number: &'a str,
    period: &'a PayPeriodResult,
}

impl<'a> Receipt<'a> {
    /// Creates a receipt for one period of an employee's payroll.
    pub fn new(payroll: &'a EmployeePayroll, period: &'a PayPeriodResult) -> Self {
        Self {
            employee_name: &payroll.employee_name,
            employee_number: &payroll.employee_number,
            period,
        }
    }
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.period;
        let d = &p.deductions;

        writeln!(f, "{DOUBLE_RULE}")?;
        writeln!(f, "               PAYROLL RECEIPT           ")?;
        writeln!(f, "{DOUBLE_RULE}")?;
        writeln!(f, "Employee: {}", self.employee_name)?;
        writeln!(f, "Employee Number: {}", self.employee_number)?;
        writeln!(
            f,
            "Period {}: {} to {}",
            p.period_number,
            p.start_date.format("%m/%d/%Y"),
            p.end_date.format("%m/%d/%Y")
        )?;
        writeln!(f, "{SINGLE_RULE}")?;
        writeln!(f, "Days Worked: {} ({} late)", p.days_worked, p.late_days)?;
        writeln!(f, "Total Hours: {}", money(p.total_hours))?;
        writeln!(f, "Overtime Pay: {}", money(p.overtime_pay))?;
        writeln!(f, "Total Salary: {}", money(p.gross_pay))?;
        writeln!(f, "{SINGLE_RULE}")?;
        writeln!(f, "SSS Contribution: {}", money(d.sss))?;
        writeln!(
            f,
            "PhilHealth Employee Share: {}",
            money(d.philhealth.employee_share)
        )?;
        writeln!(
            f,
            "Pag-IBIG Employee Contribution: {}",
            money(d.pag_ibig.employee)
        )?;
        writeln!(
            f,
            "Pag-IBIG Employer Contribution: {}",
            money(d.pag_ibig.employer)
        )?;
        writeln!(f, "Total Pag-IBIG Contribution: {}", money(d.pag_ibig.total))?;
        writeln!(f, "Withholding Tax : {}", money(d.withholding_tax))?;
        writeln!(f, "Allowance : {}", money(p.allowance))?;
        writeln!(f, "{SINGLE_RULE}")?;
        writeln!(f, "Net Salary: {}", money(p.net_pay))?;
        writeln!(f, "{DOUBLE_RULE}")
    }
}

/// Renders every receipt in a run, each preceded by its weekly breakdown,
/// followed by a summary of skipped employees and warnings.
pub fn render_run(run: &PayrollRun) -> String {
    let mut out = String::new();

    for payroll in &run.employees {
        if payroll.periods.is_empty() {
            out.push_str(&format!(
                "No attendance for {} ({})\n\n",
                payroll.employee_name, payroll.employee_number
            ));
            continue;
        }
        for period in &payroll.periods {
            for week in &period.weeks {
                out.push_str(&format!("{}\n", WeekLine(week)));
            }
            out.push_str(&Receipt::new(payroll, period).to_string());
            out.push('\n');
        }
    }

    if !run.failures.is_empty() {
        out.push_str(&format!("Failed employees: {}\n", run.failures.len()));
        for failure in &run.failures {
            out.push_str(&format!(
                "  {} [{}] {}\n",
                failure.employee_number, failure.code, failure.message
            ));
        }
    }

    if !run.warnings.is_empty() {
        out.push_str(&format!("Warnings: {}\n", run.warnings.len()));
        for warning in &run.warnings {
            out.push_str(&format!("  [{}] {}\n", warning.code, warning.message));
        }
    }

    out
}

/// One line of the weekly breakdown printed ahead of each receipt.
struct WeekLine<'a>(&'a WeekSummary);

impl fmt::Display for WeekLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let week = self.0;
        write!(
            f,
            "Week {}: Total Hours = {}, Overtime Hours = {}, Overtime Pay = {}",
            week.week_number,
            money(week.total_hours),
            money(week.overtime_hours),
            money(week.overtime_pay)
        )
    }
}

/// Renders the title line naming the company, its policy version and the
/// currency every amount is in.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::report::render_header;
///
/// let loader = ConfigLoader::load("./config/motorph")?;
/// print!("{}", render_header(loader.company()));
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
pub fn render_header(company: &CompanyMetadata) -> String {
    format!(
        "{} payroll (policy {}), amounts in {}\n\n",
        company.name, company.version, company.currency
    )
}
