//! Employee listing and profile views.

use std::fmt;

use super::money;
use crate::models::{Employee, EmployeeDirectory};

const TABLE_RULE: &str = "============================================================";

/// The whole master file as a table of number, name, birthday, basic salary
/// and hourly rate, in employee number order.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, EmployeeDirectory};
/// use payroll_engine::report::EmployeeTable;
/// use rust_decimal::Decimal;
///
/// let directory: EmployeeDirectory = [Employee::new(
///     "10001", "Garcia", "Manuel", Decimal::from(90000), Decimal::new(53571, 2),
/// )]
/// .into_iter()
/// .collect();
///
/// let table = EmployeeTable(&directory).to_string();
/// assert!(table.contains("Manuel Garcia"));
/// assert!(table.contains("₱535.71"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EmployeeTable<'a>(pub &'a EmployeeDirectory);

impl fmt::Display for EmployeeTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "======================= EMPLOYEE DATA ======================="
        )?;
        writeln!(
            f,
            "{:<10} {:<20} {:<15} {:<15} {}",
            "EMP #", "NAME", "BIRTHDAY", "BASIC SALARY", "HOURLY RATE"
        )?;
        writeln!(f, "{TABLE_RULE}")?;

        for employee in self.0.iter() {
            let basic = format!("₱{}", money(employee.basic_salary));
            writeln!(
                f,
                "{:<10} {:<20} {:<15} {:<15} ₱{}",
                employee.employee_number,
                employee.full_name(),
                employee.birthday,
                basic,
                money(employee.hourly_rate)
            )?;
        }

        writeln!(f, "{TABLE_RULE}")
    }
}

/// One employee's full profile: identity, government numbers, position and
/// pay rates.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeDetails<'a>(pub &'a Employee);

impl fmt::Display for EmployeeDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = self.0;
        let ids = &e.government_ids;

        writeln!(
            f,
            "================= EMPLOYEE DETAILED INFO ================="
        )?;
        writeln!(f, "Employee Number: {}", e.employee_number)?;
        writeln!(f, "Name: {}", e.full_name())?;
        writeln!(f, "Birthday: {}", e.birthday)?;
        writeln!(f, "Address: {}", e.address)?;
        writeln!(f, "Phone Number: {}", e.phone_number)?;
        writeln!(f, "SSS Number: {}", ids.sss)?;
        writeln!(f, "PhilHealth Number: {}", ids.philhealth)?;
        writeln!(f, "TIN Number: {}", ids.tin)?;
        writeln!(f, "Pag-IBIG Number: {}", ids.pag_ibig)?;
        writeln!(f, "Status: {}", e.status)?;
        writeln!(f, "Position: {}", e.position)?;
        writeln!(f, "Immediate Supervisor: {}", e.immediate_supervisor)?;
        writeln!(f)?;
        writeln!(f, "Salary Information:")?;
        writeln!(f, "Basic Salary: ₱{}", money(e.basic_salary))?;
        writeln!(f, "Hourly Rate: ₱{}", money(e.hourly_rate))?;
        writeln!(
            f,
            "==========================================================="
        )
    }
}
