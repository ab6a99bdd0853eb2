//! Employee directory keyed by employee number.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Employee;

/// The set of employees known to a payroll run.
///
/// Employees are kept ordered by employee number so that batch output is
/// deterministic. Inserting an employee number that already exists replaces
/// the earlier record, matching a last-row-wins master file.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, EmployeeDirectory};
/// use rust_decimal::Decimal;
///
/// let mut directory = EmployeeDirectory::new();
/// directory.insert(Employee::new("10001", "Garcia", "Manuel", Decimal::new(20000, 0), Decimal::new(100, 0)));
///
/// assert!(directory.get("10001").is_some());
/// assert!(directory.get("99999").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDirectory {
    employees: BTreeMap<String, Employee>,
}

impl EmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee, returning the record it replaced, if any.
    pub fn insert(&mut self, employee: Employee) -> Option<Employee> {
        self.employees
            .insert(employee.employee_number.clone(), employee)
    }

    /// Looks up an employee by number.
    pub fn get(&self, employee_number: &str) -> Option<&Employee> {
        self.employees.get(employee_number)
    }

    /// Returns true if the employee number is known.
    pub fn contains(&self, employee_number: &str) -> bool {
        self.employees.contains_key(employee_number)
    }

    /// Iterates employees in ascending employee-number order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the directory holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl FromIterator<Employee> for EmployeeDirectory {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        let mut directory = Self::new();
        for employee in iter {
            directory.insert(employee);
        }
        directory
    }
}
