//! Employee model and related types.
//!
//! This module defines the Employee struct and the government identifiers
//! carried on the employee master record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Government-issued identifiers of an employee.
///
/// These are carried for display only and never participate in computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernmentIds {
    /// Social Security System number.
    pub sss: String,
    /// PhilHealth number.
    pub philhealth: String,
    /// Tax identification number.
    pub tin: String,
    /// Pag-IBIG (HDMF) number.
    pub pag_ibig: String,
}

/// Represents an employee on the payroll.
///
/// Only `employee_number`, the names, `basic_salary` and `hourly_rate` are
/// used by the payroll calculation; the remaining profile fields are inert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee number (the directory key).
    pub employee_number: String,
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// Birthday as written in the master file.
    #[serde(default)]
    pub birthday: String,
    /// Home address.
    #[serde(default)]
    pub address: String,
    /// Contact number.
    #[serde(default)]
    pub phone_number: String,
    /// Government identifiers.
    #[serde(default)]
    pub government_ids: GovernmentIds,
    /// Employment status (e.g. "Regular", "Probationary").
    #[serde(default)]
    pub status: String,
    /// Job position.
    #[serde(default)]
    pub position: String,
    /// Name of the immediate supervisor.
    #[serde(default)]
    pub immediate_supervisor: String,
    /// Fixed monthly basic salary; the base for every deduction.
    pub basic_salary: Decimal,
    /// Monthly rice subsidy.
    #[serde(default)]
    pub rice_subsidy: Decimal,
    /// Monthly phone allowance.
    #[serde(default)]
    pub phone_allowance: Decimal,
    /// Monthly clothing allowance.
    #[serde(default)]
    pub clothing_allowance: Decimal,
    /// Gross semi-monthly rate.
    #[serde(default)]
    pub gross_semi_monthly_rate: Decimal,
    /// Hourly rate applied to worked hours.
    pub hourly_rate: Decimal,
}

impl Employee {
    /// Creates an employee carrying only the fields used by the calculation.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new(
    ///     "10001",
    ///     "Garcia",
    ///     "Manuel",
    ///     Decimal::new(20000, 0),
    ///     Decimal::new(100, 0),
    /// );
    /// assert_eq!(employee.full_name(), "Manuel Garcia");
    /// ```
    pub fn new(
        employee_number: impl Into<String>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        basic_salary: Decimal,
        hourly_rate: Decimal,
    ) -> Self {
        Self {
            employee_number: employee_number.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            birthday: String::new(),
            address: String::new(),
            phone_number: String::new(),
            government_ids: GovernmentIds::default(),
            status: String::new(),
            position: String::new(),
            immediate_supervisor: String::new(),
            basic_salary,
            rice_subsidy: Decimal::ZERO,
            phone_allowance: Decimal::ZERO,
            clothing_allowance: Decimal::ZERO,
            gross_semi_monthly_rate: Decimal::ZERO,
            hourly_rate,
        }
    }

    /// Returns the name in "First Last" order, as printed on receipts.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee() -> Employee {
        Employee::new(
            "10001",
            "Garcia",
            "Manuel",
            Decimal::new(90000, 0),
            Decimal::new(53571, 2),
        )
    }

    #[test]
    fn test_full_name_is_first_then_last() {
        let employee = create_test_employee();
        assert_eq!(employee.full_name(), "Manuel Garcia");
    }

    #[test]
    fn test_new_defaults_inert_fields() {
        let employee = create_test_employee();
        assert!(employee.address.is_empty());
        assert_eq!(employee.government_ids, GovernmentIds::default());
        assert_eq!(employee.rice_subsidy, Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_minimal_employee() {
        let json = r#"{
            "employee_number": "10002",
            "last_name": "Lim",
            "first_name": "Antonio",
            "basic_salary": "60000",
            "hourly_rate": "357.14"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.employee_number, "10002");
        assert_eq!(employee.basic_salary, Decimal::new(60000, 0));
        assert_eq!(employee.hourly_rate, Decimal::new(35714, 2));
        assert!(employee.position.is_empty());
    }

    #[test]
    fn test_serialize_employee() {
        let mut employee = create_test_employee();
        employee.government_ids.sss = "44-4506057-3".to_string();

        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }
}
