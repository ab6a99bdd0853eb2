//! Employee master file reader.

use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use rust_decimal::Decimal;
use tracing::{info, warn};

use super::{Rows, SourceData, field, load_rows, parse_amount, read_rows};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AuditWarning, Employee, EmployeeDirectory, GovernmentIds};

/// Number of columns in the employee master file.
pub const EMPLOYEE_COLUMNS: usize = 19;

const SOURCE: &str = "employees";

/// Reads the employee master file from any reader.
///
/// Columns, in order: employee number, last name, first name, birthday,
/// address, phone number, SSS no., PhilHealth no., TIN, Pag-IBIG no.,
/// status, position, immediate supervisor, basic salary, rice subsidy,
/// phone allowance, clothing allowance, gross semi-monthly rate, hourly
/// rate.
///
/// A row with a duplicate employee number replaces the earlier row.
///
/// # Examples
///
/// ```
/// use payroll_engine::sources::read_employees;
///
/// let csv = "\
/// Employee #,Last Name,First Name,Birthday,Address,Phone Number,SSS #,Philhealth #,TIN #,Pag-ibig #,Status,Position,Immediate Supervisor,Basic Salary,Rice Subsidy,Phone Allowance,Clothing Allowance,Gross Semi-monthly Rate,Hourly Rate
/// 10001,Garcia,Manuel III,10/11/1983,Valero Carpark Building,966-860-270,44-4506057-3,820126853951,442-605-657-000,691295330870,Regular,Chief Executive Officer,N/A,\"90,000\",\"1,500\",\"2,000\",\"1,000\",\"45,000\",535.71
/// ";
///
/// let employees = read_employees(csv.as_bytes()).unwrap();
/// let manuel = employees.data.get("10001").unwrap();
/// assert_eq!(manuel.basic_salary, rust_decimal::Decimal::from(90000));
/// assert!(employees.warnings.is_empty());
/// ```
pub fn read_employees<R: Read>(reader: R) -> PayrollResult<SourceData<EmployeeDirectory>> {
    Ok(employees_from_rows(read_rows(reader, SOURCE)?))
}

/// Loads the employee master file from a `.csv` or `.xlsx` path.
///
/// A workbook is read from its first sheet; the header row is skipped.
pub fn load_employees<P: AsRef<Path>>(path: P) -> PayrollResult<SourceData<EmployeeDirectory>> {
    let path = path.as_ref();
    let loaded = employees_from_rows(load_rows(path, SOURCE)?);

    for warning in &loaded.warnings {
        warn!(path = %path.display(), code = %warning.code, message = %warning.message, "Skipped employee row");
    }
    info!(
        path = %path.display(),
        employees = loaded.data.len(),
        skipped = loaded.warnings.len(),
        "Loaded employees"
    );

    Ok(loaded)
}

fn employees_from_rows((rows, mut warnings): Rows) -> SourceData<EmployeeDirectory> {
    let mut directory = EmployeeDirectory::new();

    for (line, record) in rows {
        match parse_employee(&record, line) {
            Ok(employee) => {
                let number = employee.employee_number.clone();
                if directory.insert(employee).is_some() {
                    warnings.push(AuditWarning::new(
                        "DUPLICATE_EMPLOYEE",
                        format!("Employee {number} on line {line} replaces an earlier row"),
                        "low",
                    ));
                }
            }
            Err(e) => warnings.push(AuditWarning::from(&e)),
        }
    }

    SourceData {
        data: directory,
        warnings,
    }
}

fn parse_employee(record: &StringRecord, line: u64) -> PayrollResult<Employee> {
    if record.len() < EMPLOYEE_COLUMNS {
        return Err(PayrollError::MalformedRecord {
            record: format!("{SOURCE} line {line}"),
            message: format!(
                "expected {EMPLOYEE_COLUMNS} fields, found {}",
                record.len()
            ),
        });
    }

    let employee_number = field(record, 0);
    if employee_number.is_empty() {
        return Err(invalid("employee_number", line, "missing employee number"));
    }

    let basic_salary = required_amount(record, 13, "basic_salary", line)?;
    let hourly_rate = required_amount(record, 18, "hourly_rate", line)?;

    Ok(Employee {
        employee_number,
        last_name: field(record, 1),
        first_name: field(record, 2),
        birthday: field(record, 3),
        address: field(record, 4),
        phone_number: field(record, 5),
        government_ids: GovernmentIds {
            sss: field(record, 6),
            philhealth: field(record, 7),
            tin: field(record, 8),
            pag_ibig: field(record, 9),
        },
        status: field(record, 10),
        position: field(record, 11),
        immediate_supervisor: field(record, 12),
        basic_salary,
        rice_subsidy: optional_amount(record, 14),
        phone_allowance: optional_amount(record, 15),
        clothing_allowance: optional_amount(record, 16),
        gross_semi_monthly_rate: optional_amount(record, 17),
        hourly_rate,
    })
}

fn required_amount(
    record: &StringRecord,
    index: usize,
    name: &str,
    line: u64,
) -> PayrollResult<Decimal> {
    let text = record.get(index).unwrap_or_default();
    parse_amount(text).ok_or_else(|| invalid(name, line, &format!("unparseable amount '{text}'")))
}

fn optional_amount(record: &StringRecord, index: usize) -> Decimal {
    record
        .get(index)
        .and_then(parse_amount)
        .unwrap_or_default()
}

fn invalid(field: &str, line: u64, message: &str) -> PayrollError {
    PayrollError::InvalidEmployee {
        field: field.to_string(),
        message: format!("line {line}: {message}"),
    }
}
