//! Calculation logic for the Payroll Engine.
//!
//! This module contains the statutory deduction calculators (SSS,
//! PhilHealth, Pag-IBIG and withholding tax), daily attendance and weekly
//! overtime rules, aggregation of attendance into pay periods, the pay
//! period calculation, and the batch runner that ties them together.

mod aggregation;
mod attendance;
mod pag_ibig;
mod payroll;
mod philhealth;
mod run;
mod sss;
mod weekly_overtime;
mod withholding_tax;

pub use aggregation::{AttendanceAggregation, PeriodAggregate, aggregate_attendance};
pub use attendance::{build_attendance_record, calculate_worked_hours, is_late, parse_clock_time};
pub use pag_ibig::{PAG_IBIG_CAP, PAG_IBIG_LEGAL_BASIS, calculate_pag_ibig_contribution, pag_ibig_rates};
pub use payroll::{PayPeriodCalculation, calculate_deductions, calculate_pay_period};
pub use philhealth::{
    PHILHEALTH_LEGAL_BASIS, PHILHEALTH_RATE, PHILHEALTH_SALARY_CEILING, PHILHEALTH_SALARY_FLOOR,
    calculate_philhealth_contribution, calculate_philhealth_employee_share,
    calculate_philhealth_employer_share, calculate_philhealth_premium,
};
pub use run::{ENGINE_VERSION, process_payroll};
pub use sss::{SSS_LEGAL_BASIS, SssBracket, calculate_sss_contribution, sss_bracket};
pub use weekly_overtime::{COMPANY_POLICY_BASIS, WeeklyOvertimeResult, calculate_weekly_overtime};
pub use withholding_tax::{
    TaxBracket, WITHHOLDING_TAX_LEGAL_BASIS, calculate_withholding_tax, tax_bracket,
};

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

/// Rejects negative amounts for the named calculator.
pub(crate) fn ensure_non_negative(calculator: &str, amount: Decimal) -> PayrollResult<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(PayrollError::InvalidArgument {
            calculator: calculator.to_string(),
            message: format!("amount cannot be negative: {amount}"),
        });
    }
    Ok(())
}
