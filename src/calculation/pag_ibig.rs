//! Pag-IBIG (HDMF) contribution calculation.
//!
//! Employee rate is 1% for salaries from 1,000 to 1,500 and 2% above that;
//! employer rate is 2% whenever the employee contributes. The combined
//! contribution is capped at 100.00, with both shares scaled down in
//! proportion.

use rust_decimal::Decimal;

use super::ensure_non_negative;
use crate::error::PayrollResult;
use crate::models::PagIbigContribution;

/// Statute the contribution schedule comes from.
pub const PAG_IBIG_LEGAL_BASIS: &str = "RA 9679 (Home Development Mutual Fund Law of 2009)";

/// Maximum combined employee and employer contribution.
pub const PAG_IBIG_CAP: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

const LOWER_RATE_MIN_SALARY: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);
const LOWER_RATE_MAX_SALARY: Decimal = Decimal::from_parts(1500, 0, 0, false, 0);
const ONE_PERCENT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
const TWO_PERCENT: Decimal = Decimal::from_parts(2, 0, 0, false, 2);
const CALCULATOR: &str = "Pag-IBIG";

/// Returns `(employee_rate, employer_rate)` for a salary.
pub fn pag_ibig_rates(salary: Decimal) -> (Decimal, Decimal) {
    let employee_rate = if salary < LOWER_RATE_MIN_SALARY {
        Decimal::ZERO
    } else if salary <= LOWER_RATE_MAX_SALARY {
        ONE_PERCENT
    } else {
        TWO_PERCENT
    };

    let employer_rate = if employee_rate > Decimal::ZERO {
        TWO_PERCENT
    } else {
        Decimal::ZERO
    };

    (employee_rate, employer_rate)
}

/// Calculates the Pag-IBIG contribution split.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_pag_ibig_contribution;
/// use rust_decimal::Decimal;
///
/// let contribution = calculate_pag_ibig_contribution(Decimal::from(1000)).unwrap();
/// assert_eq!(
///     contribution.as_array(),
///     [Decimal::from(10), Decimal::from(20), Decimal::from(30)]
/// );
///
/// let capped = calculate_pag_ibig_contribution(Decimal::from(20000)).unwrap();
/// assert_eq!(capped.total, Decimal::from(100));
/// ```
pub fn calculate_pag_ibig_contribution(salary: Decimal) -> PayrollResult<PagIbigContribution> {
    ensure_non_negative(CALCULATOR, salary)?;

    let (employee_rate, employer_rate) = pag_ibig_rates(salary);
    let employee = salary * employee_rate;
    let employer = salary * employer_rate;
    let total = employee + employer;

    if total <= PAG_IBIG_CAP {
        return Ok(PagIbigContribution {
            employee,
            employer,
            total,
        });
    }

    // Employer share absorbs any rounding so the total is exactly the cap.
    let scaled_employee = employee * PAG_IBIG_CAP / total;
    Ok(PagIbigContribution {
        employee: scaled_employee,
        employer: PAG_IBIG_CAP - scaled_employee,
        total: PAG_IBIG_CAP,
    })
}
