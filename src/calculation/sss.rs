//! SSS contribution calculation.
//!
//! The Social Security System contribution is a step function of monthly
//! salary: brackets 500 pesos wide, each 22.50 higher than the last, from
//! 135.00 below 3,250 up to 1,125.00 at 24,750 and above.

use rust_decimal::Decimal;

use super::ensure_non_negative;
use crate::error::PayrollResult;

/// Statute the SSS schedule comes from.
pub const SSS_LEGAL_BASIS: &str = "RA 11199 (Social Security Act of 2018)";

const CALCULATOR: &str = "SSS";

/// `(lower bound in pesos, contribution in centavos)`, ascending.
const SSS_BRACKETS: [(u32, i64); 45] = [
    (0, 13500), (3250, 15750), (3750, 18000),
    (4250, 20250), (4750, 22500), (5250, 24750),
    (5750, 27000), (6250, 29250), (6750, 31500),
    (7250, 33750), (7750, 36000), (8250, 38250),
    (8750, 40500), (9250, 42750), (9750, 45000),
    (10250, 47250), (10750, 49500), (11250, 51750),
    (11750, 54000), (12250, 56250), (12750, 58500),
    (13250, 60750), (13750, 63000), (14250, 65250),
    (14750, 67500), (15250, 69750), (15750, 72000),
    (16250, 74250), (16750, 76500), (17250, 78750),
    (17750, 81000), (18250, 83250), (18750, 85500),
    (19250, 87750), (19750, 90000), (20250, 92250),
    (20750, 94500), (21250, 96750), (21750, 99000),
    (22250, 101250), (22750, 103500), (23250, 105750),
    (23750, 108000), (24250, 110250), (24750, 112500),
];

/// One row of the SSS schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SssBracket {
    /// Inclusive lower salary bound.
    pub lower_bound: Decimal,
    /// Exclusive upper salary bound; `None` for the top bracket.
    pub upper_bound: Option<Decimal>,
    /// Monthly contribution for salaries in this bracket.
    pub contribution: Decimal,
}

/// Finds the SSS bracket a salary falls in.
///
/// Salaries below the first bound fall in the lowest bracket; salaries at or
/// above the last bound fall in the highest.
pub fn sss_bracket(salary: Decimal) -> PayrollResult<SssBracket> {
    ensure_non_negative(CALCULATOR, salary)?;

    let index = SSS_BRACKETS
        .iter()
        .rposition(|&(lower, _)| salary >= Decimal::from(lower))
        .unwrap_or(0);

    let (lower, centavos) = SSS_BRACKETS[index];
    let upper_bound = SSS_BRACKETS
        .get(index + 1)
        .map(|&(next, _)| Decimal::from(next));

    Ok(SssBracket {
        lower_bound: Decimal::from(lower),
        upper_bound,
        contribution: Decimal::new(centavos, 2),
    })
}

/// Calculates the monthly SSS contribution for a salary.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidArgument`](crate::error::PayrollError::InvalidArgument)
/// when the salary is negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_sss_contribution;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let sss = calculate_sss_contribution(Decimal::from(20000)).unwrap();
/// assert_eq!(sss, Decimal::from_str("900.00").unwrap());
/// ```
pub fn calculate_sss_contribution(salary: Decimal) -> PayrollResult<Decimal> {
    sss_bracket(salary).map(|bracket| bracket.contribution)
}
