//! PhilHealth premium calculation.
//!
//! The monthly premium is 3% of salary, floored at 300.00 for salaries up to
//! 10,000 and capped at 1,800.00 from 60,000. Employee and employer each pay
//! half.

use rust_decimal::Decimal;

use super::ensure_non_negative;
use crate::error::PayrollResult;
use crate::models::PhilHealthContribution;

/// Statute the premium schedule comes from.
pub const PHILHEALTH_LEGAL_BASIS: &str = "RA 11223 (Universal Health Care Act)";

/// Premium rate applied between the floor and ceiling (3%).
pub const PHILHEALTH_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// Salaries at or below this pay the minimum premium.
pub const PHILHEALTH_SALARY_FLOOR: Decimal = Decimal::from_parts(10000, 0, 0, false, 0);

/// Salaries at or above this pay the maximum premium.
pub const PHILHEALTH_SALARY_CEILING: Decimal = Decimal::from_parts(60000, 0, 0, false, 0);

const MINIMUM_PREMIUM: Decimal = Decimal::from_parts(300, 0, 0, false, 0);
const MAXIMUM_PREMIUM: Decimal = Decimal::from_parts(1800, 0, 0, false, 0);
const CALCULATOR: &str = "PhilHealth";

/// Calculates the total monthly PhilHealth premium.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_philhealth_premium;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_philhealth_premium(Decimal::from(25000)).unwrap(), Decimal::from(750));
/// assert_eq!(calculate_philhealth_premium(Decimal::from(5000)).unwrap(), Decimal::from(300));
/// ```
pub fn calculate_philhealth_premium(salary: Decimal) -> PayrollResult<Decimal> {
    ensure_non_negative(CALCULATOR, salary)?;

    let premium = if salary <= PHILHEALTH_SALARY_FLOOR {
        MINIMUM_PREMIUM
    } else if salary >= PHILHEALTH_SALARY_CEILING {
        MAXIMUM_PREMIUM
    } else {
        salary * PHILHEALTH_RATE
    };

    Ok(premium)
}

/// Calculates the employee's half of the premium.
pub fn calculate_philhealth_employee_share(salary: Decimal) -> PayrollResult<Decimal> {
    calculate_philhealth_premium(salary).map(halve)
}

/// Calculates the employer's half of the premium.
pub fn calculate_philhealth_employer_share(salary: Decimal) -> PayrollResult<Decimal> {
    calculate_philhealth_premium(salary).map(halve)
}

/// Calculates the premium together with both shares.
pub fn calculate_philhealth_contribution(salary: Decimal) -> PayrollResult<PhilHealthContribution> {
    let premium = calculate_philhealth_premium(salary)?;

    Ok(PhilHealthContribution {
        premium,
        employee_share: halve(premium),
        employer_share: halve(premium),
    })
}

fn halve(amount: Decimal) -> Decimal {
    amount / Decimal::TWO
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayrollError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // PH-001: floor
    // ==========================================================================
    #[test]
    fn test_ph_001_floor_applies_up_to_10000() {
        assert_eq!(calculate_philhealth_premium(dec("0")).unwrap(), dec("300"));
        assert_eq!(calculate_philhealth_premium(dec("10000")).unwrap(), dec("300"));
    }

    #[test]
    fn test_ph_001_just_above_floor_uses_rate() {
        assert_eq!(
            calculate_philhealth_premium(dec("10000.01")).unwrap(),
            dec("300.0003")
        );
    }

    // ==========================================================================
    // PH-002: proportional band
    // ==========================================================================
    #[test]
    fn test_ph_002_mid_band_is_three_percent() {
        assert_eq!(calculate_philhealth_premium(dec("25000")).unwrap(), dec("750"));
        assert_eq!(calculate_philhealth_premium(dec("20000")).unwrap(), dec("600"));
    }

    // ==========================================================================
    // PH-003: ceiling
    // ==========================================================================
    #[test]
    fn test_ph_003_ceiling_applies_from_60000() {
        assert_eq!(calculate_philhealth_premium(dec("59999.99")).unwrap(), dec("1799.9997"));
        assert_eq!(calculate_philhealth_premium(dec("60000")).unwrap(), dec("1800"));
        assert_eq!(calculate_philhealth_premium(dec("250000")).unwrap(), dec("1800"));
    }

    // ==========================================================================
    // PH-004: shares
    // ==========================================================================
    #[test]
    fn test_ph_004_shares_are_half_the_premium() {
        assert_eq!(
            calculate_philhealth_employee_share(dec("25000")).unwrap(),
            dec("375")
        );
        assert_eq!(
            calculate_philhealth_employer_share(dec("25000")).unwrap(),
            dec("375")
        );
    }

    #[test]
    fn test_ph_004_contribution_shares_sum_to_premium() {
        let contribution = calculate_philhealth_contribution(dec("33333.33")).unwrap();
        assert_eq!(
            contribution.employee_share + contribution.employer_share,
            contribution.premium
        );
    }

    // ==========================================================================
    // PH-005: negative salary
    // ==========================================================================
    #[test]
    fn test_ph_005_negative_salary_rejected() {
        for result in [
            calculate_philhealth_premium(dec("-1")),
            calculate_philhealth_employee_share(dec("-1")),
            calculate_philhealth_employer_share(dec("-1")),
        ] {
            assert!(matches!(
                result,
                Err(PayrollError::InvalidArgument { .. })
            ));
        }
        assert!(calculate_philhealth_contribution(dec("-1")).is_err());
    }
}
