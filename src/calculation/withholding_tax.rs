//! Withholding tax calculation.
//!
//! Monthly withholding follows the graduated schedule: each bracket charges
//! a fixed base plus a marginal rate on the excess over the bracket's
//! reference salary.

use rust_decimal::Decimal;

use super::ensure_non_negative;
use crate::error::PayrollResult;

/// Statute the withholding schedule comes from.
pub const WITHHOLDING_TAX_LEGAL_BASIS: &str = "RA 10963 (TRAIN Law)";

const CALCULATOR: &str = "Withholding Tax";

/// One bracket of the withholding schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    /// Salaries below this bound belong to the bracket; `None` for the top.
    pub upper_bound: Option<Decimal>,
    /// Fixed tax for the bracket.
    pub base_tax: Decimal,
    /// Marginal rate on the excess.
    pub rate: Decimal,
    /// Salary the excess is measured from.
    pub excess_over: Decimal,
}

const TAX_BRACKETS: [TaxBracket; 6] = [
    TaxBracket {
        upper_bound: Some(Decimal::from_parts(20833, 0, 0, false, 0)),
        base_tax: Decimal::ZERO,
        rate: Decimal::ZERO,
        excess_over: Decimal::ZERO,
    },
    TaxBracket {
        upper_bound: Some(Decimal::from_parts(33334, 0, 0, false, 0)),
        base_tax: Decimal::ZERO,
        rate: Decimal::from_parts(20, 0, 0, false, 2),
        excess_over: Decimal::from_parts(20833, 0, 0, false, 0),
    },
    TaxBracket {
        upper_bound: Some(Decimal::from_parts(66668, 0, 0, false, 0)),
        base_tax: Decimal::from_parts(2500, 0, 0, false, 0),
        rate: Decimal::from_parts(25, 0, 0, false, 2),
        excess_over: Decimal::from_parts(33333, 0, 0, false, 0),
    },
    TaxBracket {
        upper_bound: Some(Decimal::from_parts(166668, 0, 0, false, 0)),
        base_tax: Decimal::from_parts(10833, 0, 0, false, 0),
        rate: Decimal::from_parts(30, 0, 0, false, 2),
        excess_over: Decimal::from_parts(66667, 0, 0, false, 0),
    },
    TaxBracket {
        upper_bound: Some(Decimal::from_parts(666668, 0, 0, false, 0)),
        base_tax: Decimal::from_parts(4083333, 0, 0, false, 2),
        rate: Decimal::from_parts(32, 0, 0, false, 2),
        excess_over: Decimal::from_parts(166667, 0, 0, false, 0),
    },
    TaxBracket {
        upper_bound: None,
        base_tax: Decimal::from_parts(20083333, 0, 0, false, 2),
        rate: Decimal::from_parts(35, 0, 0, false, 2),
        excess_over: Decimal::from_parts(666667, 0, 0, false, 0),
    },
];

/// Finds the withholding bracket a salary falls in.
pub fn tax_bracket(salary: Decimal) -> PayrollResult<TaxBracket> {
    ensure_non_negative(CALCULATOR, salary)?;

    let bracket = TAX_BRACKETS
        .iter()
        .find(|bracket| bracket.upper_bound.is_none_or(|upper| salary < upper))
        .copied()
        .unwrap_or(TAX_BRACKETS[TAX_BRACKETS.len() - 1]);

    Ok(bracket)
}

/// Calculates the monthly withholding tax for a salary.
///
/// The schedule is applied as written, including the reference salaries
/// that differ from the bracket bounds by one peso; see DESIGN.md for the
/// small step down this produces at 66,668.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_withholding_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(calculate_withholding_tax(Decimal::from(20000)).unwrap(), Decimal::ZERO);
/// assert_eq!(
///     calculate_withholding_tax(Decimal::from(25000)).unwrap(),
///     Decimal::from_str("833.40").unwrap()
/// );
/// ```
pub fn calculate_withholding_tax(salary: Decimal) -> PayrollResult<Decimal> {
    let bracket = tax_bracket(salary)?;
    Ok(bracket.base_tax + (salary - bracket.excess_over) * bracket.rate)
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
    // WHT-001: exempt bracket
    // ==========================================================================
    #[test]
    fn test_wht_001_below_20833_is_exempt() {
        assert_eq!(calculate_withholding_tax(dec("0")).unwrap(), dec("0"));
        assert_eq!(calculate_withholding_tax(dec("20832.99")).unwrap(), dec("0"));
    }

    // ==========================================================================
    // WHT-002: 20% bracket
    // ==========================================================================
    #[test]
    fn test_wht_002_twenty_percent_of_excess() {
        assert_eq!(calculate_withholding_tax(dec("20833")).unwrap(), dec("0"));
        assert_eq!(calculate_withholding_tax(dec("25000")).unwrap(), dec("833.40"));
        assert_eq!(calculate_withholding_tax(dec("33333")).unwrap(), dec("2500.00"));
    }

    // ==========================================================================
    // WHT-003: 25% and 30% brackets
    // ==========================================================================
    #[test]
    fn test_wht_003_twenty_five_percent_bracket() {
        assert_eq!(calculate_withholding_tax(dec("33334")).unwrap(), dec("2500.25"));
        assert_eq!(calculate_withholding_tax(dec("40000")).unwrap(), dec("4166.75"));
    }

    #[test]
    fn test_wht_003_thirty_percent_bracket() {
        assert_eq!(calculate_withholding_tax(dec("66668")).unwrap(), dec("10833.30"));
        assert_eq!(calculate_withholding_tax(dec("100000")).unwrap(), dec("20832.90"));
    }

    // ==========================================================================
    // WHT-004: 32% and 35% brackets
    // ==========================================================================
    #[test]
    fn test_wht_004_thirty_two_percent_bracket() {
        assert_eq!(calculate_withholding_tax(dec("200000")).unwrap(), dec("51499.89"));
    }

    #[test]
    fn test_wht_004_thirty_five_percent_bracket() {
        assert_eq!(calculate_withholding_tax(dec("666668")).unwrap(), dec("200833.68"));
        assert_eq!(calculate_withholding_tax(dec("1000000")).unwrap(), dec("317499.88"));
    }

    #[test]
    fn test_wht_004_top_bracket_has_no_upper_bound() {
        assert_eq!(tax_bracket(dec("5000000")).unwrap().upper_bound, None);
    }

    // ==========================================================================
    // WHT-005: sample monotonicity and errors
    // ==========================================================================
    #[test]
    fn test_wht_005_increases_across_sample_salaries() {
        let samples = ["15000", "25000", "40000", "70000", "200000", "700000"];
        let taxes: Vec<Decimal> = samples
            .iter()
            .map(|s| calculate_withholding_tax(dec(s)).unwrap())
            .collect();

        for pair in taxes.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_wht_005_steps_down_entering_thirty_percent_bracket() {
        // 2500 + 25% of 33334.99 against 10833 + 30% of 1.
        let below = calculate_withholding_tax(dec("66667.99")).unwrap();
        let at = calculate_withholding_tax(dec("66668")).unwrap();

        assert_eq!(below, dec("10833.7475"));
        assert_eq!(at, dec("10833.30"));
        assert!(at < below);
    }

    #[test]
    fn test_wht_005_other_bracket_seams_do_not_step_down() {
        for (below, at) in [
            ("20832.99", "20833"),
            ("33333.99", "33334"),
            ("166667.99", "166668"),
            ("666667.99", "666668"),
        ] {
            let below_tax = calculate_withholding_tax(dec(below)).unwrap();
            let at_tax = calculate_withholding_tax(dec(at)).unwrap();
            assert!(below_tax <= at_tax, "{below}: {below_tax} > {at}: {at_tax}");
        }
    }

    #[test]
    fn test_wht_005_negative_salary_rejected() {
        assert!(matches!(
            calculate_withholding_tax(dec("-1")),
            Err(PayrollError::InvalidArgument { .. })
        ));
    }
}
