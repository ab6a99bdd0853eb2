//! Statutory deduction models.
//!
//! This module contains the contribution breakdowns produced by the
//! PhilHealth and Pag-IBIG calculators, and the [`Deductions`] bundle applied
//! to a pay period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A PhilHealth premium split evenly between employee and employer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhilHealthContribution {
    /// The total monthly premium.
    pub premium: Decimal,
    /// The employee's half of the premium.
    pub employee_share: Decimal,
    /// The employer's half of the premium.
    pub employer_share: Decimal,
}

/// A Pag-IBIG (HDMF) contribution.
///
/// `total` is always `employee + employer`, and never exceeds the cap.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PagIbigContribution;
/// use rust_decimal::Decimal;
///
/// let contribution = PagIbigContribution {
///     employee: Decimal::new(10, 0),
///     employer: Decimal::new(20, 0),
///     total: Decimal::new(30, 0),
/// };
/// assert_eq!(contribution.as_array(), [Decimal::new(10, 0), Decimal::new(20, 0), Decimal::new(30, 0)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagIbigContribution {
    /// The employee's share.
    pub employee: Decimal,
    /// The employer's share.
    pub employer: Decimal,
    /// The combined contribution.
    pub total: Decimal,
}

impl PagIbigContribution {
    /// Returns `[employee, employer, total]`.
    pub fn as_array(&self) -> [Decimal; 3] {
        [self.employee, self.employer, self.total]
    }
}

/// The four statutory deductions computed for one pay period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// SSS contribution.
    pub sss: Decimal,
    /// PhilHealth premium and shares.
    pub philhealth: PhilHealthContribution,
    /// Pag-IBIG contribution and shares.
    pub pag_ibig: PagIbigContribution,
    /// Withholding tax.
    pub withholding_tax: Decimal,
}

impl Deductions {
    /// The amount withheld from the employee's pay.
    ///
    /// Only the employee shares of PhilHealth and Pag-IBIG are withheld.
    pub fn employee_total(&self) -> Decimal {
        self.sss + self.philhealth.employee_share + self.pag_ibig.employee + self.withholding_tax
    }
}
