//! Pay period calculation.
//!
//! Combines a closed [`PeriodAggregate`] with the employee's rates and the
//! statutory deductions to produce a [`PayPeriodResult`].
//!
//! ## Formula
//!
//! - `base_pay = total_hours × hourly_rate`
//! - `gross_pay = base_pay + overtime_pay`
//! - `allowance = basic_salary / allowance_divisor`
//! - `net_pay = gross_pay − SSS − PhilHealth employee share − Pag-IBIG employee share − withholding tax + allowance`
//!
//! All four deductions are computed from the monthly basic salary, not from
//! the period's gross pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregation::PeriodAggregate;
use super::ensure_non_negative;
use super::pag_ibig::{PAG_IBIG_LEGAL_BASIS, calculate_pag_ibig_contribution, pag_ibig_rates};
use super::philhealth::{PHILHEALTH_LEGAL_BASIS, calculate_philhealth_contribution};
use super::sss::{SSS_LEGAL_BASIS, calculate_sss_contribution, sss_bracket};
use super::weekly_overtime::COMPANY_POLICY_BASIS;
use super::withholding_tax::{WITHHOLDING_TAX_LEGAL_BASIS, calculate_withholding_tax, tax_bracket};
use crate::config::PayrollPolicy;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AuditStep, Deductions, Employee, PayPeriodResult};

/// The result of calculating one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodCalculation {
    /// The computed period.
    pub result: PayPeriodResult,
    /// Audit steps for pay, deductions, allowance and net pay.
    pub audit_steps: Vec<AuditStep>,
    /// The step number to continue the audit trail from.
    pub next_step_number: u32,
}

/// Calculates the four statutory deductions from a basic monthly salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_deductions;
/// use rust_decimal::Decimal;
///
/// let deductions = calculate_deductions(Decimal::from(20000)).unwrap();
/// assert_eq!(deductions.sss, Decimal::new(90000, 2));
/// assert_eq!(deductions.philhealth.employee_share, Decimal::from(300));
/// assert_eq!(deductions.pag_ibig.employee, Decimal::from(50));
/// assert_eq!(deductions.withholding_tax, Decimal::ZERO);
/// ```
pub fn calculate_deductions(basic_salary: Decimal) -> PayrollResult<Deductions> {
    Ok(Deductions {
        sss: calculate_sss_contribution(basic_salary)?,
        philhealth: calculate_philhealth_contribution(basic_salary)?,
        pag_ibig: calculate_pag_ibig_contribution(basic_salary)?,
        withholding_tax: calculate_withholding_tax(basic_salary)?,
    })
}

/// Calculates pay, deductions and net pay for one employee and one period.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidArgument`] when the basic salary or hourly
/// rate is negative, and [`PayrollError::CalculationError`] when the period
/// holds no records.
pub fn calculate_pay_period(
    employee: &Employee,
    aggregate: &PeriodAggregate,
    policy: &PayrollPolicy,
    step_number_start: u32,
) -> PayrollResult<PayPeriodCalculation> {
    ensure_non_negative("Base Pay", employee.hourly_rate)?;

    let (start_date, end_date) = aggregate
        .start_date()
        .zip(aggregate.end_date())
        .ok_or_else(|| PayrollError::CalculationError {
            message: format!("period {} has no attendance records", aggregate.period_number),
        })?;

    let basic_salary = employee.basic_salary;
    let hourly_rate = employee.hourly_rate;
    let mut step_number = step_number_start;
    let mut audit_steps = Vec::new();

    // Base and gross pay
    let base_pay = aggregate.total_hours * hourly_rate;
    let overtime_pay = aggregate.total_overtime_pay;
    let gross_pay = base_pay + overtime_pay;

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "gross_pay".to_string(),
        rule_name: "Gross Pay".to_string(),
        legal_basis: COMPANY_POLICY_BASIS.to_string(),
        input: serde_json::json!({
            "total_hours": aggregate.total_hours.round_dp(2).to_string(),
            "hourly_rate": hourly_rate.normalize().to_string(),
            "overtime_pay": overtime_pay.round_dp(2).to_string()
        }),
        output: serde_json::json!({
            "base_pay": base_pay.round_dp(2).to_string(),
            "gross_pay": gross_pay.round_dp(2).to_string()
        }),
        reasoning: format!(
            "{}h × ₱{} = ₱{} base + ₱{} overtime = ₱{} gross",
            aggregate.total_hours.round_dp(2).normalize(),
            hourly_rate.normalize(),
            base_pay.round_dp(2),
            overtime_pay.round_dp(2),
            gross_pay.round_dp(2)
        ),
    });
    step_number += 1;

    // Deductions
    let sss = sss_bracket(basic_salary)?;
    let sss_range = match sss.upper_bound {
        Some(upper) => format!("{} - {}", sss.lower_bound, upper - Decimal::new(1, 2)),
        None => format!("{} and above", sss.lower_bound),
    };
    audit_steps.push(deduction_step(
        step_number,
        "sss_contribution",
        "SSS Contribution",
        SSS_LEGAL_BASIS,
        basic_salary,
        serde_json::json!({ "amount": sss.contribution.to_string() }),
        format!("Bracket {} → ₱{}", sss_range, sss.contribution),
    ));
    step_number += 1;

    let philhealth = calculate_philhealth_contribution(basic_salary)?;
    audit_steps.push(deduction_step(
        step_number,
        "philhealth_premium",
        "PhilHealth Premium",
        PHILHEALTH_LEGAL_BASIS,
        basic_salary,
        serde_json::json!({
            "premium": philhealth.premium.round_dp(2).to_string(),
            "employee_share": philhealth.employee_share.round_dp(2).to_string(),
            "employer_share": philhealth.employer_share.round_dp(2).to_string()
        }),
        format!(
            "Premium ₱{} split evenly, employee share ₱{}",
            philhealth.premium.round_dp(2),
            philhealth.employee_share.round_dp(2)
        ),
    ));
    step_number += 1;

    let pag_ibig = calculate_pag_ibig_contribution(basic_salary)?;
    let (employee_rate, employer_rate) = pag_ibig_rates(basic_salary);
    audit_steps.push(deduction_step(
        step_number,
        "pag_ibig_contribution",
        "Pag-IBIG Contribution",
        PAG_IBIG_LEGAL_BASIS,
        basic_salary,
        serde_json::json!({
            "employee": pag_ibig.employee.round_dp(2).to_string(),
            "employer": pag_ibig.employer.round_dp(2).to_string(),
            "total": pag_ibig.total.round_dp(2).to_string()
        }),
        format!(
            "Employee {}% + employer {}% = ₱{}",
            (employee_rate * Decimal::ONE_HUNDRED).normalize(),
            (employer_rate * Decimal::ONE_HUNDRED).normalize(),
            pag_ibig.total.round_dp(2)
        ),
    ));
    step_number += 1;

    let bracket = tax_bracket(basic_salary)?;
    let withholding_tax = calculate_withholding_tax(basic_salary)?;
    audit_steps.push(deduction_step(
        step_number,
        "withholding_tax",
        "Withholding Tax",
        WITHHOLDING_TAX_LEGAL_BASIS,
        basic_salary,
        serde_json::json!({ "amount": withholding_tax.round_dp(2).to_string() }),
        if bracket.rate.is_zero() {
            "Salary within exempt bracket - no tax".to_string()
        } else {
            format!(
                "₱{} + {}% of excess over {} = ₱{}",
                bracket.base_tax,
                (bracket.rate * Decimal::ONE_HUNDRED).normalize(),
                bracket.excess_over,
                withholding_tax.round_dp(2)
            )
        },
    ));
    step_number += 1;

    let deductions = Deductions {
        sss: sss.contribution,
        philhealth,
        pag_ibig,
        withholding_tax,
    };

    // Allowance and net pay
    let allowance = basic_salary / policy.allowance_divisor;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "allowance".to_string(),
        rule_name: "Period Allowance".to_string(),
        legal_basis: COMPANY_POLICY_BASIS.to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "divisor": policy.allowance_divisor.normalize().to_string()
        }),
        output: serde_json::json!({ "allowance": allowance.round_dp(2).to_string() }),
        reasoning: format!(
            "₱{} / {} = ₱{}",
            basic_salary.normalize(),
            policy.allowance_divisor.normalize(),
            allowance.round_dp(2)
        ),
    });
    step_number += 1;

    let withheld = deductions.employee_total();
    let net_pay = gross_pay - withheld + allowance;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        legal_basis: COMPANY_POLICY_BASIS.to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.round_dp(2).to_string(),
            "employee_deductions": withheld.round_dp(2).to_string(),
            "allowance": allowance.round_dp(2).to_string()
        }),
        output: serde_json::json!({ "net_pay": net_pay.round_dp(2).to_string() }),
        reasoning: format!(
            "₱{} gross - ₱{} deductions + ₱{} allowance = ₱{}",
            gross_pay.round_dp(2),
            withheld.round_dp(2),
            allowance.round_dp(2),
            net_pay.round_dp(2)
        ),
    });
    step_number += 1;

    let result = PayPeriodResult {
        period_number: aggregate.period_number,
        start_date,
        end_date,
        days_worked: aggregate.days_worked(),
        late_days: aggregate.late_days(),
        total_hours: aggregate.total_hours,
        overtime_hours: aggregate.overtime_hours(),
        overtime_pay,
        base_pay,
        gross_pay,
        deductions,
        allowance,
        net_pay,
        weeks: aggregate.weeks.clone(),
    };

    Ok(PayPeriodCalculation {
        result,
        audit_steps,
        next_step_number: step_number,
    })
}

fn deduction_step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    legal_basis: &str,
    basic_salary: Decimal,
    output: serde_json::Value,
    reasoning: String,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        legal_basis: legal_basis.to_string(),
        input: serde_json::json!({ "basic_salary": basic_salary.normalize().to_string() }),
        output,
        reasoning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::aggregate_attendance;
    use crate::models::AttendanceEntry;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_employee(basic_salary: &str, hourly_rate: &str) -> Employee {
        Employee::new(
            "10001",
            "Garcia",
            "Manuel",
            dec(basic_salary),
            dec(hourly_rate),
        )
    }

    fn create_aggregate(days: u32, login: &str, logout: &str, hourly_rate: &str) -> PeriodAggregate {
        let entries: Vec<AttendanceEntry> = (1..=days)
            .map(|day| AttendanceEntry::new("10001", format!("06/{:02}/2024", day), login, logout))
            .collect();
        aggregate_attendance(&entries, dec(hourly_rate), &PayrollPolicy::default(), 1)
            .periods
            .remove(0)
    }

    // ==========================================================================
    // PAY-001: deductions
    // ==========================================================================
    #[test]
    fn test_pay_001_deductions_for_20000() {
        let deductions = calculate_deductions(dec("20000")).unwrap();

        assert_eq!(deductions.sss, dec("900.00"));
        assert_eq!(deductions.philhealth.premium, dec("600"));
        assert_eq!(deductions.philhealth.employee_share, dec("300"));
        assert_eq!(deductions.pag_ibig.as_array(), [dec("50"), dec("50"), dec("100")]);
        assert_eq!(deductions.withholding_tax, dec("0"));
    }

    #[test]
    fn test_pay_001_negative_salary_propagates() {
        assert!(matches!(
            calculate_deductions(dec("-1")),
            Err(PayrollError::InvalidArgument { .. })
        ));
    }

    // ==========================================================================
    // PAY-002: full period
    // ==========================================================================
    #[test]
    fn test_pay_002_twenty_standard_days() {
        let employee = create_employee("20000", "100");
        let aggregate = create_aggregate(20, "8:00", "17:00", "100");

        let calculation =
            calculate_pay_period(&employee, &aggregate, &PayrollPolicy::default(), 1).unwrap();
        let result = &calculation.result;

        assert_eq!(result.base_pay, dec("16000"));
        assert_eq!(result.overtime_pay, dec("0"));
        assert_eq!(result.gross_pay, dec("16000"));
        assert_eq!(result.allowance, dec("5000"));
        assert_eq!(result.net_pay, dec("19750"));
        assert_eq!(result.days_worked, 20);
    }

    #[test]
    fn test_pay_002_net_pay_invariant_with_overtime_and_tax() {
        let employee = create_employee("25000", "150");
        let aggregate = create_aggregate(10, "7:30", "18:00", "150");

        let result = calculate_pay_period(&employee, &aggregate, &PayrollPolicy::default(), 1)
            .unwrap()
            .result;

        // 9.5h days: 47.5h per week, 7.5h overtime each.
        assert_eq!(result.total_hours, dec("95"));
        assert_eq!(result.overtime_hours, dec("15"));
        assert_eq!(result.overtime_pay, dec("2812.5"));
        assert_eq!(result.deductions.withholding_tax, dec("833.40"));
        assert_eq!(
            result.net_pay,
            result.gross_pay - result.deductions.employee_total() + result.allowance
        );
    }

    // ==========================================================================
    // PAY-003: audit steps
    // ==========================================================================
    #[test]
    fn test_pay_003_audit_steps_cover_every_rule() {
        let employee = create_employee("20000", "100");
        let aggregate = create_aggregate(5, "8:00", "17:00", "100");

        let calculation =
            calculate_pay_period(&employee, &aggregate, &PayrollPolicy::default(), 20).unwrap();
        let rule_ids: Vec<&str> = calculation
            .audit_steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();

        assert_eq!(
            rule_ids,
            [
                "gross_pay",
                "sss_contribution",
                "philhealth_premium",
                "pag_ibig_contribution",
                "withholding_tax",
                "allowance",
                "net_pay"
            ]
        );
        assert_eq!(calculation.audit_steps[0].step_number, 20);
        assert_eq!(calculation.next_step_number, 27);
        assert_eq!(
            calculation.audit_steps[1].reasoning,
            "Bracket 19750 - 20249.99 → ₱900.00"
        );
    }

    // ==========================================================================
    // PAY-004: invalid inputs
    // ==========================================================================
    #[test]
    fn test_pay_004_negative_salary_fails_period() {
        let employee = create_employee("-20000", "100");
        let aggregate = create_aggregate(5, "8:00", "17:00", "100");

        assert!(matches!(
            calculate_pay_period(&employee, &aggregate, &PayrollPolicy::default(), 1),
            Err(PayrollError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_pay_004_negative_hourly_rate_fails_period() {
        let employee = create_employee("20000", "-1");
        let aggregate = create_aggregate(5, "8:00", "17:00", "100");

        match calculate_pay_period(&employee, &aggregate, &PayrollPolicy::default(), 1) {
            Err(PayrollError::InvalidArgument { calculator, .. }) => {
                assert_eq!(calculator, "Base Pay");
            }
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_pay_004_empty_period_is_calculation_error() {
        let employee = create_employee("20000", "100");
        let aggregate = PeriodAggregate {
            period_number: 1,
            records: vec![],
            weeks: vec![],
            total_hours: Decimal::ZERO,
            total_overtime_pay: Decimal::ZERO,
            audit_steps: vec![],
        };

        assert!(matches!(
            calculate_pay_period(&employee, &aggregate, &PayrollPolicy::default(), 1),
            Err(PayrollError::CalculationError { .. })
        ));
    }
}
