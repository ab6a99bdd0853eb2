//! Weekly overtime calculation.
//!
//! Hours beyond the weekly threshold are paid at the hourly rate times the
//! overtime multiplier. Overtime is judged per week, never per day.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::OvertimePolicy;
use crate::models::AuditStep;

/// Basis recorded on attendance and overtime audit steps.
pub const COMPANY_POLICY_BASIS: &str = "Company policy";

/// The result of weekly overtime calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyOvertimeResult {
    /// Hours beyond the threshold, never negative.
    pub overtime_hours: Decimal,
    /// Premium pay for the overtime hours.
    pub overtime_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates overtime for one week of worked hours.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_weekly_overtime;
/// use payroll_engine::config::PayrollPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = PayrollPolicy::default();
/// let result = calculate_weekly_overtime(
///     Decimal::from(45),
///     Decimal::from(100),
///     &policy.overtime,
///     1,
///     1,
/// );
///
/// assert_eq!(result.overtime_hours, Decimal::from(5));
/// assert_eq!(result.overtime_pay, Decimal::from(625));
/// ```
pub fn calculate_weekly_overtime(
    weekly_hours: Decimal,
    hourly_rate: Decimal,
    policy: &OvertimePolicy,
    week_number: u32,
    step_number: u32,
) -> WeeklyOvertimeResult {
    let overtime_hours = (weekly_hours - policy.weekly_threshold_hours).max(Decimal::ZERO);
    let overtime_pay = overtime_hours * hourly_rate * policy.multiplier;

    let reasoning = if overtime_hours > Decimal::ZERO {
        format!(
            "Week {}: {}h worked, {}h over {}h threshold × ₱{} × {} = ₱{}",
            week_number,
            weekly_hours.normalize(),
            overtime_hours.normalize(),
            policy.weekly_threshold_hours.normalize(),
            hourly_rate.normalize(),
            policy.multiplier.normalize(),
            overtime_pay.round_dp(2)
        )
    } else {
        format!(
            "Week {}: {}h worked, within {}h threshold - no overtime",
            week_number,
            weekly_hours.normalize(),
            policy.weekly_threshold_hours.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekly_overtime".to_string(),
        rule_name: "Weekly Overtime".to_string(),
        legal_basis: COMPANY_POLICY_BASIS.to_string(),
        input: serde_json::json!({
            "week_number": week_number,
            "weekly_hours": weekly_hours.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string(),
            "threshold_hours": policy.weekly_threshold_hours.normalize().to_string(),
            "multiplier": policy.multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "overtime_hours": overtime_hours.normalize().to_string(),
            "overtime_pay": overtime_pay.round_dp(2).to_string()
        }),
        reasoning,
    };

    WeeklyOvertimeResult {
        overtime_hours,
        overtime_pay,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayrollPolicy;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn policy() -> OvertimePolicy {
        PayrollPolicy::default().overtime
    }

    // ==========================================================================
    // OT-001: at or under threshold
    // ==========================================================================
    #[test]
    fn test_ot_001_exactly_40_hours_no_overtime() {
        let result = calculate_weekly_overtime(dec("40"), dec("100"), &policy(), 1, 1);

        assert_eq!(result.overtime_hours, dec("0"));
        assert_eq!(result.overtime_pay, dec("0"));
        assert!(result.audit_step.reasoning.contains("no overtime"));
    }

    #[test]
    fn test_ot_001_short_week_never_negative() {
        let result = calculate_weekly_overtime(dec("12.5"), dec("100"), &policy(), 4, 1);
        assert_eq!(result.overtime_hours, dec("0"));
        assert_eq!(result.overtime_pay, dec("0"));
    }

    // ==========================================================================
    // OT-002: over threshold
    // ==========================================================================
    #[test]
    fn test_ot_002_45_hours_at_100() {
        let result = calculate_weekly_overtime(dec("45"), dec("100"), &policy(), 1, 1);

        assert_eq!(result.overtime_hours, dec("5"));
        assert_eq!(result.overtime_pay, dec("625"));
    }

    #[test]
    fn test_ot_002_fractional_overtime() {
        let result = calculate_weekly_overtime(dec("42.5"), dec("133.93"), &policy(), 2, 1);

        assert_eq!(result.overtime_hours, dec("2.5"));
        assert_eq!(result.overtime_pay, dec("418.53125"));
    }

    // ==========================================================================
    // OT-003: audit step
    // ==========================================================================
    #[test]
    fn test_ot_003_audit_step_records_week_and_step() {
        let result = calculate_weekly_overtime(dec("45"), dec("100"), &policy(), 3, 7);
        let step = &result.audit_step;

        assert_eq!(step.step_number, 7);
        assert_eq!(step.rule_id, "weekly_overtime");
        assert_eq!(step.legal_basis, "Company policy");
        assert_eq!(step.input["week_number"], 3);
        assert_eq!(step.output["overtime_pay"], "625.00");
        assert!(step.reasoning.starts_with("Week 3: 45h worked, 5h over 40h"));
        assert!(step.reasoning.ends_with("= ₱625.00"));
        assert!(!step.reasoning.contains('$'));
    }
}
