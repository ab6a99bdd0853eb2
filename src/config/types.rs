//! Configuration types for payroll policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`PayrollPolicy`] the calculators consume.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Metadata about the company running payroll.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyMetadata {
    /// Short company code (e.g., "MOTORPH").
    pub code: String,
    /// The human-readable company name.
    pub name: String,
    /// The version or effective date of the policy set.
    pub version: String,
    /// Currency code named in the report header.
    pub currency: String,
}

/// Attendance section of policy.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceSection {
    /// Latest on-time login, `H:mm`.
    pub late_after: String,
    /// Unpaid lunch break deducted from each day, in minutes.
    pub lunch_break_minutes: u32,
    /// chrono format of the date column.
    pub date_format: String,
}

/// Period section of policy.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodSection {
    /// Records per week.
    pub days_per_week: u32,
    /// Records per pay period.
    pub days_per_period: u32,
}

/// Overtime section of policy.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeSection {
    /// Weekly hours before overtime applies.
    pub weekly_threshold_hours: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub multiplier: Decimal,
}

/// Allowance section of policy.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct AllowanceSection {
    /// The period allowance is `basic_salary / salary_divisor`.
    pub salary_divisor: Decimal,
}

/// Policy configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Attendance rules.
    pub attendance: AttendanceSection,
    /// Week and period sizes.
    pub periods: PeriodSection,
    /// Overtime rules.
    pub overtime: OvertimeSection,
    /// Allowance rules.
    pub allowance: AllowanceSection,
}

/// Validated attendance rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendancePolicy {
    /// A login strictly after this time is late.
    pub late_after: NaiveTime,
    /// Unpaid lunch break in minutes.
    pub lunch_break_minutes: i64,
    /// chrono format of the date column.
    pub date_format: String,
}

/// Validated overtime rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OvertimePolicy {
    /// Weekly hours before overtime applies.
    pub weekly_threshold_hours: Decimal,
    /// Overtime pay multiplier.
    pub multiplier: Decimal,
}

/// The complete, validated payroll policy.
///
/// `days_per_period` is always a positive multiple of `days_per_week`, so a
/// week never straddles two periods.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollPolicy;
///
/// let policy = PayrollPolicy::default();
/// assert_eq!(policy.days_per_week, 5);
/// assert_eq!(policy.days_per_period, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollPolicy {
    /// Attendance rules.
    pub attendance: AttendancePolicy,
    /// Overtime rules.
    pub overtime: OvertimePolicy,
    /// Records per week.
    pub days_per_week: usize,
    /// Records per pay period.
    pub days_per_period: usize,
    /// Divisor applied to basic salary for the period allowance.
    pub allowance_divisor: Decimal,
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            attendance: AttendancePolicy {
                late_after: NaiveTime::from_hms_opt(8, 11, 0).expect("08:11 is a valid time"),
                lunch_break_minutes: 60,
                date_format: "%m/%d/%Y".to_string(),
            },
            overtime: OvertimePolicy {
                weekly_threshold_hours: Decimal::from_parts(40, 0, 0, false, 0),
                multiplier: Decimal::from_parts(125, 0, 0, false, 2),
            },
            days_per_week: 5,
            days_per_period: 20,
            allowance_divisor: Decimal::from_parts(4, 0, 0, false, 0),
        }
    }
}

impl TryFrom<PolicyConfig> for PayrollPolicy {
    type Error = PayrollError;

    fn try_from(config: PolicyConfig) -> PayrollResult<Self> {
        let late_after = NaiveTime::parse_from_str(config.attendance.late_after.trim(), "%H:%M")
            .map_err(|e| invalid("attendance.late_after", e.to_string()))?;

        let PeriodSection {
            days_per_week,
            days_per_period,
        } = config.periods;
        if days_per_week == 0 {
            return Err(invalid("periods.days_per_week", "must be greater than zero"));
        }
        if days_per_period == 0 || days_per_period % days_per_week != 0 {
            return Err(invalid(
                "periods.days_per_period",
                format!("must be a positive multiple of days_per_week ({days_per_week})"),
            ));
        }

        if config.overtime.weekly_threshold_hours < Decimal::ZERO {
            return Err(invalid(
                "overtime.weekly_threshold_hours",
                "cannot be negative",
            ));
        }
        if config.overtime.multiplier < Decimal::ONE {
            return Err(invalid("overtime.multiplier", "must be at least 1"));
        }
        if config.allowance.salary_divisor <= Decimal::ZERO {
            return Err(invalid(
                "allowance.salary_divisor",
                "must be greater than zero",
            ));
        }

        Ok(Self {
            attendance: AttendancePolicy {
                late_after,
                lunch_break_minutes: i64::from(config.attendance.lunch_break_minutes),
                date_format: config.attendance.date_format,
            },
            overtime: OvertimePolicy {
                weekly_threshold_hours: config.overtime.weekly_threshold_hours,
                multiplier: config.overtime.multiplier,
            },
            days_per_week: days_per_week as usize,
            days_per_period: days_per_period as usize,
            allowance_divisor: config.allowance.salary_divisor,
        })
    }
}

fn invalid(field: &str, message: impl Into<String>) -> PayrollError {
    PayrollError::InvalidPolicy {
        field: field.to_string(),
        message: message.into(),
    }
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    /// Company metadata.
    metadata: CompanyMetadata,
    /// Validated policy.
    policy: PayrollPolicy,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(metadata: CompanyMetadata, policy: PayrollPolicy) -> Self {
        Self { metadata, policy }
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        &self.metadata
    }

    /// Returns the payroll policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }
}
