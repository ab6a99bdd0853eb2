//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod deductions;
mod directory;
mod employee;
mod payroll_result;

pub use attendance::{AttendanceEntry, AttendanceRecord};
pub use deductions::{Deductions, PagIbigContribution, PhilHealthContribution};
pub use directory::EmployeeDirectory;
pub use employee::{Employee, GovernmentIds};
pub use payroll_result::{
    AuditStep, AuditTrace, AuditWarning, EmployeeFailure, EmployeePayroll, PayPeriodResult,
    PayrollRun, WeekSummary,
};
