//! Payroll Engine for Philippine statutory payroll
//!
//! This crate computes per-period payroll from an employee master file and a
//! daily attendance log: worked hours and weekly overtime, SSS, PhilHealth,
//! Pag-IBIG and withholding tax deductions, allowance and net pay, with an
//! audit trace of every rule applied.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod sources;
