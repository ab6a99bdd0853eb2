//! Configuration loading and management for the Payroll Engine.
//!
//! This module loads the company payroll policy from YAML files: lateness
//! cutoff, lunch break, week and period sizes, overtime and allowance rules.
//! Statutory contribution tables are fixed in code.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/motorph").unwrap();
//! println!("Loaded policy for: {}", config.company().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AllowanceSection, AttendancePolicy, AttendanceSection, CompanyMetadata, OvertimePolicy,
    OvertimeSection, PayrollConfig, PayrollPolicy, PeriodSection, PolicyConfig,
};
