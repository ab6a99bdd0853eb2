//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the company
//! payroll policy from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::{CompanyMetadata, PayrollConfig, PayrollPolicy, PolicyConfig};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/motorph/
/// ├── company.yaml   # Company metadata
/// └── policy.yaml    # Attendance, period, overtime and allowance rules
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/motorph")?;
/// println!("Company: {}", loader.company().name);
/// println!("Late after: {}", loader.policy().attendance.late_after);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML, or
    /// describes a policy that fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CompanyMetadata>(&path.join("company.yaml"))?;
        let policy_config = Self::load_yaml::<PolicyConfig>(&path.join("policy.yaml"))?;
        let policy = PayrollPolicy::try_from(policy_config)?;

        Ok(Self {
            config: PayrollConfig::new(metadata, policy),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        self.config.company()
    }

    /// Returns the validated payroll policy.
    pub fn policy(&self) -> &PayrollPolicy {
        self.config.policy()
    }

    /// Returns the full configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the validated policy.
    pub fn into_policy(self) -> PayrollPolicy {
        self.config.policy().clone()
    }
}
