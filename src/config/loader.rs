//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the leave
//! policy, service tiers, and holiday calendar from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::allocation::SplitRules;
use crate::calculation::{ServiceTierTable, VoluntaryClassifier};
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeCategory, Holiday, HolidaySpec};

use super::types::{HolidayCalendar, LeavePolicy, VacationConfig};

/// Loads and provides access to the vacation configuration.
///
/// # Directory Structure
///
/// ```text
/// config/vacation/
/// ├── policy.yaml         # Base days, split limits, eligibility, keywords
/// ├── service_tiers.yaml  # Normal and abnormal bonus tiers
/// └── holidays.yaml       # Holiday calendar
/// ```
///
/// # Example
///
/// ```no_run
/// use vacation_engine::config::ConfigLoader;
/// use vacation_engine::models::EmployeeCategory;
///
/// let loader = ConfigLoader::load("./config/vacation").unwrap();
/// println!("Standard base days: {}", loader.base_days(EmployeeCategory::Standard));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: VacationConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing ([`EngineError::ConfigNotFound`])
    /// - Any file contains invalid YAML ([`EngineError::ConfigParseError`])
    /// - A value is out of range ([`EngineError::InvalidConfig`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<LeavePolicy>(&path.join("policy.yaml"))?;
        let tiers = Self::load_yaml::<ServiceTierTable>(&path.join("service_tiers.yaml"))?;
        let holidays = Self::load_yaml::<HolidayCalendar>(&path.join("holidays.yaml"))?;

        let config = VacationConfig::new(policy, tiers, holidays)?;
        info!(
            path = %path.display(),
            tiers = config.tiers().tiers().len(),
            holidays = config.holidays().len(),
            "Loaded vacation configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already built configuration.
    pub fn from_config(config: VacationConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &VacationConfig {
        &self.config
    }

    /// Returns the leave policy.
    pub fn policy(&self) -> &LeavePolicy {
        self.config.policy()
    }

    /// Returns the service tier table.
    pub fn tiers(&self) -> &ServiceTierTable {
        self.config.tiers()
    }

    /// Returns the named holidays.
    pub fn holidays(&self) -> &[Holiday] {
        self.config.holidays()
    }

    /// Returns the holiday rules used for working-day counting.
    pub fn holiday_specs(&self) -> &[HolidaySpec] {
        self.config.holiday_specs()
    }

    /// Base leave days for a category.
    pub fn base_days(&self, category: EmployeeCategory) -> u32 {
        self.policy().base_days(category)
    }

    /// The configured split limits.
    pub fn split_rules(&self) -> SplitRules {
        self.policy().split_rules()
    }

    /// A voluntary insurance classifier using the configured keywords.
    pub fn classifier(&self) -> VoluntaryClassifier {
        self.policy().classifier()
    }
}
