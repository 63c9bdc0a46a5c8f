//! Configuration types for the vacation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::allocation::{DEFAULT_MAX_SPLITS, DEFAULT_MINIMUM_SEGMENT_DAYS, SplitRules};
use crate::calculation::{
    DEFAULT_ELIGIBILITY_MONTHS, DEFAULT_VOLUNTARY_KEYWORDS, ServiceTierTable, VoluntaryClassifier,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeCategory, Holiday, HolidaySpec};

/// Base leave days per employee category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BaseDays {
    /// Base days for [`EmployeeCategory::Standard`].
    pub standard: u32,
    /// Base days for [`EmployeeCategory::Extended`].
    pub extended: u32,
}

impl Default for BaseDays {
    fn default() -> Self {
        Self {
            standard: EmployeeCategory::Standard.default_base_days(),
            extended: EmployeeCategory::Extended.default_base_days(),
        }
    }
}

/// Leave policy from policy.yaml.
///
/// Every field is optional in the file and falls back to the statutory value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LeavePolicy {
    /// Base leave days per category.
    pub base_days: BaseDays,
    /// Maximum number of leave splits per request.
    pub max_splits: usize,
    /// Days the longest split must reach.
    pub minimum_segment_days: u32,
    /// Months of service before leave may be taken.
    pub eligibility_months: u32,
    /// Organization name fragments identifying voluntary insurance payers.
    pub voluntary_keywords: Vec<String>,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            base_days: BaseDays::default(),
            max_splits: DEFAULT_MAX_SPLITS,
            minimum_segment_days: DEFAULT_MINIMUM_SEGMENT_DAYS,
            eligibility_months: DEFAULT_ELIGIBILITY_MONTHS,
            voluntary_keywords: DEFAULT_VOLUNTARY_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

impl LeavePolicy {
    /// Checks the values a YAML schema cannot express.
    pub fn validate(&self) -> EngineResult<()> {
        if self.max_splits == 0 {
            return Err(EngineError::InvalidConfig {
                message: "max_splits must be at least 1".to_string(),
            });
        }
        if self.minimum_segment_days == 0 {
            return Err(EngineError::InvalidConfig {
                message: "minimum_segment_days must be at least 1".to_string(),
            });
        }
        if self.voluntary_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(EngineError::InvalidConfig {
                message: "voluntary_keywords must not contain blank entries".to_string(),
            });
        }
        Ok(())
    }

    /// Base leave days for a category.
    pub fn base_days(&self, category: EmployeeCategory) -> u32 {
        match category {
            EmployeeCategory::Standard => self.base_days.standard,
            EmployeeCategory::Extended => self.base_days.extended,
        }
    }

    /// The split limits this policy imposes.
    pub fn split_rules(&self) -> SplitRules {
        SplitRules {
            max_splits: self.max_splits,
            minimum_segment_days: self.minimum_segment_days,
        }
    }

    /// A classifier using this policy's voluntary keywords.
    pub fn classifier(&self) -> VoluntaryClassifier {
        VoluntaryClassifier::new(&self.voluntary_keywords)
    }
}

/// Holiday calendar from holidays.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HolidayCalendar {
    /// Holidays in file order.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    /// Checks that recurring holidays name a real calendar day.
    pub fn validate(&self) -> EngineResult<()> {
        for holiday in &self.holidays {
            if let HolidaySpec::Recurring { month, day } = holiday.spec {
                // 2024 is a leap year, so 29 February is accepted.
                if chrono::NaiveDate::from_ymd_opt(2024, month, day).is_none() {
                    return Err(EngineError::InvalidConfig {
                        message: format!(
                            "holiday '{}' has invalid recurring date {}-{}",
                            holiday.name, month, day
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    /// The holiday rules without their names.
    pub fn specs(&self) -> Vec<HolidaySpec> {
        self.holidays.iter().map(|h| h.spec).collect()
    }
}

/// The complete vacation configuration loaded from YAML files.
#[derive(Debug, Clone, Default)]
pub struct VacationConfig {
    policy: LeavePolicy,
    tiers: ServiceTierTable,
    holidays: HolidayCalendar,
    holiday_specs: Vec<HolidaySpec>,
}

impl VacationConfig {
    /// Creates a configuration from its component parts, validating each.
    pub fn new(
        policy: LeavePolicy,
        tiers: ServiceTierTable,
        holidays: HolidayCalendar,
    ) -> EngineResult<Self> {
        policy.validate()?;
        holidays.validate()?;

        let holiday_specs = holidays.specs();
        Ok(Self {
            policy,
            tiers,
            holidays,
            holiday_specs,
        })
    }

    /// Returns the leave policy.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Returns the service tier table.
    pub fn tiers(&self) -> &ServiceTierTable {
        &self.tiers
    }

    /// Returns the named holidays.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays.holidays
    }

    /// Returns the holiday rules used for working-day counting.
    pub fn holiday_specs(&self) -> &[HolidaySpec] {
        &self.holiday_specs
    }
}
