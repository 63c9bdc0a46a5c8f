//! Employee model and related types.
//!
//! This module defines the Employee struct and EmployeeCategory enum used to
//! select an employee's base leave allotment and eligibility window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The category that determines an employee's base annual leave allotment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeCategory {
    /// Ordinary working conditions (15 base days by default).
    Standard,
    /// Categories entitled to the larger base allotment (20 base days by default).
    Extended,
}

impl EmployeeCategory {
    /// The statutory base allotment for this category, used when no policy
    /// configuration overrides it.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::models::EmployeeCategory;
    ///
    /// assert_eq!(EmployeeCategory::Standard.default_base_days(), 15);
    /// assert_eq!(EmployeeCategory::Extended.default_base_days(), 20);
    /// ```
    pub fn default_base_days(self) -> u32 {
        match self {
            EmployeeCategory::Standard => 15,
            EmployeeCategory::Extended => 20,
        }
    }
}

impl std::fmt::Display for EmployeeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeCategory::Standard => write!(f, "standard"),
            EmployeeCategory::Extended => write!(f, "extended"),
        }
    }
}

/// Represents an employee requesting leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The date the employee was hired. Anchors the work year.
    pub hire_date: NaiveDate,
    /// The category selecting the base leave allotment.
    pub category: EmployeeCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "emp_001",
            "hire_date": "2021-04-12",
            "category": "extended"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(
            employee.hire_date,
            NaiveDate::from_ymd_opt(2021, 4, 12).unwrap()
        );
        assert_eq!(employee.category, EmployeeCategory::Extended);
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&EmployeeCategory::Standard).unwrap(),
            "\"standard\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeCategory::Extended).unwrap(),
            "\"extended\""
        );
    }

    #[test]
    fn test_category_display() {
        assert_eq!(EmployeeCategory::Standard.to_string(), "standard");
        assert_eq!(EmployeeCategory::Extended.to_string(), "extended");
    }
}
