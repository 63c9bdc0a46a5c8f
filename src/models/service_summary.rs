//! Service summary model.
//!
//! A [`ServiceSummary`] is always derived from a set of payment records and is
//! never edited directly.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Paid months within a single calendar year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearService {
    /// Months paid by at least one organization of either kind.
    pub unique_paid_months: BTreeSet<u32>,
    /// Months paid through voluntary insurance.
    pub voluntary_months: BTreeSet<u32>,
    /// Months paid through regular employer insurance.
    pub regular_months: BTreeSet<u32>,
}

impl YearService {
    /// Number of distinct paid months in the year.
    pub fn unique_paid_count(&self) -> u32 {
        self.unique_paid_months.len() as u32
    }

    /// Number of months counted toward service for the year.
    pub fn counted_months(&self, include_voluntary: bool) -> u32 {
        if include_voluntary {
            self.unique_paid_months.len() as u32
        } else {
            self.regular_months.len() as u32
        }
    }
}

/// Per-year and total qualifying service months.
///
/// # Example
///
/// ```
/// use vacation_engine::models::ServiceSummary;
///
/// let summary = ServiceSummary::default();
/// assert_eq!(summary.total_months, 0);
/// assert_eq!(summary.unique_paid_months(2024), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSummary {
    /// Paid months keyed by calendar year.
    pub per_year: BTreeMap<i32, YearService>,
    /// Total qualifying service months across all years.
    pub total_months: u32,
}

impl ServiceSummary {
    /// Returns the number of distinct paid months for a year, or 0 if the
    /// year has no records.
    pub fn unique_paid_months(&self, year: i32) -> u32 {
        self.per_year
            .get(&year)
            .map(YearService::unique_paid_count)
            .unwrap_or(0)
    }
}
