//! Abnormal working condition months.
//!
//! Abnormal months are self-reported per year and cannot exceed the number of
//! distinct paid months recorded for that year.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::ServiceSummary;

/// Per-year months worked under abnormal or hazardous conditions.
///
/// Every entry is clamped to `0..=unique_paid_months(year)` when it is set,
/// and can be re-clamped after the payment records change.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::{AbnormalMonths, aggregate_service, VoluntaryClassifier};
/// use vacation_engine::models::PaymentRecord;
///
/// let records: Vec<PaymentRecord> = (1..=8)
///     .map(|month| PaymentRecord {
///         year: 2024,
///         month,
///         organization: "Acme Mining".to_string(),
///         paid: true,
///         insurance_kind: None,
///     })
///     .collect();
/// let summary = aggregate_service(&records, true, &VoluntaryClassifier::default());
///
/// let mut abnormal = AbnormalMonths::default();
/// assert_eq!(abnormal.set(2024, 12, &summary), 8); // clamped to 8 paid months
/// assert_eq!(abnormal.total(), 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbnormalMonths {
    months: BTreeMap<i32, u32>,
}

impl AbnormalMonths {
    /// Records the abnormal months for a year, clamped to the year's paid months.
    ///
    /// Returns the value actually stored.
    pub fn set(&mut self, year: i32, months: u32, summary: &ServiceSummary) -> u32 {
        let limit = summary.unique_paid_months(year);
        let clamped = months.min(limit);

        if clamped != months {
            debug!(year, requested = months, limit, "Clamped abnormal months");
        }

        if clamped == 0 {
            self.months.remove(&year);
        } else {
            self.months.insert(year, clamped);
        }
        clamped
    }

    /// Returns the abnormal months recorded for a year.
    pub fn get(&self, year: i32) -> u32 {
        self.months.get(&year).copied().unwrap_or(0)
    }

    /// Re-applies the clamp after the service summary was recomputed.
    pub fn reclamp(&mut self, summary: &ServiceSummary) {
        self.months.retain(|year, months| {
            *months = (*months).min(summary.unique_paid_months(*year));
            *months > 0
        });
    }

    /// Total abnormal months across all years.
    pub fn total(&self) -> u32 {
        self.months.values().sum()
    }

    /// Iterates over `(year, months)` entries in year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        self.months.iter().map(|(y, m)| (*y, *m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::YearService;

    fn summary_with(years: &[(i32, u32)]) -> ServiceSummary {
        let mut summary = ServiceSummary::default();
        for (year, paid) in years {
            let months: std::collections::BTreeSet<u32> = (1..=*paid).collect();
            summary.per_year.insert(
                *year,
                YearService {
                    unique_paid_months: months.clone(),
                    voluntary_months: Default::default(),
                    regular_months: months,
                },
            );
            summary.total_months += paid;
        }
        summary
    }

    #[test]
    fn test_set_within_limit_is_kept() {
        let summary = summary_with(&[(2023, 12)]);
        let mut abnormal = AbnormalMonths::default();

        assert_eq!(abnormal.set(2023, 7, &summary), 7);
        assert_eq!(abnormal.get(2023), 7);
    }

    #[test]
    fn test_set_above_paid_months_is_clamped() {
        let summary = summary_with(&[(2023, 5)]);
        let mut abnormal = AbnormalMonths::default();

        assert_eq!(abnormal.set(2023, 9, &summary), 5);
        assert_eq!(abnormal.get(2023), 5);
    }

    #[test]
    fn test_set_for_year_without_records_is_zero() {
        let summary = summary_with(&[(2023, 12)]);
        let mut abnormal = AbnormalMonths::default();

        assert_eq!(abnormal.set(2010, 4, &summary), 0);
        assert_eq!(abnormal.total(), 0);
    }

    #[test]
    fn test_total_sums_years() {
        let summary = summary_with(&[(2021, 12), (2022, 12), (2023, 6)]);
        let mut abnormal = AbnormalMonths::default();
        abnormal.set(2021, 12, &summary);
        abnormal.set(2022, 10, &summary);
        abnormal.set(2023, 6, &summary);

        assert_eq!(abnormal.total(), 28);
        assert_eq!(
            abnormal.iter().collect::<Vec<_>>(),
            vec![(2021, 12), (2022, 10), (2023, 6)]
        );
    }

    #[test]
    fn test_reclamp_after_records_change() {
        let before = summary_with(&[(2021, 12), (2022, 12)]);
        let mut abnormal = AbnormalMonths::default();
        abnormal.set(2021, 12, &before);
        abnormal.set(2022, 12, &before);

        let after = summary_with(&[(2021, 4)]);
        abnormal.reclamp(&after);

        assert_eq!(abnormal.get(2021), 4);
        assert_eq!(abnormal.get(2022), 0);
        assert_eq!(abnormal.total(), 4);
    }
}
