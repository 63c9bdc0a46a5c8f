//! Entitlement result model.

use serde::{Deserialize, Serialize};

/// The annual paid-leave entitlement and how it was derived.
///
/// This is the budget a leave plan must consume exactly.
///
/// # Example
///
/// ```
/// use vacation_engine::models::EntitlementResult;
///
/// let result = EntitlementResult {
///     base: 15,
///     normal_months: 139,
///     normal_additional: 5,
///     effective_abnormal_months: 61,
///     excess_abnormal_months: 9,
///     abnormal_additional: 5,
///     total: 25,
/// };
/// assert_eq!(result.total_abnormal_months(), 70);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementResult {
    /// Base allotment selected by the employee category.
    pub base: u32,
    /// Months counted at the normal rate.
    pub normal_months: u32,
    /// Bonus days earned by normal months.
    pub normal_additional: u32,
    /// Abnormal-condition months credited at the abnormal rate (a tier floor).
    pub effective_abnormal_months: u32,
    /// Abnormal-condition months returned to the normal pool.
    pub excess_abnormal_months: u32,
    /// Bonus days earned by the credited abnormal months.
    pub abnormal_additional: u32,
    /// Total annual leave days.
    pub total: u32,
}

impl EntitlementResult {
    /// The abnormal month count the result was computed from.
    pub fn total_abnormal_months(&self) -> u32 {
        self.effective_abnormal_months + self.excess_abnormal_months
    }
}
