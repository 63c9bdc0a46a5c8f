//! Social-insurance payment record model.
//!
//! Payment records are produced by an external document-extraction step, one
//! per employer per month. They are the only input to service aggregation.

use serde::{Deserialize, Serialize};

/// How a payment record's insurance contribution is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceKind {
    /// Compulsory insurance paid through an employer.
    Regular,
    /// Insurance the person paid for themselves outside of employment.
    Voluntary,
}

/// A single month of social-insurance contribution from one organization.
///
/// Several records may exist for the same `(year, month)` when the employee
/// had concurrent employers; aggregation counts such a month once.
///
/// # Example
///
/// ```
/// use vacation_engine::models::{InsuranceKind, PaymentRecord};
///
/// let record = PaymentRecord {
///     year: 2024,
///     month: 3,
///     organization: "Acme Manufacturing".to_string(),
///     paid: true,
///     insurance_kind: Some(InsuranceKind::Regular),
/// };
/// assert!(record.has_valid_month());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// The calendar year of the contribution.
    pub year: i32,
    /// The calendar month of the contribution (1-12).
    pub month: u32,
    /// The organization that made (or received) the contribution.
    pub organization: String,
    /// Whether the contribution was actually paid for this month.
    pub paid: bool,
    /// Explicit classification, if the producer supplied one.
    ///
    /// When absent, the organization name is matched against the configured
    /// voluntary-insurance keywords.
    #[serde(default)]
    pub insurance_kind: Option<InsuranceKind>,
}

impl PaymentRecord {
    /// Returns true if the month is within 1..=12.
    pub fn has_valid_month(&self) -> bool {
        (1..=12).contains(&self.month)
    }
}
