//! Service month aggregation.
//!
//! This module turns raw payment records into a [`ServiceSummary`]: months
//! paid by concurrent employers count once, and voluntary-insurance months are
//! tracked separately so they can be excluded from service when required.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::models::{InsuranceKind, PaymentRecord, ServiceSummary, YearService};

/// Keyword substrings identifying voluntary-insurance organizations when a
/// record carries no explicit classification.
pub const DEFAULT_VOLUNTARY_KEYWORDS: &[&str] = &["сайн дурын", "сайн дураар", "voluntary"];

/// Classifies payment records as regular or voluntary insurance.
///
/// Records with an explicit [`InsuranceKind`] keep it. Records without one
/// are classified by a case-insensitive substring match of the organization
/// name against the keyword list, which exists to backfill historical data.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::VoluntaryClassifier;
/// use vacation_engine::models::{InsuranceKind, PaymentRecord};
///
/// let classifier = VoluntaryClassifier::default();
/// let record = PaymentRecord {
///     year: 2018,
///     month: 6,
///     organization: "Сайн дурын даатгал - Хан-Уул".to_string(),
///     paid: true,
///     insurance_kind: None,
/// };
/// assert_eq!(classifier.classify(&record), InsuranceKind::Voluntary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoluntaryClassifier {
    keywords: Vec<String>,
}

impl VoluntaryClassifier {
    /// Creates a classifier matching the given keywords.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// Returns the insurance kind of a record.
    pub fn classify(&self, record: &PaymentRecord) -> InsuranceKind {
        if let Some(kind) = record.insurance_kind {
            return kind;
        }

        let organization = record.organization.to_lowercase();
        if self.keywords.iter().any(|k| organization.contains(k.as_str())) {
            InsuranceKind::Voluntary
        } else {
            InsuranceKind::Regular
        }
    }
}

impl Default for VoluntaryClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUNTARY_KEYWORDS)
    }
}

/// Aggregates payment records into per-year and total service months.
///
/// # Arguments
///
/// * `records` - Payment records, in any order, possibly from several employers
/// * `include_voluntary` - Whether voluntary-insurance months count toward the total
/// * `classifier` - Decides which records are voluntary insurance
///
/// # Returns
///
/// A [`ServiceSummary`] where, for every year,
/// `unique_paid_months = regular_months ∪ voluntary_months`. The total sums
/// `|unique_paid_months|` per year when `include_voluntary` is set and
/// `|regular_months|` otherwise.
///
/// # Behavior
///
/// - Unpaid records never contribute
/// - Records with a month outside 1..=12 are skipped and logged
/// - An empty record list yields an all-zero summary
/// - The input is never mutated; the same input always yields the same summary
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::{aggregate_service, VoluntaryClassifier};
/// use vacation_engine::models::PaymentRecord;
///
/// let record = |org: &str, month: u32| PaymentRecord {
///     year: 2024,
///     month,
///     organization: org.to_string(),
///     paid: true,
///     insurance_kind: None,
/// };
///
/// // Two employers both paid March
/// let records = vec![record("Acme", 3), record("Globex", 3), record("Globex", 4)];
/// let summary = aggregate_service(&records, true, &VoluntaryClassifier::default());
///
/// assert_eq!(summary.unique_paid_months(2024), 2);
/// assert_eq!(summary.total_months, 2);
/// ```
pub fn aggregate_service(
    records: &[PaymentRecord],
    include_voluntary: bool,
    classifier: &VoluntaryClassifier,
) -> ServiceSummary {
    // year -> (organization, kind) -> paid month slots
    let mut buckets: BTreeMap<i32, BTreeMap<(&str, InsuranceKind), [bool; 12]>> = BTreeMap::new();

    for record in records {
        if !record.has_valid_month() {
            warn!(
                year = record.year,
                month = record.month,
                organization = %record.organization,
                "Skipping payment record with invalid month"
            );
            continue;
        }

        let kind = classifier.classify(record);
        let slots = buckets
            .entry(record.year)
            .or_default()
            .entry((record.organization.as_str(), kind))
            .or_insert([false; 12]);

        if record.paid {
            slots[(record.month - 1) as usize] = true;
        }
    }

    let mut per_year = BTreeMap::new();
    for (year, organizations) in buckets {
        let mut service = YearService::default();

        for ((_, kind), slots) in organizations {
            let paid_months = slots
                .iter()
                .enumerate()
                .filter(|(_, paid)| **paid)
                .map(|(i, _)| i as u32 + 1);

            match kind {
                InsuranceKind::Regular => service.regular_months.extend(paid_months),
                InsuranceKind::Voluntary => service.voluntary_months.extend(paid_months),
            }
        }

        service.unique_paid_months = service
            .regular_months
            .union(&service.voluntary_months)
            .copied()
            .collect();

        per_year.insert(year, service);
    }

    let total_months: u32 = per_year
        .values()
        .map(|s| s.counted_months(include_voluntary))
        .sum();

    debug!(
        records = records.len(),
        years = per_year.len(),
        total_months,
        include_voluntary,
        "Aggregated service months"
    );

    ServiceSummary {
        per_year,
        total_months,
    }
}
