//! Calculation logic for the Vacation Engine.
//!
//! This module contains the leaf computations the leave allocator builds on:
//! working-day counting, service month aggregation from payment records,
//! abnormal-condition month tracking, the service tier tables, the annual
//! entitlement calculation, and the work year and eligibility window.

mod abnormal_months;
mod eligibility;
mod entitlement;
mod service_aggregation;
mod service_tiers;
mod working_days;

pub use abnormal_months::AbnormalMonths;
pub use eligibility::{
    DEFAULT_ELIGIBILITY_MONTHS, EligibilityWindow, eligibility_date, work_year_containing,
};
pub use entitlement::{
    EntitlementCalculation, calculate_entitlement, calculate_entitlement_audited,
    calculate_entitlement_with,
};
pub use service_aggregation::{DEFAULT_VOLUNTARY_KEYWORDS, VoluntaryClassifier, aggregate_service};
pub use service_tiers::{ServiceTier, ServiceTierTable};
pub use working_days::{count_working_days, is_holiday, is_weekend, is_working_day};
