//! Annual leave entitlement calculation.
//!
//! This module converts service months into paid-leave days.
//!
//! ## Floor-only crediting
//!
//! Abnormal-condition months are credited at the abnormal rate only up to the
//! floor of the highest tier they reach. Everything above that floor is folded
//! back into the normal pool and earns the normal rate. Abnormal months below
//! the first qualifying tier are entirely normal months.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{AuditStep, EntitlementResult};

use super::service_tiers::ServiceTierTable;

/// The result of an audited entitlement calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementCalculation {
    /// The computed entitlement.
    pub result: EntitlementResult,
    /// Audit steps recording each rule applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the annual leave entitlement using the statutory tier table.
///
/// # Arguments
///
/// * `total_months` - Total qualifying service months
/// * `total_abnormal_months` - Months worked under abnormal conditions
/// * `base_days` - Base allotment for the employee category (15 or 20)
///
/// # Examples
///
/// ## Long normal service
///
/// ```
/// use vacation_engine::calculation::calculate_entitlement;
///
/// let result = calculate_entitlement(400, 0, 15);
/// assert_eq!(result.normal_months, 400);
/// assert_eq!(result.normal_additional, 14);
/// assert_eq!(result.abnormal_additional, 0);
/// assert_eq!(result.total, 29);
/// ```
///
/// ## Abnormal months above a tier floor
///
/// ```
/// use vacation_engine::calculation::calculate_entitlement;
///
/// let result = calculate_entitlement(200, 70, 15);
/// assert_eq!(result.effective_abnormal_months, 61);
/// assert_eq!(result.excess_abnormal_months, 9);
/// assert_eq!(result.normal_months, 139);
/// assert_eq!(result.total, 25);
/// ```
pub fn calculate_entitlement(
    total_months: u32,
    total_abnormal_months: u32,
    base_days: u32,
) -> EntitlementResult {
    calculate_entitlement_with(
        &ServiceTierTable::statutory(),
        total_months,
        total_abnormal_months,
        base_days,
    )
}

/// Calculates the annual leave entitlement against a given tier table.
///
/// # Behavior
///
/// 1. The highest qualifying tier whose minimum is at most
///    `total_abnormal_months` is matched. Without a match, no abnormal months
///    are effective and all of them are excess.
/// 2. With a match, the tier minimum is effective and the remainder is excess.
/// 3. `normal_months = total_months - effective_abnormal_months`, saturating at
///    zero when the abnormal months exceed the total.
/// 4. Each pool is looked up in its own bonus column.
/// 5. `total = base_days + normal_additional + abnormal_additional`.
pub fn calculate_entitlement_with(
    table: &ServiceTierTable,
    total_months: u32,
    total_abnormal_months: u32,
    base_days: u32,
) -> EntitlementResult {
    let effective_abnormal_months = table
        .abnormal_tier(total_abnormal_months)
        .map(|t| t.min_months)
        .unwrap_or(0);
    let excess_abnormal_months = total_abnormal_months - effective_abnormal_months;

    let normal_months = total_months.saturating_sub(effective_abnormal_months);
    let normal_additional = table.normal_bonus(normal_months);
    let abnormal_additional = if effective_abnormal_months > 0 {
        table.abnormal_bonus(effective_abnormal_months)
    } else {
        0
    };

    let total = base_days + normal_additional + abnormal_additional;

    debug!(
        total_months,
        total_abnormal_months,
        effective_abnormal_months,
        normal_months,
        total,
        "Calculated leave entitlement"
    );

    EntitlementResult {
        base: base_days,
        normal_months,
        normal_additional,
        effective_abnormal_months,
        excess_abnormal_months,
        abnormal_additional,
        total,
    }
}

/// Calculates the entitlement and records an audit step for each rule.
///
/// Steps are numbered from `step_number_start` and appear in order:
/// `abnormal_tier_match`, `normal_bonus_lookup`, `abnormal_bonus_lookup`,
/// `entitlement_total`.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::{calculate_entitlement_audited, ServiceTierTable};
///
/// let calculation =
///     calculate_entitlement_audited(&ServiceTierTable::statutory(), 200, 70, 15, 1);
///
/// assert_eq!(calculation.result.total, 25);
/// assert_eq!(calculation.audit_steps.len(), 4);
/// assert_eq!(calculation.audit_steps[0].rule_id, "abnormal_tier_match");
/// assert_eq!(calculation.audit_steps[3].step_number, 4);
/// ```
pub fn calculate_entitlement_audited(
    table: &ServiceTierTable,
    total_months: u32,
    total_abnormal_months: u32,
    base_days: u32,
    step_number_start: u32,
) -> EntitlementCalculation {
    let result = calculate_entitlement_with(table, total_months, total_abnormal_months, base_days);
    let mut step_number = step_number_start;
    let mut audit_steps = Vec::with_capacity(4);

    let tier_reasoning = if result.effective_abnormal_months > 0 {
        format!(
            "{} abnormal months reach the tier starting at {} months: {} credited as abnormal, {} returned to normal service",
            total_abnormal_months,
            result.effective_abnormal_months,
            result.effective_abnormal_months,
            result.excess_abnormal_months
        )
    } else {
        format!(
            "{} abnormal months do not reach a qualifying tier: all counted as normal service",
            total_abnormal_months
        )
    };

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "abnormal_tier_match".to_string(),
        rule_name: "Abnormal Condition Tier Match".to_string(),
        input: serde_json::json!({
            "total_abnormal_months": total_abnormal_months
        }),
        output: serde_json::json!({
            "effective_abnormal_months": result.effective_abnormal_months,
            "excess_abnormal_months": result.excess_abnormal_months
        }),
        reasoning: tier_reasoning,
    });
    step_number += 1;

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "normal_bonus_lookup".to_string(),
        rule_name: "Normal Service Bonus".to_string(),
        input: serde_json::json!({
            "total_months": total_months,
            "effective_abnormal_months": result.effective_abnormal_months
        }),
        output: serde_json::json!({
            "normal_months": result.normal_months,
            "normal_additional": result.normal_additional
        }),
        reasoning: format!(
            "{} normal service months earn {} bonus days",
            result.normal_months, result.normal_additional
        ),
    });
    step_number += 1;

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "abnormal_bonus_lookup".to_string(),
        rule_name: "Abnormal Condition Bonus".to_string(),
        input: serde_json::json!({
            "effective_abnormal_months": result.effective_abnormal_months
        }),
        output: serde_json::json!({
            "abnormal_additional": result.abnormal_additional
        }),
        reasoning: format!(
            "{} abnormal months earn {} bonus days",
            result.effective_abnormal_months, result.abnormal_additional
        ),
    });
    step_number += 1;

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "entitlement_total".to_string(),
        rule_name: "Annual Leave Entitlement".to_string(),
        input: serde_json::json!({
            "base": result.base,
            "normal_additional": result.normal_additional,
            "abnormal_additional": result.abnormal_additional
        }),
        output: serde_json::json!({
            "total": result.total
        }),
        reasoning: format!(
            "{} base days + {} normal bonus + {} abnormal bonus = {} days",
            result.base, result.normal_additional, result.abnormal_additional, result.total
        ),
    });

    EntitlementCalculation {
        result,
        audit_steps,
    }
}
