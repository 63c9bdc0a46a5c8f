//! Service tier tables.
//!
//! Leave bonuses are step functions of service months: membership in a tier
//! grants a fixed bonus regardless of the position within the tier.
//!
//! ## Statutory Table
//!
//! | Months   | Normal bonus | Abnormal bonus |
//! |----------|--------------|----------------|
//! | 0–60     | 0            | 0              |
//! | 61–120   | 3            | 5              |
//! | 121–180  | 5            | 7              |
//! | 181–240  | 7            | 9              |
//! | 241–300  | 9            | 12             |
//! | 301–372  | 11           | 15             |
//! | 373+     | 14           | 18             |

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One row of the tier table, covering months from `min_months` up to the
/// next tier's minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTier {
    /// The first month count belonging to this tier.
    pub min_months: u32,
    /// Bonus days for normal service months in this tier.
    pub normal_bonus: u32,
    /// Bonus days for abnormal-condition months in this tier.
    pub abnormal_bonus: u32,
}

/// An ordered tier table.
///
/// The first tier always starts at zero months and is the non-qualifying
/// band: abnormal months below the second tier's minimum do not qualify for
/// abnormal crediting at all.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::ServiceTierTable;
///
/// let table = ServiceTierTable::statutory();
/// assert_eq!(table.normal_bonus(60), 0);
/// assert_eq!(table.normal_bonus(61), 3);
/// assert_eq!(table.normal_bonus(400), 14);
/// assert!(table.abnormal_tier(60).is_none());
/// assert_eq!(table.abnormal_tier(70).unwrap().min_months, 61);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceTierTable {
    tiers: Vec<ServiceTier>,
}

impl ServiceTierTable {
    /// Creates a tier table, validating its shape.
    ///
    /// # Returns
    ///
    /// [`EngineError::InvalidConfig`] if the table is empty, does not start at
    /// zero months, or its minimums are not strictly ascending.
    pub fn new(tiers: Vec<ServiceTier>) -> EngineResult<Self> {
        match tiers.first() {
            None => {
                return Err(EngineError::InvalidConfig {
                    message: "service tier table is empty".to_string(),
                });
            }
            Some(first) if first.min_months != 0 => {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "first service tier must start at 0 months, found {}",
                        first.min_months
                    ),
                });
            }
            Some(_) => {}
        }

        if let Some(pair) = tiers.windows(2).find(|w| w[0].min_months >= w[1].min_months) {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "service tier minimums must ascend: {} is followed by {}",
                    pair[0].min_months, pair[1].min_months
                ),
            });
        }

        Ok(Self { tiers })
    }

    /// The statutory tier table.
    pub fn statutory() -> Self {
        let tier = |min_months, normal_bonus, abnormal_bonus| ServiceTier {
            min_months,
            normal_bonus,
            abnormal_bonus,
        };

        Self {
            tiers: vec![
                tier(0, 0, 0),
                tier(61, 3, 5),
                tier(121, 5, 7),
                tier(181, 7, 9),
                tier(241, 9, 12),
                tier(301, 11, 15),
                tier(373, 14, 18),
            ],
        }
    }

    /// All tiers in ascending order.
    pub fn tiers(&self) -> &[ServiceTier] {
        &self.tiers
    }

    /// The tier a month count falls into.
    pub fn tier_for(&self, months: u32) -> &ServiceTier {
        // The first tier starts at zero, so some tier always matches.
        self.tiers
            .iter()
            .rfind(|t| t.min_months <= months)
            .unwrap_or(&self.tiers[0])
    }

    /// The highest qualifying tier for abnormal-condition months, if any.
    ///
    /// The zero-month base tier never qualifies.
    pub fn abnormal_tier(&self, months: u32) -> Option<&ServiceTier> {
        self.tiers[1..].iter().rfind(|t| t.min_months <= months)
    }

    /// Bonus days for normal service months.
    pub fn normal_bonus(&self, months: u32) -> u32 {
        self.tier_for(months).normal_bonus
    }

    /// Bonus days for abnormal-condition months.
    pub fn abnormal_bonus(&self, months: u32) -> u32 {
        self.tier_for(months).abnormal_bonus
    }
}

impl Default for ServiceTierTable {
    fn default() -> Self {
        Self::statutory()
    }
}

impl<'de> Deserialize<'de> for ServiceTierTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            tiers: Vec<ServiceTier>,
        }

        let raw = Raw::deserialize(deserializer)?;
        ServiceTierTable::new(raw.tiers).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_bonus_boundaries() {
        let table = ServiceTierTable::statutory();
        let cases = [
            (0, 0),
            (60, 0),
            (61, 3),
            (120, 3),
            (121, 5),
            (180, 5),
            (181, 7),
            (240, 7),
            (241, 9),
            (300, 9),
            (301, 11),
            (372, 11),
            (373, 14),
            (1000, 14),
        ];

        for (months, bonus) in cases {
            assert_eq!(table.normal_bonus(months), bonus, "months = {}", months);
        }
    }

    #[test]
    fn test_abnormal_bonus_boundaries() {
        let table = ServiceTierTable::statutory();
        let cases = [
            (0, 0),
            (61, 5),
            (121, 7),
            (181, 9),
            (241, 12),
            (301, 15),
            (373, 18),
        ];

        for (months, bonus) in cases {
            assert_eq!(table.abnormal_bonus(months), bonus, "months = {}", months);
        }
    }

    #[test]
    fn test_abnormal_tier_requires_second_tier_minimum() {
        let table = ServiceTierTable::statutory();
        assert!(table.abnormal_tier(0).is_none());
        assert!(table.abnormal_tier(60).is_none());
        assert_eq!(table.abnormal_tier(61).unwrap().min_months, 61);
        assert_eq!(table.abnormal_tier(372).unwrap().min_months, 301);
        assert_eq!(table.abnormal_tier(500).unwrap().min_months, 373);
    }

    #[test]
    fn test_empty_table_rejected() {
        let result = ServiceTierTable::new(vec![]);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_table_not_starting_at_zero_rejected() {
        let result = ServiceTierTable::new(vec![ServiceTier {
            min_months: 12,
            normal_bonus: 1,
            abnormal_bonus: 1,
        }]);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_unordered_table_rejected() {
        let result = ServiceTierTable::new(vec![
            ServiceTier {
                min_months: 0,
                normal_bonus: 0,
                abnormal_bonus: 0,
            },
            ServiceTier {
                min_months: 120,
                normal_bonus: 5,
                abnormal_bonus: 7,
            },
            ServiceTier {
                min_months: 61,
                normal_bonus: 3,
                abnormal_bonus: 5,
            },
        ]);

        match result {
            Err(EngineError::InvalidConfig { message }) => {
                assert!(message.contains("120 is followed by 61"));
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_validates_table() {
        let yaml = "tiers:\n  - { min_months: 5, normal_bonus: 0, abnormal_bonus: 0 }\n";
        let result: Result<ServiceTierTable, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());

        let yaml = "tiers:\n  - { min_months: 0, normal_bonus: 0, abnormal_bonus: 0 }\n  - { min_months: 61, normal_bonus: 3, abnormal_bonus: 5 }\n";
        let table: ServiceTierTable = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(table.tiers().len(), 2);
    }
}
