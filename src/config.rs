use crate::inputs::IntoMoney;
use crate::types::AmilError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

/// Zakat threshold policy: the gold price and the nisab weight it is applied to.
///
/// Constructed once at process startup (explicitly, from env, or from a JSON
/// file) and then treated as immutable — a changed gold price is a new
/// deployment, not a runtime mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZakatRule {
    pub gold_price_per_gram: Decimal,
    /// Nisab weight in grams of gold. Defaults to 85g.
    pub nisab_gold_grams: Decimal,
}

impl ZakatRule {
    pub fn new(gold_price_per_gram: impl IntoMoney) -> Result<Self, AmilError> {
        let rule = ZakatRule {
            gold_price_per_gram: gold_price_per_gram.into_money()?,
            nisab_gold_grams: dec!(85),
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Validates the rule for logical consistency.
    pub fn validate(&self) -> Result<(), AmilError> {
        if self.gold_price_per_gram <= Decimal::ZERO {
            return Err(AmilError::validation(
                "gold_price_per_gram",
                "gold price must be positive to derive a nisab threshold",
            ));
        }
        if self.nisab_gold_grams <= Decimal::ZERO {
            return Err(AmilError::validation(
                "nisab_gold_grams",
                "nisab weight must be positive",
            ));
        }
        Ok(())
    }

    /// Attempts to load the rule from environment variables.
    ///
    /// `AMIL_GOLD_PRICE` is required; `AMIL_NISAB_GRAMS` overrides the 85g default.
    pub fn from_env() -> Result<Self, AmilError> {
        let gold = env::var("AMIL_GOLD_PRICE")
            .map_err(|_| AmilError::validation("AMIL_GOLD_PRICE", "env var not set"))?;
        let mut rule = ZakatRule::new(gold.as_str())?;
        if let Ok(grams) = env::var("AMIL_NISAB_GRAMS") {
            rule = rule.with_nisab_grams(grams.as_str())?;
        }
        Ok(rule)
    }

    /// Attempts to load the rule from a JSON file.
    pub fn try_from_json(path: &str) -> Result<Self, AmilError> {
        let content = fs::read_to_string(path)
            .map_err(|e| AmilError::validation("config", format!("failed to read {}: {}", path, e)))?;
        let rule: ZakatRule = serde_json::from_str(&content)
            .map_err(|e| AmilError::validation("config", format!("failed to parse {}: {}", path, e)))?;
        rule.validate()?;
        Ok(rule)
    }

    pub fn with_nisab_grams(mut self, grams: impl IntoMoney) -> Result<Self, AmilError> {
        self.nisab_gold_grams = grams.into_money()?;
        self.validate()?;
        Ok(self)
    }

    /// The monetary nisab threshold: gold price x nisab weight.
    pub fn nisab(&self) -> Decimal {
        self.gold_price_per_gram * self.nisab_gold_grams
    }

    /// The zakat rate applied to income at or above nisab.
    pub fn rate(&self) -> Decimal {
        dec!(0.025)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nisab_is_price_times_grams() {
        // 1,200,000 IDR/g x 85g = 102,000,000 IDR.
        let rule = ZakatRule::new(dec!(1200000)).unwrap();
        assert_eq!(rule.nisab(), dec!(102000000));
        assert_eq!(rule.rate(), dec!(0.025));
    }

    #[test]
    fn test_rejects_non_positive_price() {
        assert!(ZakatRule::new(dec!(0)).is_err());
        assert!(ZakatRule::new(dec!(-10)).is_err());
    }

    #[test]
    fn test_custom_nisab_weight() {
        let rule = ZakatRule::new(dec!(100)).unwrap().with_nisab_grams(20).unwrap();
        assert_eq!(rule.nisab(), dec!(2000));
    }
}
