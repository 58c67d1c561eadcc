use super::{BulkDiscountRule, PricingRuleBox, ThreeForTwoRule};
use crate::domain::money::Price;
use crate::domain::product::Sku;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Declarative description of a shipped pricing rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleConfig {
    ThreeForTwo {
        sku: Sku,
    },
    BulkDiscount {
        sku: Sku,
        min_quantity: usize,
        discounted_price: Price,
    },
}

impl RuleConfig {
    /// Builds the rule, validating its parameters.
    pub fn into_rule(self) -> Result<PricingRuleBox> {
        Ok(match self {
            RuleConfig::ThreeForTwo { sku } => Box::new(ThreeForTwoRule::new(sku)),
            RuleConfig::BulkDiscount {
                sku,
                min_quantity,
                discounted_price,
            } => Box::new(BulkDiscountRule::new(sku, min_quantity, discounted_price)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;
    use crate::domain::rules::PricingRuleRequest;
    use crate::error::CheckoutError;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_configured_rule_prices_cart() {
        let rule = RuleConfig::ThreeForTwo { sku: Sku::Atv }.into_rule().unwrap();
        let catalog = Catalog::default();
        let request = PricingRuleRequest::new(vec![Sku::Atv; 3], &catalog);

        assert_eq!(
            rule.calculate_price(&request).discount,
            Price::new(dec!(109.50))
        );
    }

    #[test]
    fn test_negative_bulk_price_rejected() {
        let config = RuleConfig::BulkDiscount {
            sku: Sku::Ipd,
            min_quantity: 0,
            discounted_price: Price::new(Decimal::MIN),
        };
        assert!(matches!(
            config.into_rule(),
            Err(CheckoutError::ValidationError(_))
        ));
    }
}
