use super::helpers::{item_count, unit_price};
use super::{PricingRule, PricingRuleRequest, PricingRuleResult};
use crate::domain::money::Price;
use crate::domain::product::Sku;
use crate::error::{CheckoutError, Result};

/// Drops the unit price of a product once more than `min_quantity` are bought.
///
/// The threshold is exclusive: buying exactly `min_quantity` units keeps the
/// catalog price. Once it applies, every unit (not just the excess) is
/// charged at `discounted_price`. An override at or above the catalog price
/// never applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulkDiscountRule {
    sku: Sku,
    min_quantity: usize,
    discounted_price: Price,
}

impl BulkDiscountRule {
    /// Fails with `ValidationError` when `discounted_price` is negative.
    pub fn new(sku: Sku, min_quantity: usize, discounted_price: Price) -> Result<Self> {
        if discounted_price < Price::ZERO {
            return Err(CheckoutError::ValidationError(format!(
                "Discounted price for '{sku}' must not be negative"
            )));
        }
        Ok(Self {
            sku,
            min_quantity,
            discounted_price,
        })
    }

    pub fn sku(&self) -> Sku {
        self.sku
    }

    pub fn min_quantity(&self) -> usize {
        self.min_quantity
    }

    pub fn discounted_price(&self) -> Price {
        self.discounted_price
    }
}

impl PricingRule for BulkDiscountRule {
    fn applies_to(&self, request: &PricingRuleRequest<'_>) -> bool {
        item_count(request, self.sku) > self.min_quantity
            && unit_price(request, self.sku).is_some_and(|price| price > self.discounted_price)
    }

    fn calculate_price(&self, request: &PricingRuleRequest<'_>) -> PricingRuleResult {
        let Some(price) = unit_price(request, self.sku) else {
            return PricingRuleResult::not_applicable();
        };
        if !self.applies_to(request) {
            return PricingRuleResult::not_applicable();
        }

        let quantity = item_count(request, self.sku);
        PricingRuleResult::discount((price - self.discounted_price).times(quantity))
    }

    fn name(&self) -> &str {
        "bulk_discount"
    }
}
