use super::helpers::{item_count, unit_price};
use super::{PricingRule, PricingRuleRequest, PricingRuleResult};
use crate::domain::product::Sku;

const GROUP_SIZE: usize = 3;
const PAID_PER_GROUP: usize = 2;

/// Buy three of a product, pay for two.
///
/// Every complete group of three is charged as two units; leftover units
/// are charged at full price. A product missing from the catalog or priced
/// at zero never qualifies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreeForTwoRule {
    sku: Sku,
}

impl ThreeForTwoRule {
    pub fn new(sku: Sku) -> Self {
        Self { sku }
    }

    pub fn sku(&self) -> Sku {
        self.sku
    }
}

impl PricingRule for ThreeForTwoRule {
    fn applies_to(&self, request: &PricingRuleRequest<'_>) -> bool {
        item_count(request, self.sku) >= GROUP_SIZE
            && unit_price(request, self.sku).is_some_and(|price| price.is_positive())
    }

    fn calculate_price(&self, request: &PricingRuleRequest<'_>) -> PricingRuleResult {
        let quantity = item_count(request, self.sku);
        let Some(price) = unit_price(request, self.sku) else {
            return PricingRuleResult::not_applicable();
        };
        if !self.applies_to(request) {
            return PricingRuleResult::not_applicable();
        }

        let groups = quantity / GROUP_SIZE;
        let charged_units = groups * PAID_PER_GROUP + quantity % GROUP_SIZE;
        let full_price = price.times(quantity);
        let offer_price = price.times(charged_units);

        PricingRuleResult::discount((full_price - offer_price).floor_at_zero())
    }

    fn name(&self) -> &str {
        "three_for_two"
    }
}
