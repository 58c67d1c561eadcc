//! Pricing rules and the cart snapshot they are evaluated against.
//!
//! Every rule implements [`PricingRule`]. The checkout treats all rules the
//! same way: it hands each one a fresh [`PricingRuleRequest`] and sums the
//! discounts of the results that report themselves applicable.

pub mod bulk_discount;
pub mod config;
pub mod custom;
pub mod helpers;
pub mod three_for_two;

pub use bulk_discount::BulkDiscountRule;
pub use config::RuleConfig;
pub use custom::CustomRule;
pub use three_for_two::ThreeForTwoRule;

use super::catalog::Catalog;
use super::money::Price;
use super::product::Sku;

/// Read-only view of a cart handed to pricing rules.
///
/// Holds its own copy of the scanned items, so a rule can never observe
/// or alter the live scan log. The catalog is borrowed, not copied.
#[derive(Debug, Clone)]
pub struct PricingRuleRequest<'a> {
    scanned_items: Vec<Sku>,
    catalog: &'a Catalog,
}

impl<'a> PricingRuleRequest<'a> {
    pub fn new(scanned_items: Vec<Sku>, catalog: &'a Catalog) -> Self {
        Self {
            scanned_items,
            catalog,
        }
    }

    pub fn scanned_items(&self) -> &[Sku] {
        &self.scanned_items
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }
}

/// Outcome of evaluating one rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingRuleResult {
    pub discount: Price,
    pub is_applicable: bool,
}

impl PricingRuleResult {
    pub fn not_applicable() -> Self {
        Self {
            discount: Price::ZERO,
            is_applicable: false,
        }
    }

    /// A result carrying `discount`; applicable only when it is positive.
    pub fn discount(discount: Price) -> Self {
        if discount.is_positive() {
            Self {
                discount,
                is_applicable: true,
            }
        } else {
            Self::not_applicable()
        }
    }
}

/// A unit of discount logic queried against a cart snapshot.
///
/// Both operations must be pure. `applies_to` must agree with the
/// applicability reported by `calculate_price`.
pub trait PricingRule: Send + Sync {
    fn applies_to(&self, request: &PricingRuleRequest<'_>) -> bool;

    fn calculate_price(&self, request: &PricingRuleRequest<'_>) -> PricingRuleResult;

    fn name(&self) -> &str {
        "custom"
    }
}

pub type PricingRuleBox = Box<dyn PricingRule>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_result_discount_constructor() {
        let applied = PricingRuleResult::discount(Price::new(dec!(10)));
        assert!(applied.is_applicable);
        assert_eq!(applied.discount, Price::new(dec!(10)));

        let zero = PricingRuleResult::discount(Price::ZERO);
        assert_eq!(zero, PricingRuleResult::not_applicable());
    }

    #[test]
    fn test_request_is_a_snapshot() {
        let catalog = Catalog::default();
        let mut live = vec![Sku::Atv];
        let request = PricingRuleRequest::new(live.clone(), &catalog);
        live.push(Sku::Vga);

        assert_eq!(request.scanned_items(), &[Sku::Atv]);
        assert_eq!(request.catalog().len(), 4);
    }
}
