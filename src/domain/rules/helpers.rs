use super::PricingRuleRequest;
use crate::domain::money::Price;
use crate::domain::product::Sku;

/// Number of times `sku` was scanned.
pub fn item_count(request: &PricingRuleRequest<'_>, sku: Sku) -> usize {
    request
        .scanned_items()
        .iter()
        .filter(|item| **item == sku)
        .count()
}

/// Catalog unit price for `sku`, or `None` when the catalog lacks it.
pub fn unit_price(request: &PricingRuleRequest<'_>, sku: Sku) -> Option<Price> {
    request.catalog().get_product(sku).map(|product| product.price)
}
