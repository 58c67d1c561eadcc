use crate::domain::catalog::Catalog;
use crate::domain::money::Price;
use crate::domain::product::Sku;
use crate::domain::rules::{PricingRuleBox, PricingRuleRequest};
use crate::error::{CheckoutError, Result};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Price breakdown of a cart at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSummary {
    pub items: Vec<Sku>,
    pub subtotal: Price,
    /// Effective discount, never larger than `subtotal`.
    pub discount: Price,
    pub total: Price,
}

/// A single cart at the register.
///
/// `Checkout` owns the scan log. The catalog and the pricing rules are fixed
/// at construction and shared behind `Arc`, so several checkouts can use
/// the same rule set.
pub struct Checkout {
    scanned_items: Vec<Sku>,
    catalog: Arc<Catalog>,
    pricing_rules: Arc<[PricingRuleBox]>,
}

impl Checkout {
    /// Creates a checkout over the built-in catalog.
    pub fn new(pricing_rules: Vec<PricingRuleBox>) -> Self {
        Self::with_catalog(Catalog::default(), pricing_rules)
    }

    /// Creates a checkout over an explicit catalog.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The products that may be scanned.
    /// * `pricing_rules` - Rules applied, in order, on every `total()`.
    pub fn with_catalog(
        catalog: impl Into<Arc<Catalog>>,
        pricing_rules: impl Into<Arc<[PricingRuleBox]>>,
    ) -> Self {
        Self {
            scanned_items: Vec::new(),
            catalog: catalog.into(),
            pricing_rules: pricing_rules.into(),
        }
    }

    /// Adds one item to the cart.
    ///
    /// Fails with `UnknownProduct` when the catalog does not carry `sku`;
    /// the cart is left untouched in that case.
    pub fn scan(&mut self, sku: Sku) -> Result<()> {
        if !self.catalog.has_product(sku) {
            return Err(CheckoutError::UnknownProduct(sku));
        }
        self.scanned_items.push(sku);
        debug!(%sku, items = self.scanned_items.len(), "scanned item");
        Ok(())
    }

    pub fn scanned_items(&self) -> &[Sku] {
        &self.scanned_items
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Final price of the cart, rounded to cents and never negative.
    pub fn total(&self) -> Price {
        self.summary().total
    }

    /// Computes subtotal, discount and total without touching the cart.
    pub fn summary(&self) -> CheckoutSummary {
        let request = PricingRuleRequest::new(self.scanned_items.clone(), &self.catalog);

        let subtotal: Price = self
            .scanned_items
            .iter()
            .map(|sku| match self.catalog.get_product(*sku) {
                Some(product) => product.price,
                None => {
                    warn!(%sku, "scanned item missing from catalog, pricing at zero");
                    Price::ZERO
                }
            })
            .sum();

        let total_discount: Price = self
            .pricing_rules
            .iter()
            .map(|rule| {
                let result = rule.calculate_price(&request);
                debug!(
                    rule = rule.name(),
                    applicable = result.is_applicable,
                    discount = %result.discount,
                    "evaluated pricing rule"
                );
                if result.is_applicable {
                    result.discount
                } else {
                    Price::ZERO
                }
            })
            .sum();

        let total = (subtotal - total_discount).floor_at_zero().round_to_cents();

        CheckoutSummary {
            items: request.scanned_items().to_vec(),
            subtotal: subtotal.round_to_cents(),
            discount: (subtotal.round_to_cents() - total).floor_at_zero(),
            total,
        }
    }
}
