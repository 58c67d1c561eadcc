#![allow(dead_code)]

use checkout_engine::application::checkout::Checkout;
use checkout_engine::domain::money::Price;
use checkout_engine::domain::product::Sku;
use checkout_engine::domain::rules::{BulkDiscountRule, PricingRuleBox, ThreeForTwoRule};
use rust_decimal_macros::dec;
use std::io::Write;
use std::path::Path;

pub fn three_for_two_atv() -> PricingRuleBox {
    Box::new(ThreeForTwoRule::new(Sku::Atv))
}

pub fn bulk_ipd() -> PricingRuleBox {
    Box::new(BulkDiscountRule::new(Sku::Ipd, 4, Price::new(dec!(499.99))).unwrap())
}

pub fn scan_all(checkout: &mut Checkout, items: &[Sku]) {
    for sku in items {
        checkout.scan(*sku).expect("item should be in catalog");
    }
}

pub fn checkout_with(rules: Vec<PricingRuleBox>, items: &[Sku]) -> Checkout {
    let mut checkout = Checkout::new(rules);
    scan_all(&mut checkout, items);
    checkout
}

pub fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()
}
