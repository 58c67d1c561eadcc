//! Domain layer: money, products, the catalog and the pricing rules.

pub mod catalog;
pub mod money;
pub mod ports;
pub mod product;
pub mod rules;
