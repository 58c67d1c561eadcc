use super::money::Price;
use super::product::{Product, Sku};
use crate::error::{CheckoutError, Result};
use rust_decimal_macros::dec;
use std::collections::HashSet;

/// The set of products a checkout can sell.
///
/// Products keep the order they were supplied in and carry unique SKUs.
/// A catalog is read-only once built, so it can be shared between checkouts.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate SKUs.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.sku) {
                return Err(CheckoutError::DuplicateProduct(product.sku));
            }
        }
        Ok(Self { products })
    }

    pub fn has_product(&self, sku: Sku) -> bool {
        self.products.iter().any(|p| p.sku == sku)
    }

    pub fn get_product(&self, sku: Sku) -> Option<&Product> {
        self.products.iter().find(|p| p.sku == sku)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: default_products(),
        }
    }
}

/// The built-in store inventory.
pub fn default_products() -> Vec<Product> {
    vec![
        Product {
            sku: Sku::Ipd,
            name: "Super iPad".to_string(),
            price: Price::new(dec!(549.99)),
        },
        Product {
            sku: Sku::Mbp,
            name: "MacBook Pro".to_string(),
            price: Price::new(dec!(1399.99)),
        },
        Product {
            sku: Sku::Atv,
            name: "Apple TV".to_string(),
            price: Price::new(dec!(109.50)),
        },
        Product {
            sku: Sku::Vga,
            name: "VGA adapter".to_string(),
            price: Price::new(dec!(30.00)),
        },
    ]
}
