use crate::domain::catalog::default_products;
use crate::domain::ports::ProductSource;
use crate::domain::product::Product;
use crate::error::Result;
use async_trait::async_trait;

/// A product source backed by a fixed list held in memory.
///
/// `StaticProductSource::default()` serves the built-in store inventory.
#[derive(Debug, Clone)]
pub struct StaticProductSource {
    products: Vec<Product>,
}

impl StaticProductSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl Default for StaticProductSource {
    fn default() -> Self {
        Self::new(default_products())
    }
}

#[async_trait]
impl ProductSource for StaticProductSource {
    async fn load(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Price;
    use crate::domain::product::Sku;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_default_source_serves_store_inventory() {
        let products = StaticProductSource::default().load().await.unwrap();
        let skus: Vec<Sku> = products.iter().map(|p| p.sku).collect();
        assert_eq!(skus, vec![Sku::Ipd, Sku::Mbp, Sku::Atv, Sku::Vga]);
    }

    #[tokio::test]
    async fn test_custom_source() {
        let vga = Product::new(Sku::Vga, "VGA adapter", Price::new(dec!(25.00))).unwrap();
        let source = StaticProductSource::new(vec![vga.clone()]);
        assert_eq!(source.load().await.unwrap(), vec![vga]);
    }
}
