use super::product::Product;
use crate::error::Result;
use async_trait::async_trait;

/// Supplies the products a catalog is built from, in catalog order.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Product>>;
}

pub type ProductSourceBox = Box<dyn ProductSource>;
