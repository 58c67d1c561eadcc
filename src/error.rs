use crate::domain::product::Sku;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Product with SKU '{0}' not found in catalog")]
    UnknownProduct(Sku),
    #[error("Invalid SKU '{0}'")]
    InvalidSku(String),
    #[error("Duplicate product with SKU '{0}' in catalog")]
    DuplicateProduct(Sku),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
