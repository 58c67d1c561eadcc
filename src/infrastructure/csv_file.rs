use crate::domain::ports::ProductSource;
use crate::domain::product::Product;
use crate::error::Result;
use crate::interfaces::csv::product_reader::ProductReader;
use async_trait::async_trait;
use std::path::PathBuf;

/// A product source reading a CSV catalog file from disk.
///
/// The file is read on every `load`; a malformed row fails the whole load.
#[derive(Debug, Clone)]
pub struct CsvFileProductSource {
    path: PathBuf,
}

impl CsvFileProductSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProductSource for CsvFileProductSource {
    async fn load(&self) -> Result<Vec<Product>> {
        let bytes = tokio::fs::read(&self.path).await?;
        ProductReader::new(bytes.as_slice()).products().collect()
    }
}
