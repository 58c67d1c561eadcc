use crate::domain::money::Price;
use crate::domain::product::{Product, Sku};
use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct ProductRecord {
    sku: Sku,
    name: String,
    price: Decimal,
}

/// Reads catalog products from a CSV source with a `sku, name, price` header.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<Product>`.
/// Whitespace around fields is trimmed.
pub struct ProductReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ProductReader<R> {
    /// Creates a new `ProductReader` from any `Read` source (e.g., File, bytes).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates products.
    pub fn products(self) -> impl Iterator<Item = Result<Product>> {
        self.reader.into_deserialize().map(|result| {
            let record: ProductRecord = result.map_err(CheckoutError::from)?;
            Product::new(record.sku, record.name, Price::new(record.price))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "sku, name, price\natv, Apple TV, 109.50\nvga, VGA adapter, 30.00";
        let reader = ProductReader::new(data.as_bytes());
        let results: Vec<Result<Product>> = reader.products().collect();

        assert_eq!(results.len(), 2);
        let atv = results[0].as_ref().unwrap();
        assert_eq!(atv.sku, Sku::Atv);
        assert_eq!(atv.name, "Apple TV");
        assert_eq!(atv.price, Price::new(dec!(109.50)));
    }

    #[test]
    fn test_reader_unknown_sku() {
        let data = "sku, name, price\nxyz, Mystery Box, 1.0";
        let reader = ProductReader::new(data.as_bytes());
        let results: Vec<Result<Product>> = reader.products().collect();

        assert!(matches!(results[0], Err(CheckoutError::CsvError(_))));
    }

    #[test]
    fn test_reader_negative_price() {
        let data = "sku, name, price\nvga, VGA adapter, -30.00";
        let reader = ProductReader::new(data.as_bytes());
        let results: Vec<Result<Product>> = reader.products().collect();

        assert!(matches!(results[0], Err(CheckoutError::ValidationError(_))));
    }
}
