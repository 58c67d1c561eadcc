use super::money::Price;
use crate::error::{CheckoutError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product line identifiers known to the store.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Sku {
    Ipd,
    Mbp,
    Atv,
    Vga,
}

impl Sku {
    pub const ALL: [Sku; 4] = [Sku::Ipd, Sku::Mbp, Sku::Atv, Sku::Vga];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sku::Ipd => "ipd",
            Sku::Mbp => "mbp",
            Sku::Atv => "atv",
            Sku::Vga => "vga",
        }
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sku {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        Sku::ALL
            .into_iter()
            .find(|sku| sku.as_str().eq_ignore_ascii_case(code))
            .ok_or_else(|| CheckoutError::InvalidSku(s.to_string()))
    }
}

/// A catalog entry: identifier, display name and unit price.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Product {
    pub sku: Sku,
    pub name: String,
    pub price: Price,
}

impl Product {
    pub fn new(sku: Sku, name: impl Into<String>, price: Price) -> Result<Self> {
        if price < Price::ZERO {
            return Err(CheckoutError::ValidationError(format!(
                "Unit price for '{sku}' must not be negative"
            )));
        }
        Ok(Self {
            sku,
            name: name.into(),
            price,
        })
    }
}
