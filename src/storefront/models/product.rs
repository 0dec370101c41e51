//! # Product Model
//!
//! Catalog entries as delivered by the shop API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque product identifier assigned by the shop API
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single catalog item
///
/// `price` is `None` for items that are not for sale. `selected` is a
/// client-side marker mirroring basket membership and is never sent by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    pub price: Option<u64>,
    #[serde(default, skip_serializing)]
    pub selected: bool,
}

impl Product {
    /// Whether the product can be put into the basket
    pub fn is_purchasable(&self) -> bool {
        self.price.is_some()
    }

    /// Price used for arithmetic, treating "not for sale" as zero
    pub fn price_or_zero(&self) -> u64 {
        self.price.unwrap_or(0)
    }
}

/// Color tag shown next to a product category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryTone {
    Soft,
    Hard,
    Other,
    Additional,
    Button,
}

impl CategoryTone {
    /// Map a category label from the API onto its color tag
    pub fn from_category(category: &str) -> Self {
        match category {
            "софт-скил" | "soft-skill" => Self::Soft,
            "хард-скил" | "hard-skill" => Self::Hard,
            "дополнительное" | "additional" => Self::Additional,
            "кнопка" | "button" => Self::Button,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn product(id: &str, price: Option<u64>) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            description: format!("Description of {id}"),
            category: "софт-скил".to_string(),
            image: format!("/{id}.svg"),
            price,
            selected: false,
        }
    }
}
