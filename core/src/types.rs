//! Domain DTOs for the store API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! `price` is deliberately loose: the demo API returns numbers, while form
//! input produces text, and the API echoes whatever it was sent. `Price`
//! round-trips both shapes untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned product identifier.
pub type ProductId = u64;

/// A product price as a JSON number or as the text typed into a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Text(String::new())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(n) => f.pad(&n.to_string()),
            Price::Text(s) => f.pad(s),
        }
    }
}

/// Aggregate customer rating attached to catalog entries by the demo API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// A single catalog product returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

/// Request payload for creating or replacing a product. Carries no id: the
/// server assigns it on create and the path carries it on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: Price,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
        }
    }
}
