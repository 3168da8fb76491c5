//! Product records loaded from `products.json`.

use serde::{Deserialize, Serialize};

/// A catalogue entry. Identity key is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub rating: f64,
}

/// Top-level shape of `products.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductsDocument {
    pub products: Vec<Product>,
}
