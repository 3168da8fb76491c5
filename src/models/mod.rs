//! Shared types used across all modules.
//!
//! This module defines the records loaded from the static resources and the
//! sort options offered on the product panel. Other modules import from here
//! rather than reaching into each other's internals.

pub mod product;
pub mod user;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

pub use product::{Product, ProductsDocument};
pub use user::{User, UsersDocument};

/// Ordering applied to the product panel.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(ascii_case_insensitive)]
pub enum SortOption {
    /// Ascending by title, case-insensitive collation.
    #[default]
    #[strum(to_string = "alphabet")]
    Alphabet,
    #[serde(alias = "price-low-to-high")]
    #[strum(to_string = "price-low-to-high", serialize = "priceLowToHigh")]
    PriceLowToHigh,
    #[serde(alias = "price-high-to-low")]
    #[strum(to_string = "price-high-to-low", serialize = "priceHighToLow")]
    PriceHighToLow,
}

impl SortOption {
    /// Human-readable label shown in the sort dropdown.
    pub fn label(self) -> &'static str {
        match self {
            SortOption::Alphabet => "Alphabetically",
            SortOption::PriceLowToHigh => "Price (Low to High)",
            SortOption::PriceHighToLow => "Price (High to Low)",
        }
    }
}
