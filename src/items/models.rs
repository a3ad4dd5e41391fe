//! Shopping List Domain Models
//!
//! This module contains the data structures for the shopping-list
//! business domain.

use serde::{Deserialize, Serialize};

// =============================================================================
// Item Domain Model
// =============================================================================

/// Represents a single entry on the shopping list.
///
/// Nothing about an item is validated or unique: duplicate names, empty
/// fields, and zero or negative prices are all accepted as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Name of the product
    pub name: String,

    /// Supermarket the item should be bought at, stored exactly as given
    pub supermarket: String,

    /// Price of the item (no currency unit)
    pub price: f64,
}
