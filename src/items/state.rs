//! Shopping List State Management
//!
//! This module manages the application state for the shopping list:
//! one ordered, mutexed item sequence shared by all handlers.

use super::helpers::normalize_supermarket;
use super::models::Item;
use std::sync::{Arc, Mutex, MutexGuard};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state holding the shopping list.
///
/// A single `Mutex` guards the whole sequence; every operation takes the
/// lock for its full read-then-mutate span, so a scan-and-remove never
/// interleaves with a concurrent append.
pub struct AppState {
    /// In-memory item list, insertion order preserved.
    items: Mutex<Vec<Item>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new AppState with an empty shopping list
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    fn locked(&self) -> MutexGuard<'_, Vec<Item>> {
        self.items.lock().expect("shopping list lock poisoned")
    }

    /// Returns a snapshot of the full list in insertion order.
    ///
    /// Side effect: an empty list is first populated with the two demo
    /// items, so a client that clears the list and lists again sees the
    /// demo items reappear.
    pub fn list(&self) -> Vec<Item> {
        let mut items = self.locked();
        if items.is_empty() {
            items.extend(seed_items());
        }
        items.clone()
    }

    /// Appends `item` to the end of the list. Duplicates are allowed.
    pub fn add(&self, item: Item) {
        self.locked().push(item);
    }

    /// Removes the first item whose name exactly equals `name`
    /// (case-sensitive, no trimming). Returns whether an item was removed;
    /// an unmatched name leaves the list untouched.
    pub fn remove_first_named(&self, name: &str) -> bool {
        let mut items = self.locked();
        if let Some(pos) = items.iter().position(|item| item.name == name) {
            items.remove(pos);
            true
        } else {
            false
        }
    }

    /// Clears the list. Idempotent.
    pub fn clear(&self) {
        self.locked().clear();
    }

    /// Sums the prices of all current items, 0.0 when the list is empty.
    /// Pure read: never seeds the demo items.
    pub fn total_price(&self) -> f64 {
        self.locked().iter().map(|item| item.price).sum()
    }

    /// Returns the ordered subsequence of items whose supermarket matches
    /// `query` after trimming and lower-casing both sides. An unmatched
    /// query yields an empty vector, not an error.
    pub fn items_from_supermarket(&self, query: &str) -> Vec<Item> {
        let wanted = normalize_supermarket(query);
        self.locked()
            .iter()
            .filter(|item| normalize_supermarket(&item.supermarket) == wanted)
            .cloned()
            .collect()
    }
}

/// The two demo items inserted when an empty list is listed.
fn seed_items() -> [Item; 2] {
    [
        Item {
            name: "Egg".to_string(),
            supermarket: "Netto".to_string(),
            price: 20.0,
        },
        Item {
            name: "Beef".to_string(),
            supermarket: "Irma".to_string(),
            price: 80.0,
        },
    ]
}
