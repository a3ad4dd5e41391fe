//! Shopping List Domain Module
//!
//! This module contains all shopping-list business logic, including:
//! - Domain models (Item)
//! - Business logic helpers (normalization, response building)
//! - Application state management
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
