//! Shopping List Business Logic Helpers
//!
//! This module contains small pure helpers shared by the state and the
//! HTTP handlers.

use axum::http::header;
use axum::response::{IntoResponse, Response};

/// Normalizes a supermarket name for matching: leading/trailing whitespace
/// is trimmed and the remainder lower-cased.
///
/// Matching is the only place normalization applies; items keep their
/// supermarket field exactly as submitted.
pub fn normalize_supermarket(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Builds the empty-body 200 response used by the mutating endpoints.
///
/// The body is empty but still declared `application/json`; every
/// endpoint of the API answers with that content type.
pub fn empty_json_ok() -> Response {
    ([(header::CONTENT_TYPE, "application/json")], "").into_response()
}
