//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing endpoint URLs.

/// Get the base URL for API requests
///
/// The admin pages and the JSON endpoints are served from the same origin,
/// so the base is reconstructed from the current window location (port
/// included).
///
/// # Returns
/// - Base URL like "http://localhost:8000" or "https://example.com"
/// - Empty string if window is not available
///
/// # Example
/// ```text
/// let url = format!("{}/recipes/recipe/{}/images/", api_base(), id);
/// ```
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}

/// Build a full endpoint URL from an absolute path
///
/// # Arguments
/// * `path` - The endpoint path (should start with "/")
///
/// # Example
/// ```text
/// let url = api_url("/recipes/recipe/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
