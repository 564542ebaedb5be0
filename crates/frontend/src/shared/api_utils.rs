//! API base URL resolution
//!
//! The backend address can be fixed at build time with the `API_BASE_URL`
//! environment variable. Otherwise the console talks to port 3000 on the
//! host it was served from.

/// Get the base URL for API requests, e.g. `"http://localhost:3000"`.
/// Empty when no window is available.
pub fn api_base() -> String {
    if let Some(base) = option_env!("API_BASE_URL") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with `/api/`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
