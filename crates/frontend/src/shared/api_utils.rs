//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs, checking responses
//! and decoding JSON bodies.

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Port the API server listens on
pub const API_PORT: u16 = 3000;

/// Errors returned by the API helpers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("не удалось выполнить запрос: {0}")]
    Network(String),
    #[error("сервер вернул HTTP {0}")]
    Status(u16),
    #[error("не удалось сериализовать запрос: {0}")]
    Serialize(String),
    #[error("не удалось разобрать ответ: {0}")]
    Decode(String),
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using [`API_PORT`] for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available (paths stay relative)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/staff");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Fail with [`ApiError::Status`] unless the response is 2xx
pub fn ensure_ok(response: &Response) -> Result<(), ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}

/// Read the response body and decode it as JSON
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    parse_json(&text)
}

pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_staff::aggregate::Staff;

    #[test]
    fn test_parse_json_list() {
        let list: Vec<Staff> =
            parse_json(r#"[{"id": 1, "name": "田中", "departments": ["病理"]}]"#).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id.as_deref(), Some("1"));
    }

    #[test]
    fn test_parse_json_error() {
        let result: Result<Vec<Staff>, ApiError> = parse_json("<html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(500).to_string(), "сервер вернул HTTP 500");
        assert_eq!(
            ApiError::Network("offline".to_string()).to_string(),
            "не удалось выполнить запрос: offline"
        );
    }
}
