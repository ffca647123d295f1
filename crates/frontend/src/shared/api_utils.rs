//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use crate::config;
use crate::shared::api_error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Uses the configured backend address. When none is configured, the
/// address is derived from the current window location using the
/// configured fallback port.
///
/// # Returns
/// - API base URL like "http://localhost:8000"
/// - Empty string if nothing is configured and window is not available
pub fn api_base() -> String {
    let config = config::current();
    if !config.api.base_url.is_empty() {
        return config.api.base_url.clone();
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
    origin_with_port(&protocol, &hostname, config.api.fallback_port)
}

fn origin_with_port(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/analytics/dashboard");
/// ```
pub fn api_url(path: &str) -> String {
    join(&api_base(), path)
}

/// Build a full API URL with a serialized query string
pub fn api_url_with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let query_string =
        serde_qs::to_string(query).map_err(|e| ApiError::Request(format!("bad query: {}", e)))?;
    Ok(with_query(api_url(path), &query_string))
}

/// Percent-encode a value used as a single path segment
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value.trim()).into_owned()
}

fn join(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}

fn with_query(url: String, query_string: &str) -> String {
    if query_string.is_empty() {
        url
    } else {
        format!("{}?{}", url, query_string)
    }
}

/// GET `url` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    decode(response).await
}

/// POST `body` as JSON to `url` and decode the JSON body
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    log::debug!("POST {}", url);
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Request(format!("failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    decode(response).await
}

/// POST without a body (all parameters in the query string)
pub async fn post_empty<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("POST {}", url);
    let response = Request::post(url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_with_port() {
        assert_eq!(
            origin_with_port("https:", "shop.example.com", 8000),
            "https://shop.example.com:8000"
        );
    }

    #[test]
    fn test_with_query() {
        assert_eq!(
            with_query(join("http://localhost:8000", "/api/analytics/dashboard"), "period_days=30"),
            "http://localhost:8000/api/analytics/dashboard?period_days=30"
        );
        assert_eq!(with_query("http://x/api".to_string(), ""), "http://x/api");
    }

    #[test]
    fn test_path_segment_is_encoded() {
        assert_eq!(path_segment(" wireless earbuds "), "wireless%20earbuds");
        assert_eq!(path_segment("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(path_segment(""), "");
    }

    #[test]
    fn test_query_serialization() {
        let query = contracts::usecases::u200_trend_research::ProfitQuery {
            cost: 12.5,
            price: 39.99,
            ad_spend: 0.0,
        };
        let qs = serde_qs::to_string(&query).unwrap();
        assert!(qs.starts_with("cost=12.5&price=39.99&ad_spend="));
    }
}
