//! Minimal HTTP client adapter over `gloo_net`.
//!
//! One function issues one request. Transport failures come back as `Err`
//! with a readable message; HTTP error statuses are returned as a normal
//! [`HttpResponse`] so callers can branch on the code (the backend uses 406
//! for duplicate-resource rejections). No retries, no timeout policy beyond
//! the browser default.

use gloo_net::http::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Normalized response descriptor: status code plus raw payload text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    body: String,
}

impl HttpResponse {
    /// Decode the payload as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, String> {
        serde_json::from_str(&self.body).map_err(|e| format!("Failed to parse response: {}", e))
    }
}

/// Issue a single request with an optional JSON body.
pub async fn request<B: Serialize>(
    method: Method,
    url: &str,
    body: Option<&B>,
) -> Result<HttpResponse, String> {
    let builder = RequestBuilder::new(url)
        .method(method)
        .header("Accept", "application/json");

    let request = match body {
        Some(b) => builder
            .json(b)
            .map_err(|e| format!("Failed to serialize request: {}", e))?,
        None => builder
            .build()
            .map_err(|e| format!("Failed to build request: {}", e))?,
    };

    let response = request
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    Ok(HttpResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_decodes_payload() {
        let response = HttpResponse {
            status: 200,
            body: r#"[1, 2, 3]"#.to_string(),
        };
        let data: Vec<u32> = response.json().unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn json_reports_malformed_payload() {
        let response = HttpResponse {
            status: 200,
            body: "not json".to_string(),
        };
        assert!(response.json::<Vec<u32>>().is_err());
    }
}
