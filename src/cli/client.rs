use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// A non-2xx answer from the API, carrying the server's own message
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ServerError {
    pub status: StatusCode,
    pub message: String,
}

/// Thin reqwest wrapper speaking the `/api` JSON surface
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> anyhow::Result<Value> {
        self.json(self.request(Method::GET, path)).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> anyhow::Result<Value> {
        self.json(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> anyhow::Result<Value> {
        self.json(self.request(Method::PUT, path).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> anyhow::Result<Value> {
        self.json(self.request(Method::DELETE, path)).await
    }

    /// Raw response body, for file downloads
    pub async fn download(&self, path: &str) -> anyhow::Result<Vec<u8>> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Ok(response.bytes().await?.to_vec())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn json(&self, builder: RequestBuilder) -> anyhow::Result<Value> {
        let response = self.send(builder).await?;
        Ok(response.json().await?)
    }

    async fn send(&self, builder: RequestBuilder) -> anyhow::Result<reqwest::Response> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        Err(ServerError {
            status,
            message: describe_error(status, &body),
        }
        .into())
    }
}

/// `error` from the body plus one line per field violation
pub fn describe_error(status: StatusCode, body: &Value) -> String {
    let mut message = body
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Server responded with {}", status));

    if let Some(details) = body.get("details").and_then(Value::as_array) {
        for detail in details {
            let field = detail.get("field").and_then(Value::as_str).unwrap_or("?");
            let reason = detail.get("message").and_then(Value::as_str).unwrap_or("invalid");
            message.push_str(&format!("\n  {}: {}", field, reason));
        }
    }

    message
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn describes_validation_errors_with_details() {
        let body = json!({
            "error": "Validation failed",
            "code": "VALIDATION_ERROR",
            "details": [
                {"field": "amount", "message": "amount must be a positive number"},
                {"field": "description", "message": "description is required"}
            ]
        });

        assert_eq!(
            describe_error(StatusCode::BAD_REQUEST, &body),
            "Validation failed\n  amount: amount must be a positive number\n  description: description is required"
        );
    }

    #[test]
    fn falls_back_to_status_without_error_field() {
        let message = describe_error(StatusCode::BAD_GATEWAY, &Value::Null);
        assert!(message.contains("502"));
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = ApiClient::new("http://localhost:3000/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }
}
