//! HTTP client for task store requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the task store, handling URL construction, status checking, and
//! response parsing.

use super::ApiError;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Specify how long a single request may take before it is abandoned.
///
const REQUEST_TIMEOUT_IN_SECS: u64 = 10;

/// Makes requests to the task store and tries to conform response data to
/// the requested type.
///
#[derive(Clone)]
pub struct Client {
    pub(crate) base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given collection URL.
    ///
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(base_url.to_owned()));
        }
        // Item paths are appended directly, so the collection URL must end in a slash
        let base_url = if trimmed.ends_with('/') {
            trimmed.to_owned()
        } else {
            format!("{}/", trimmed)
        };
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_IN_SECS))
            .build()?;
        Ok(Client {
            base_url,
            http_client,
        })
    }

    /// Return the collection URL.
    ///
    pub fn collection_url(&self) -> String {
        self.base_url.to_owned()
    }

    /// Return the URL of a single item.
    ///
    pub fn item_url(&self, id: &str) -> String {
        format!("{}{}/", self.base_url, id)
    }

    /// Make request and deserialize the JSON body of a successful response.
    ///
    pub async fn json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let response = self.call(method, url, body).await?;
        let bytes = response.bytes().await?;
        match serde_json::from_slice::<T>(&bytes) {
            Ok(data) => Ok(data),
            Err(e) => {
                log::debug!(
                    "Undecodable response body: {}",
                    String::from_utf8_lossy(&bytes)
                );
                Err(e.into())
            }
        }
    }

    /// Make request and return the response if its status signals success.
    ///
    pub async fn call(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response, ApiError> {
        log::debug!("{} {}", method, url);
        let mut request = self.http_client.request(method, url);
        if let Some(body) = body {
            // Sets the JSON content type as well
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            log::debug!("{} answered {}", url, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}
