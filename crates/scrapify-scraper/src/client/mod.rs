//! HTTP client for a storefront's public catalog endpoints.

mod origin;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::ScraperError;

pub use origin::{extract_domain, normalize_store_url, product_url};

/// Upper bound on TCP connect time, independent of the request timeout.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP client for the `products.json` feed, product pages, and per-product
/// JSON documents.
///
/// Every request is a single attempt: non-2xx responses and transport
/// failures come back as classified [`ScraperError`]s and are never retried.
pub struct StoreClient {
    pub(super) client: Client,
}

impl StoreClient {
    /// Creates a `StoreClient` with a per-request timeout and `User-Agent`.
    ///
    /// The timeout applies uniformly to feed pages, HTML pages and variant
    /// JSON fetches.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Client`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS.min(timeout_secs)))
            .user_agent(user_agent)
            .build()
            .map_err(ScraperError::Client)?;
        Ok(Self { client })
    }

    /// Performs one GET against `url` and returns the raw response body.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Timeout`]: the request exceeded the client timeout.
    /// - [`ScraperError::HttpStatus`]: any non-2xx status.
    /// - [`ScraperError::Network`]: connection or request-level failure.
    /// - [`ScraperError::Unknown`]: any other transport failure (e.g. body read).
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, ScraperError> {
        tracing::debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "application/json,text/html;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| ScraperError::from_transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::HttpStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ScraperError::from_transport(url, e))?;

        Ok(body.to_vec())
    }

    /// Fetches `url` and decodes the body as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Any error from [`Self::fetch`], or [`ScraperError::Deserialize`] when
    /// the body is not valid JSON of the expected shape.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ScraperError> {
        let body = self.fetch(url).await?;
        serde_json::from_slice::<T>(&body).map_err(|source| ScraperError::Deserialize {
            context: url.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
