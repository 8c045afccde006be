//! Per-product enrichment: page metadata and variant inventory.
//!
//! Both operations are best-effort. Failures are logged with the offending
//! URL and replaced by an empty value so one bad product never stops a run.

use crate::client::StoreClient;
use crate::error::ScraperError;
use crate::html::{extract_page_meta, PageMeta};
use crate::types::{ProductDetail, Variant};

/// URL of the single-product JSON document: `{product_url}.json`.
#[must_use]
pub fn product_json_url(product_url: &str) -> String {
    format!("{product_url}.json")
}

impl StoreClient {
    /// Fetches a product page and extracts its title and meta description.
    ///
    /// Any failure yields an empty [`PageMeta`].
    pub async fn scrape_meta(&self, product_url: &str) -> PageMeta {
        match self.fetch(product_url).await {
            Ok(body) => extract_page_meta(&String::from_utf8_lossy(&body)),
            Err(e) => {
                tracing::warn!(
                    url = product_url,
                    error = %e,
                    "failed to fetch product page; using empty metadata"
                );
                PageMeta::default()
            }
        }
    }

    /// Fetches `{product_url}.json` and returns its variants.
    ///
    /// # Errors
    ///
    /// - Any error from [`StoreClient::fetch`] (non-2xx is an error, not an empty list).
    /// - [`ScraperError::Deserialize`]: body is not the expected JSON.
    /// - [`ScraperError::MissingKey`]: no `product.variants` in the document.
    pub async fn try_fetch_variants(
        &self,
        product_json_url: &str,
    ) -> Result<Vec<Variant>, ScraperError> {
        let detail: ProductDetail = self.fetch_json(product_json_url).await?;
        detail
            .product
            .and_then(|p| p.variants)
            .ok_or_else(|| ScraperError::MissingKey {
                key: "product.variants",
                url: product_json_url.to_owned(),
            })
    }

    /// Best-effort form of [`Self::try_fetch_variants`]: failures are logged
    /// and yield an empty list.
    pub async fn fetch_variants(&self, product_json_url: &str) -> Vec<Variant> {
        match self.try_fetch_variants(product_json_url).await {
            Ok(variants) => variants,
            Err(e) => {
                tracing::warn!(
                    url = product_json_url,
                    error = %e,
                    "failed to fetch product variants"
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_json_url_appends_extension() {
        assert_eq!(
            product_json_url("https://shop.example.com/products/mug"),
            "https://shop.example.com/products/mug.json"
        );
    }
}
