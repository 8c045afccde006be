//! Page-number pagination over `products.json`.
//!
//! The public feed is paged with `?page=N` starting at 1. The end of the
//! catalog is signalled by a page with no products; there is no cursor or
//! `Link` header to follow. A hard ceiling on the page index bounds the number
//! of requests against endpoints that never return an empty page.

use crate::client::StoreClient;
use crate::error::ScraperError;
use crate::types::{Product, ProductsPage};

/// Default ceiling on the page index. Page 101 is never requested.
pub const DEFAULT_MAX_PAGES: u32 = 100;

/// Builds the feed URL for one page: `{store_url}/products.json?page={page}`.
#[must_use]
pub fn products_page_url(store_url: &str, page: u32) -> String {
    format!("{store_url}/products.json?page={page}")
}

impl StoreClient {
    /// Fetches and decodes a single feed page.
    ///
    /// Pages are independent, so any index can be (re)fetched at any time.
    ///
    /// # Errors
    ///
    /// - Any error from [`StoreClient::fetch`].
    /// - [`ScraperError::Deserialize`]: body is not JSON or `products` is malformed.
    /// - [`ScraperError::MissingKey`]: the body has no `products` key.
    pub async fn fetch_products_page(
        &self,
        store_url: &str,
        page: u32,
    ) -> Result<Vec<Product>, ScraperError> {
        let url = products_page_url(store_url, page);
        let parsed: ProductsPage = self.fetch_json(&url).await?;
        parsed
            .products
            .ok_or(ScraperError::MissingKey { key: "products", url })
    }

    /// One-time connectivity and shape check against page 1.
    ///
    /// An empty product list is fine (an empty store); a response with no
    /// `products` key means the target is not a storefront feed. Returns the
    /// number of products on page 1.
    ///
    /// # Errors
    ///
    /// Every error from [`Self::fetch_products_page`] is returned unchanged;
    /// callers treat all of them as fatal.
    pub async fn preflight(&self, store_url: &str) -> Result<usize, ScraperError> {
        let products = self.fetch_products_page(store_url, 1).await?;
        tracing::info!(
            store_url,
            products = products.len(),
            "connection successful; products found on first page"
        );
        Ok(products.len())
    }

    /// Returns a lazy page sequence starting at page 1.
    #[must_use]
    pub fn pages<'a>(&'a self, store_url: &'a str, max_pages: u32) -> ProductPages<'a> {
        ProductPages {
            client: self,
            store_url,
            cursor: 1,
            max_pages,
            requested: 0,
            done: false,
        }
    }
}

/// Lazy, finite sequence of non-empty feed pages.
///
/// Yields `(page_index, products)` until a page comes back empty (or fails,
/// which is logged and treated as empty) or the page ceiling is reached.
/// Once finished it stays finished.
pub struct ProductPages<'a> {
    client: &'a StoreClient,
    store_url: &'a str,
    cursor: u32,
    max_pages: u32,
    requested: u32,
    done: bool,
}

impl ProductPages<'_> {
    /// Restarts the sequence at `page` instead of 1.
    #[must_use]
    pub fn starting_at(mut self, page: u32) -> Self {
        self.cursor = page.max(1);
        self
    }

    /// Number of feed requests issued so far.
    #[must_use]
    pub fn requested(&self) -> u32 {
        self.requested
    }

    /// Fetches the next page, or returns `None` once pagination has ended.
    pub async fn next_page(&mut self) -> Option<(u32, Vec<Product>)> {
        if self.done {
            return None;
        }

        let page = self.cursor;
        if page > self.max_pages {
            tracing::warn!(
                max_pages = self.max_pages,
                "reached page limit; stopping pagination"
            );
            self.done = true;
            return None;
        }
        self.cursor += 1;
        self.requested += 1;

        let products = match self.client.fetch_products_page(self.store_url, page).await {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(
                    url = %products_page_url(self.store_url, page),
                    page,
                    error = %e,
                    "failed to fetch products page; treating as empty"
                );
                Vec::new()
            }
        };

        tracing::debug!(page, count = products.len(), "fetched products page");

        if products.is_empty() {
            self.done = true;
            return None;
        }

        Some((page, products))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_page_url_appends_page_query() {
        assert_eq!(
            products_page_url("https://shop.example.com", 3),
            "https://shop.example.com/products.json?page=3"
        );
    }

    #[test]
    fn products_page_url_keeps_store_path() {
        assert_eq!(
            products_page_url("https://example.com/en-gb", 1),
            "https://example.com/en-gb/products.json?page=1"
        );
    }

    #[tokio::test]
    async fn pages_with_zero_ceiling_issue_no_requests() {
        // Unroutable store: any request would fail, but none should be made.
        let client = StoreClient::new(1, "scrapify-test/0.1").unwrap();
        let mut pages = client.pages("http://127.0.0.1:9", 0);
        assert!(pages.next_page().await.is_none());
        assert_eq!(pages.requested(), 0);
    }

    #[tokio::test]
    async fn starting_at_zero_clamps_to_first_page() {
        let client = StoreClient::new(1, "scrapify-test/0.1").unwrap();
        let pages = client.pages("http://127.0.0.1:9", 5).starting_at(0);
        assert_eq!(pages.cursor, 1);
    }
}
