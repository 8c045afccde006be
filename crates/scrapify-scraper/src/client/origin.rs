//! Store URL validation and product URL construction.

use crate::error::ScraperError;

/// Validates a `--target` store URL and strips trailing slashes.
///
/// Given `"https://shop.example.com/"`, returns `"https://shop.example.com"`.
/// Any path on the URL is kept, so feed and product URLs are built relative
/// to exactly what the caller supplied.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidStoreUrl`] if the value is not an absolute
/// `http`/`https` URL with a host.
pub fn normalize_store_url(store_url: &str) -> Result<String, ScraperError> {
    let trimmed = store_url.trim().trim_end_matches('/');
    let invalid = |reason: String| ScraperError::InvalidStoreUrl {
        store_url: store_url.to_owned(),
        reason,
    };

    let parsed = reqwest::Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "unsupported scheme \"{}\"; expected http or https",
            parsed.scheme()
        )));
    }
    if parsed.host_str().unwrap_or_default().is_empty() {
        return Err(invalid("URL has no host".to_owned()));
    }

    Ok(trimmed.to_owned())
}

/// Canonical storefront URL for a product handle: `{store_url}/products/{handle}`.
#[must_use]
pub fn product_url(store_url: &str, handle: &str) -> String {
    format!("{store_url}/products/{handle}")
}

/// Extracts the hostname from a store URL for use in log fields.
///
/// Falls back to the full URL string if parsing fails.
#[must_use]
pub fn extract_domain(store_url: &str) -> String {
    reqwest::Url::parse(store_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| store_url.to_owned())
}
