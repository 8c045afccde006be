use std::path::PathBuf;

/// Process-level settings read from the environment.
///
/// Built once at startup by [`crate::load_app_config`] and passed by
/// reference to the client and the export driver.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Flat delay after each product, in milliseconds. Not a backoff.
    pub throttle_ms: u64,
    /// Highest `products.json?page=N` index that will ever be requested.
    pub max_pages: u32,
    pub output_path: PathBuf,
}

/// Per-invocation settings taken from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Store root URL, already normalized (no trailing slash).
    pub store_url: String,
    pub include_variants: bool,
}

impl RunConfig {
    #[must_use]
    pub fn new(store_url: impl Into<String>, include_variants: bool) -> Self {
        Self {
            store_url: store_url.into(),
            include_variants,
        }
    }
}
