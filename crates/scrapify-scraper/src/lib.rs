pub mod client;
pub mod enrich;
pub mod error;
pub mod html;
pub mod pages;
pub mod rows;
pub mod types;

pub use client::{extract_domain, normalize_store_url, product_url, StoreClient};
pub use enrich::product_json_url;
pub use error::ScraperError;
pub use html::{extract_page_meta, html_to_text, PageMeta};
pub use pages::{products_page_url, ProductPages, DEFAULT_MAX_PAGES};
pub use rows::{basic_row, variant_rows, OutputSchema, ProductContext, Row};
pub use types::{Product, Variant};
