//! Response types for the public storefront JSON endpoints.
//!
//! ## `GET /products.json?page=N`
//!
//! `{"products": [...]}`. An empty array marks the end of the feed. A body
//! without the `products` key is not a storefront feed at all, which is why
//! [`ProductsPage::products`] stays `Option` instead of defaulting to empty.
//!
//! ## `GET /products/{handle}.json`
//!
//! `{"product": {..., "variants": [...]}}`. The single-product document carries
//! the full inventory view of each variant (`inventory_quantity`, `barcode`,
//! `weight`, `quantity_rule`, ...), most of which the feed omits.
//!
//! ## Optionality
//!
//! Stores differ in which fields they expose and many fields are `null` when
//! unset (`compare_at_price`, `option2`, `image_id`, ...). Every field here is
//! `Option`; defaulting to an empty string happens only when a row is
//! flattened in [`crate::rows`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top-level response from `GET /products.json`.
#[derive(Debug, Deserialize)]
pub struct ProductsPage {
    /// `None` when the key is absent (or `null`).
    #[serde(default, deserialize_with = "lenient_records")]
    pub products: Option<Vec<Product>>,
}

/// A single product as listed in the catalog feed.
///
/// Feed-embedded variants are not read: variant-mode rows come from the
/// per-product document, which has the inventory fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Product {
    /// Display name. Rendered as `"Unknown"` when missing.
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,

    /// URL slug, unique within a store (e.g., `"blue-cotton-shirt"`).
    #[serde(default, deserialize_with = "lenient_text")]
    pub handle: Option<String>,

    /// Raw HTML product description. May be `null` or absent.
    #[serde(default, deserialize_with = "lenient_text")]
    pub body_html: Option<String>,
}

/// Top-level response from `GET /products/{handle}.json`.
#[derive(Debug, Deserialize)]
pub struct ProductDetail {
    #[serde(default)]
    pub product: Option<ProductVariants>,
}

/// The part of the single-product document the exporter reads.
#[derive(Debug, Deserialize)]
pub struct ProductVariants {
    #[serde(default, deserialize_with = "lenient_records")]
    pub variants: Option<Vec<Variant>>,
}

/// One purchasable variant of a [`Product`].
///
/// Columns are kept as the raw JSON value the store sent. Stores disagree on
/// types (`price` as `"19.99"` or `19.99`, `grams` as `200` or `"200"`), and
/// the exporter writes values through unchanged, so nothing is coerced here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Variant {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub product_id: Option<Value>,
    /// e.g. `"Small / Blue"` or `"Default Title"`.
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub sku: Option<Value>,
    #[serde(default)]
    pub position: Option<Value>,
    #[serde(default)]
    pub inventory_policy: Option<Value>,
    /// `null` when the variant is not on sale.
    #[serde(default)]
    pub compare_at_price: Option<Value>,
    #[serde(default)]
    pub fulfillment_service: Option<Value>,
    #[serde(default)]
    pub inventory_management: Option<Value>,
    #[serde(default)]
    pub option1: Option<Value>,
    #[serde(default)]
    pub option2: Option<Value>,
    #[serde(default)]
    pub option3: Option<Value>,
    #[serde(default)]
    pub created_at: Option<Value>,
    #[serde(default)]
    pub updated_at: Option<Value>,
    #[serde(default)]
    pub taxable: Option<Value>,
    #[serde(default)]
    pub barcode: Option<Value>,
    #[serde(default)]
    pub grams: Option<Value>,
    #[serde(default)]
    pub image_id: Option<Value>,
    #[serde(default)]
    pub weight: Option<Value>,
    #[serde(default)]
    pub weight_unit: Option<Value>,
    #[serde(default)]
    pub inventory_quantity: Option<Value>,
    #[serde(default)]
    pub old_inventory_quantity: Option<Value>,
    #[serde(default)]
    pub tax_code: Option<Value>,
    #[serde(default)]
    pub requires_shipping: Option<Value>,
    /// Object such as `{"min": 1, "max": null, "increment": 1}`.
    #[serde(default)]
    pub quantity_rule: Option<Value>,
    #[serde(default)]
    pub price_currency: Option<Value>,
    #[serde(default)]
    pub compare_at_price_currency: Option<Value>,
    /// Array of tiered price objects; usually `[]`.
    #[serde(default)]
    pub quantity_price_breaks: Option<Value>,
}

/// Accepts any JSON scalar as text. Strings are kept verbatim, numbers and
/// booleans use their JSON spelling, `null` is `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Decodes an array of records, skipping items that are not objects of the
/// expected shape instead of failing the whole document. `null` is `None`;
/// any non-array value is still an error.
fn lenient_records<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| match serde_json::from_value(item) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::warn!(error = %e, "skipping malformed record");
                        None
                    }
                })
                .collect(),
        )),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected an array of records, found {other}"
        ))),
    }
}
