//! Flattening of products and variants into fixed-width output rows.
//!
//! Optional fields are defaulted to empty strings here and nowhere earlier.

use serde_json::Value;

use crate::html::{html_to_text, PageMeta};
use crate::types::{Product, Variant};

/// Column header for one row per product.
pub const BASIC_HEADER: [&str; 5] = [
    "Name",
    "URL",
    "Meta Title",
    "Meta Description",
    "Product Description",
];

/// Column header for one row per variant.
pub const VARIANT_HEADER: [&str; 34] = [
    "Name",
    "Variant ID",
    "Product ID",
    "Variant Title",
    "Price",
    "SKU",
    "Position",
    "Inventory Policy",
    "Compare At Price",
    "Fulfillment Service",
    "Inventory Management",
    "Option1",
    "Option2",
    "Option3",
    "Created At",
    "Updated At",
    "Taxable",
    "Barcode",
    "Grams",
    "Image ID",
    "Weight",
    "Weight Unit",
    "Inventory Quantity",
    "Old Inventory Quantity",
    "Tax Code",
    "Requires Shipping",
    "Quantity Rule",
    "Price Currency",
    "Compare At Price Currency",
    "Quantity Price Breaks",
    "URL",
    "Meta Title",
    "Meta Description",
    "Product Description",
];

/// Name used when a product has no title.
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown";

pub type Row = Vec<String>;

/// Which of the two fixed schemas a run writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSchema {
    Basic,
    Variants,
}

impl OutputSchema {
    #[must_use]
    pub fn for_mode(include_variants: bool) -> Self {
        if include_variants {
            Self::Variants
        } else {
            Self::Basic
        }
    }

    #[must_use]
    pub fn header(self) -> &'static [&'static str] {
        match self {
            Self::Basic => &BASIC_HEADER,
            Self::Variants => &VARIANT_HEADER,
        }
    }

    #[must_use]
    pub fn width(self) -> usize {
        self.header().len()
    }
}

/// Product-level values shared by every row emitted for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductContext {
    pub name: String,
    pub url: String,
    pub meta_title: String,
    pub meta_description: String,
    /// `body_html` reduced to plain text.
    pub description: String,
}

impl ProductContext {
    #[must_use]
    pub fn new(product: &Product, url: String, meta: PageMeta) -> Self {
        Self {
            name: product
                .title
                .clone()
                .unwrap_or_else(|| UNKNOWN_PRODUCT_NAME.to_owned()),
            url,
            meta_title: meta.title,
            meta_description: meta.description,
            description: product
                .body_html
                .as_deref()
                .map(html_to_text)
                .unwrap_or_default(),
        }
    }
}

/// The single row written for a product in basic mode.
#[must_use]
pub fn basic_row(ctx: &ProductContext) -> Row {
    vec![
        ctx.name.clone(),
        ctx.url.clone(),
        ctx.meta_title.clone(),
        ctx.meta_description.clone(),
        ctx.description.clone(),
    ]
}

/// One row per variant. An empty slice yields no rows.
#[must_use]
pub fn variant_rows(ctx: &ProductContext, variants: &[Variant]) -> Vec<Row> {
    variants.iter().map(|v| variant_row(ctx, v)).collect()
}

/// A single variant-mode row: name, the variant columns, then the shared
/// product columns.
#[must_use]
pub fn variant_row(ctx: &ProductContext, v: &Variant) -> Row {
    let mut row = Vec::with_capacity(VARIANT_HEADER.len());
    row.push(ctx.name.clone());
    row.extend([
        json_text(v.id.as_ref()),
        json_text(v.product_id.as_ref()),
        json_text(v.title.as_ref()),
        json_text(v.price.as_ref()),
        json_text(v.sku.as_ref()),
        json_text(v.position.as_ref()),
        json_text(v.inventory_policy.as_ref()),
        json_text(v.compare_at_price.as_ref()),
        json_text(v.fulfillment_service.as_ref()),
        json_text(v.inventory_management.as_ref()),
        json_text(v.option1.as_ref()),
        json_text(v.option2.as_ref()),
        json_text(v.option3.as_ref()),
        json_text(v.created_at.as_ref()),
        json_text(v.updated_at.as_ref()),
        json_text(v.taxable.as_ref()),
        json_text(v.barcode.as_ref()),
        json_text(v.grams.as_ref()),
        json_text(v.image_id.as_ref()),
        json_text(v.weight.as_ref()),
        json_text(v.weight_unit.as_ref()),
        json_text(v.inventory_quantity.as_ref()),
        json_text(v.old_inventory_quantity.as_ref()),
        json_text(v.tax_code.as_ref()),
        json_text(v.requires_shipping.as_ref()),
        json_text(v.quantity_rule.as_ref()),
        json_text(v.price_currency.as_ref()),
        json_text(v.compare_at_price_currency.as_ref()),
        json_text(v.quantity_price_breaks.as_ref()),
    ]);
    row.extend([
        ctx.url.clone(),
        ctx.meta_title.clone(),
        ctx.meta_description.clone(),
        ctx.description.clone(),
    ]);
    row
}

/// Renders a raw column value. Strings are written bare, numbers and
/// booleans in their source JSON spelling, objects and arrays as compact JSON.
fn json_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
#[path = "rows_test.rs"]
mod tests;
