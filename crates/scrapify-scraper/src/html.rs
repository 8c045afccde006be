//! HTML helpers: product page metadata and plain-text descriptions.

use std::sync::LazyLock;

use scraper::{Html, Selector};

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("valid title selector"));
static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta").expect("valid meta selector"));

/// Metadata scraped from a product's rendered HTML page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    /// Text of the first `<title>` element, trimmed.
    pub title: String,
    /// `content` of the first `<meta name="description">`.
    pub description: String,
}

/// Extracts the page title and meta description from an HTML document.
///
/// The description comes from the first `<meta>` in document order whose
/// `name` attribute, trimmed and compared case-insensitively, is
/// `description`. Missing pieces are empty strings.
#[must_use]
pub fn extract_page_meta(html: &str) -> PageMeta {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_owned())
        .unwrap_or_default();

    let description = document
        .select(&META_SELECTOR)
        .find(|el| {
            el.value()
                .attr("name")
                .is_some_and(|name| name.trim().eq_ignore_ascii_case("description"))
        })
        .and_then(|el| el.value().attr("content"))
        .map(str::to_owned)
        .unwrap_or_default();

    PageMeta { title, description }
}

/// Strips all markup from an HTML fragment, keeping text nodes in document
/// order with entities decoded. Whitespace is preserved as written.
#[must_use]
pub fn html_to_text(body_html: &str) -> String {
    if body_html.is_empty() {
        return String::new();
    }
    Html::parse_fragment(body_html)
        .root_element()
        .text()
        .collect()
}

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;
