//! Catalog export: preflight, page loop, per-product enrichment, CSV rows.
//!
//! Everything runs sequentially. A page is processed completely before the
//! next one is requested, and per-product failures are logged by the scraper
//! and degrade to empty values so a single bad product never aborts the run.
//! Only the preflight (and I/O on the output file) is fatal.

mod sink;

use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use scrapify_core::{AppConfig, RunConfig};
use scrapify_scraper::rows::{basic_row, variant_rows, Row};
use scrapify_scraper::{
    extract_domain, product_json_url, product_url, products_page_url, OutputSchema,
    Product, ProductContext, StoreClient,
};

pub(crate) use sink::CsvSink;

/// Totals reported at the end of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ExportSummary {
    /// Products processed, including variant-mode products that produced no rows.
    pub products: usize,
    pub rows: usize,
    /// Non-empty feed pages processed.
    pub pages: u32,
}

/// Full run: build the client, preflight, open the output file, export, and
/// print a summary.
///
/// The output file is created only after the preflight succeeds, so a bad
/// target never leaves an empty or truncated file behind.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the preflight fails, or
/// the output file cannot be created or written.
pub(crate) async fn run(
    config: &AppConfig,
    run: RunConfig,
    output: &Path,
) -> anyhow::Result<ExportSummary> {
    let client = StoreClient::new(config.request_timeout_secs, &config.user_agent)
        .context("failed to build HTTP client")?;

    tracing::info!(
        store = %run.store_url,
        feed = %products_page_url(&run.store_url, 1),
        include_variants = run.include_variants,
        "starting catalog export"
    );

    client
        .preflight(&run.store_url)
        .await
        .inspect_err(|e| {
            tracing::error!(store = %run.store_url, error = %e, "preflight failed; aborting");
        })
        .with_context(|| format!("{} is not a reachable product feed", run.store_url))?;

    let mut sink = CsvSink::create(output)?;
    let summary = export_catalog(&client, config, &run, &mut sink).await?;
    sink.finish()?;

    println!(
        "scraping completed: {} products processed, {} rows written to {}",
        summary.products,
        summary.rows,
        output.display()
    );

    Ok(summary)
}

/// Writes the header for the active schema, then every product of every
/// page until the page sequence ends.
///
/// # Errors
///
/// Only sink write failures are returned; fetch failures are absorbed.
pub(crate) async fn export_catalog<W: io::Write>(
    client: &StoreClient,
    config: &AppConfig,
    run: &RunConfig,
    sink: &mut CsvSink<W>,
) -> anyhow::Result<ExportSummary> {
    let schema = OutputSchema::for_mode(run.include_variants);
    sink.write_header(schema)?;

    let throttle = Duration::from_millis(config.throttle_ms);
    let domain = extract_domain(&run.store_url);
    let mut summary = ExportSummary::default();
    let mut pages = client.pages(&run.store_url, config.max_pages);

    while let Some((page, products)) = pages.next_page().await {
        let total = products.len();
        tracing::info!(store = %domain, page, products = total, "processing page");

        for (i, product) in products.iter().enumerate() {
            let rows = export_product(client, run, product, i + 1, total).await;
            for row in &rows {
                sink.write_row(row)?;
            }
            summary.rows += rows.len();
            summary.products += 1;

            if !throttle.is_zero() {
                tokio::time::sleep(throttle).await;
            }
        }
        summary.pages += 1;
    }

    tracing::info!(
        store = %domain,
        products = summary.products,
        rows = summary.rows,
        pages = summary.pages,
        requests = pages.requested(),
        "catalog export finished"
    );

    Ok(summary)
}

/// Enriches one product and flattens it into zero or more rows.
async fn export_product(
    client: &StoreClient,
    run: &RunConfig,
    product: &Product,
    position: usize,
    total: usize,
) -> Vec<Row> {
    let url = product_url(&run.store_url, product.handle.as_deref().unwrap_or_default());
    tracing::info!(
        product = product.title.as_deref().unwrap_or_default(),
        "[{position}/{total}] scraping {url}"
    );

    let meta = client.scrape_meta(&url).await;
    let ctx = ProductContext::new(product, url, meta);

    if !run.include_variants {
        return vec![basic_row(&ctx)];
    }

    let variants = client.fetch_variants(&product_json_url(&ctx.url)).await;
    if variants.is_empty() {
        // No fallback to the basic schema: the product is absent from the file.
        tracing::info!(product = %ctx.name, url = %ctx.url, "no variants found; no rows written");
    }
    variant_rows(&ctx, &variants)
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
