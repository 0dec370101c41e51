//! # Plain Catalog Listing
//!
//! Used when stdout is not a terminal: fetch the catalog once and print one
//! line per product.

use crate::storefront::models::Product;
use crate::storefront::services::ShopApi;
use crate::storefront::views::card::{price_label, PRICELESS};
use anyhow::{Context, Result};
use std::io::Write;

/// Format a product as `title<TAB>category<TAB>price`
pub fn listing_line(product: &Product) -> String {
    let price = product
        .price
        .map(price_label)
        .unwrap_or_else(|| PRICELESS.to_string());
    format!("{}\t{}\t{}", product.title, product.category, price)
}

/// Fetch the catalog and write it to `out`
pub async fn write_catalog<W: Write>(api: &ShopApi, out: &mut W) -> Result<usize> {
    let products = api
        .list_products()
        .await
        .context("could not load the catalog")?;
    for product in &products {
        writeln!(out, "{}", listing_line(product))?;
    }
    out.flush()?;
    Ok(products.len())
}
