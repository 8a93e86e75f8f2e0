use crate::presentation::{CatalogRow, Renderer, TrackRow};
use anyhow::Result;
use std::io;
use toolshop_engine::catalog::{search_catalog, search_order_history};
use toolshop_types::{Order, Product};

pub fn handle_catalog(
    products: &[Product],
    search: Option<&str>,
    renderer: Renderer,
) -> Result<()> {
    let rows: Vec<CatalogRow> = search_catalog(products, search.unwrap_or(""))
        .into_iter()
        .map(CatalogRow)
        .collect();

    let empty = match search {
        Some(term) => format!("No products named like '{}'.", term),
        None => "The catalog is empty.".to_string(),
    };
    renderer.records(&mut io::stdout().lock(), &rows, &empty)
}

pub fn handle_track(orders: &[Order], search: Option<&str>, renderer: Renderer) -> Result<()> {
    let rows: Vec<TrackRow> = search_order_history(orders, search.unwrap_or(""))
        .into_iter()
        .map(TrackRow)
        .collect();

    let empty = match search {
        Some(term) => format!("No orders for customers named like '{}'.", term),
        None => "No orders yet.".to_string(),
    };
    renderer.records(&mut io::stdout().lock(), &rows, &empty)
}
