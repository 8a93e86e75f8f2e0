use crate::presentation::{Renderer, TableRow};
use anyhow::Result;
use serde::Serialize;
use std::io;
use toolshop_engine::{Confirm, EntityListController};
use toolshop_types::Entity;

/// Print one admin page, filtered by `search` the way the page's search box would
pub fn handle<T, C>(
    page: &EntityListController<T, C>,
    search: Option<&str>,
    renderer: Renderer,
) -> Result<()>
where
    T: Entity + TableRow + Serialize,
    C: Confirm,
{
    let rows: Vec<&T> = page.search(search.unwrap_or("")).collect();
    let empty = match search {
        Some(term) => format!("No {} match '{}'.", T::KIND.plural(), term),
        None => format!("No {} yet.", T::KIND.plural()),
    };
    renderer.records(&mut io::stdout().lock(), &rows, &empty)
}
