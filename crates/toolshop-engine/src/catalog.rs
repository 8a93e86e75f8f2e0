//! Storefront-side filters. The public pages search a single field, unlike
//! the back-office controllers.

use toolshop_types::{Order, Product, contains_folded, fold};

/// Public product listing: name-only search
pub fn search_catalog<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = fold(term);
    products
        .iter()
        .filter(|product| contains_folded(&product.name, &needle))
        .collect()
}

/// Public order tracking: customer-name-only search
pub fn search_order_history<'a>(orders: &'a [Order], term: &str) -> Vec<&'a Order> {
    let needle = fold(term);
    orders
        .iter()
        .filter(|order| contains_folded(&order.customer_name, &needle))
        .collect()
}
