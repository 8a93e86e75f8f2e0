//! Back-office metrics computed from the live collections.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use toolshop_types::{Customer, EntityId, Order, OrderStatus, Product};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LowStockEntry {
    pub id: EntityId,
    pub name: String,
    pub stock: u32,
    pub min_stock: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySales {
    /// `YYYY-MM`
    pub month: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStock {
    pub category: String,
    pub stock: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// Sum of totals over orders that were not cancelled
    pub total_sales: Decimal,
    pub customer_count: usize,
    /// Orders still pending or processing
    pub pending_orders: usize,
    pub low_stock: Vec<LowStockEntry>,
    pub sales_by_month: Vec<MonthlySales>,
    pub stock_by_category: Vec<CategoryStock>,
}

impl DashboardSummary {
    pub fn compute(products: &[Product], customers: &[Customer], orders: &[Order]) -> Self {
        let billable = || {
            orders
                .iter()
                .filter(|order| order.status != OrderStatus::Cancelled)
        };

        // Totals are unvalidated form input; sums saturate rather than overflow
        let mut by_month: BTreeMap<String, Decimal> = BTreeMap::new();
        for order in billable() {
            let month = by_month
                .entry(order.date.format("%Y-%m").to_string())
                .or_default();
            *month = month.saturating_add(order.total);
        }

        // First-seen order keeps the table stable as products are edited
        let mut stock_by_category: Vec<CategoryStock> = Vec::new();
        for product in products {
            match stock_by_category
                .iter_mut()
                .find(|entry| entry.category == product.category)
            {
                Some(entry) => entry.stock += u64::from(product.stock),
                None => stock_by_category.push(CategoryStock {
                    category: product.category.clone(),
                    stock: u64::from(product.stock),
                }),
            }
        }

        Self {
            total_sales: billable()
                .map(|order| order.total)
                .fold(Decimal::ZERO, Decimal::saturating_add),
            customer_count: customers.len(),
            pending_orders: orders.iter().filter(|order| order.status.is_open()).count(),
            low_stock: products
                .iter()
                .filter(|product| product.is_low_stock())
                .map(|product| LowStockEntry {
                    id: product.id,
                    name: product.name.clone(),
                    stock: product.stock,
                    min_stock: product.min_stock,
                })
                .collect(),
            sales_by_month: by_month
                .into_iter()
                .map(|(month, total)| MonthlySales { month, total })
                .collect(),
            stock_by_category,
        }
    }
}
