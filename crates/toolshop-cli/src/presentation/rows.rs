use super::table::{Cell, TableRow, Tone};
use serde::Serialize;
use toolshop_engine::format::{format_currency, format_date, format_margin};
use toolshop_engine::{CategoryStock, LowStockEntry, MonthlySales};
use toolshop_types::{Customer, Order, Product};

impl TableRow for Product {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "CATEGORY", "PRICE", "COST", "MARGIN", "STOCK", "MIN"]
    }

    fn cells(&self) -> Vec<Cell> {
        let stock_tone = if self.is_low_stock() {
            Tone::Danger
        } else {
            Tone::Plain
        };
        vec![
            Cell::plain(self.id.to_string()),
            Cell::plain(&self.name),
            Cell::plain(&self.category),
            Cell::plain(format_currency(self.price)),
            Cell::plain(format_currency(self.cost)),
            Cell::plain(format_margin(self.cost, self.price)),
            Cell::toned(self.stock.to_string(), stock_tone),
            Cell::plain(self.min_stock.to_string()),
        ]
    }
}

impl TableRow for Customer {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "EMAIL", "PHONE", "ADDRESS", "CITY", "STATE", "CEP"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::plain(self.id.to_string()),
            Cell::plain(&self.name),
            Cell::plain(&self.email),
            Cell::plain(&self.phone),
            Cell::plain(&self.address),
            Cell::plain(&self.city),
            Cell::plain(&self.state),
            Cell::plain(&self.postal_code),
        ]
    }
}

impl TableRow for Order {
    fn headers() -> &'static [&'static str] {
        &["ID", "CUSTOMER", "DATE", "STATUS", "TOTAL", "ITEMS", "ITEMS TOTAL"]
    }

    fn cells(&self) -> Vec<Cell> {
        let items_total = self.items_total();
        // The stored total is free input and may disagree with the lines
        let items_tone = if items_total == self.total {
            Tone::Plain
        } else {
            Tone::Warn
        };
        vec![
            Cell::plain(self.id.to_string()),
            Cell::plain(&self.customer_name),
            Cell::plain(format_date(self.date)),
            Cell::toned(self.status.to_string(), Tone::for_status(self.status)),
            Cell::plain(format_currency(self.total)),
            Cell::plain(self.items.len().to_string()),
            Cell::toned(format_currency(items_total), items_tone),
        ]
    }
}

/// Storefront view of a product: no cost or margin
#[derive(Serialize)]
pub struct CatalogRow<'a>(pub &'a Product);

impl TableRow for CatalogRow<'_> {
    fn headers() -> &'static [&'static str] {
        &["NAME", "CATEGORY", "PRICE", "AVAILABILITY"]
    }

    fn cells(&self) -> Vec<Cell> {
        let product = self.0;
        let availability = if product.stock == 0 {
            Cell::toned("out of stock", Tone::Danger)
        } else {
            Cell::plain(format!("{} in stock", product.stock))
        };
        vec![
            Cell::plain(&product.name),
            Cell::plain(&product.category),
            Cell::plain(format_currency(product.price)),
            availability,
        ]
    }
}

/// Storefront view of an order
#[derive(Serialize)]
pub struct TrackRow<'a>(pub &'a Order);

impl TableRow for TrackRow<'_> {
    fn headers() -> &'static [&'static str] {
        &["ORDER", "CUSTOMER", "DATE", "STATUS", "TOTAL"]
    }

    fn cells(&self) -> Vec<Cell> {
        let order = self.0;
        vec![
            Cell::plain(format!("#{}", order.id)),
            Cell::plain(&order.customer_name),
            Cell::plain(format_date(order.date)),
            Cell::toned(order.status.to_string(), Tone::for_status(order.status)),
            Cell::plain(format_currency(order.total)),
        ]
    }
}

impl TableRow for LowStockEntry {
    fn headers() -> &'static [&'static str] {
        &["ID", "PRODUCT", "STOCK", "MIN"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::plain(self.id.to_string()),
            Cell::plain(&self.name),
            Cell::toned(self.stock.to_string(), Tone::Danger),
            Cell::plain(self.min_stock.to_string()),
        ]
    }
}

impl TableRow for MonthlySales {
    fn headers() -> &'static [&'static str] {
        &["MONTH", "SALES"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::plain(&self.month),
            Cell::plain(format_currency(self.total)),
        ]
    }
}

impl TableRow for CategoryStock {
    fn headers() -> &'static [&'static str] {
        &["CATEGORY", "STOCK"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::plain(&self.category),
            Cell::plain(self.stock.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolshop_runtime::seed;

    #[test]
    fn test_order_row_shows_items_total_and_flags_mismatch() {
        let mut order = seed::orders().remove(0);
        let cells = order.cells();
        assert_eq!(cells.len(), Order::headers().len());
        assert_eq!(cells[6], Cell::plain("R$ 1.399,97"));

        order.total = order.total + order.total;
        let cells = order.cells();
        assert_eq!(cells[4].text, "R$ 2.799,94");
        assert_eq!(cells[6], Cell::toned("R$ 1.399,97", Tone::Warn));
    }
}
