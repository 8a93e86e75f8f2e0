use crate::entity::{Draft, Entity, EntityId, EntityKind, contains_folded};
use crate::form::{parse_count, parse_date, parse_decimal};
use crate::{Error, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Still waiting to leave the warehouse
    pub fn is_open(self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Processing)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // Portuguese labels are what the storefront staff type
        match s.trim().to_lowercase().as_str() {
            "pending" | "pendente" => Ok(OrderStatus::Pending),
            "processing" | "em processamento" => Ok(OrderStatus::Processing),
            "shipped" | "enviado" => Ok(OrderStatus::Shipped),
            "delivered" | "entregue" => Ok(OrderStatus::Delivered),
            "cancelled" | "canceled" | "cancelado" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status: '{}'", other)),
        }
    }
}

/// One line of an order. `product_name` is free text, not a product reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: EntityId,
    pub product_name: String,
    pub quantity: u32,
    pub price: Decimal,
}

impl OrderItem {
    /// Saturates at the `Decimal` bounds instead of overflowing
    pub fn subtotal(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: EntityId,
    pub customer_name: String,
    pub date: NaiveDate,
    pub status: OrderStatus,
    /// Stored as submitted; never recomputed from `items`
    pub total: Decimal,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Sum of quantity * price over the items, for display next to `total`
    pub fn items_total(&self) -> Decimal {
        self.items
            .iter()
            .map(OrderItem::subtotal)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub customer_name: String,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub total: Decimal,
    pub items: Vec<OrderItem>,
}

impl Entity for Order {
    type Draft = OrderDraft;

    const KIND: EntityKind = EntityKind::Order;

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_draft(&self) -> OrderDraft {
        OrderDraft {
            customer_name: self.customer_name.clone(),
            date: self.date,
            status: self.status,
            total: self.total,
            items: self.items.clone(),
        }
    }

    fn from_draft(draft: OrderDraft, id: EntityId) -> Self {
        Order {
            id,
            customer_name: draft.customer_name,
            date: draft.date,
            status: draft.status,
            total: draft.total,
            items: draft.items,
        }
    }

    fn matches(&self, needle: &str) -> bool {
        contains_folded(&self.customer_name, needle) || self.id.to_string().contains(needle)
    }
}

impl Draft for OrderDraft {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("customer_name", self.customer_name.clone()),
            ("date", self.date.format("%Y-%m-%d").to_string()),
            ("status", self.status.to_string()),
            ("total", self.total.to_string()),
            ("items", format_items(&self.items)),
        ]
    }

    fn set_field(&mut self, field: &str, value: &str) -> Result<()> {
        match field {
            "customer_name" | "customerName" | "customer" => {
                self.customer_name = value.to_string()
            }
            "date" => self.date = parse_date("date", value)?,
            "status" => {
                self.status = value
                    .parse()
                    .map_err(|reason: String| Error::invalid("status", value, reason))?
            }
            "total" => self.total = parse_decimal("total", value)?,
            "items" => self.items = parse_items(value)?,
            other => {
                return Err(Error::UnknownField {
                    kind: EntityKind::Order.singular(),
                    field: other.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Render items as `product:quantity:price` entries joined by `;`
pub fn format_items(items: &[OrderItem]) -> String {
    items
        .iter()
        .map(|item| format!("{}:{}:{}", item.product_name, item.quantity, item.price))
        .collect::<Vec<_>>()
        .join(";")
}

/// Parse `product:quantity:price;...`. Item identities are assigned 1.. in order.
pub fn parse_items(value: &str) -> Result<Vec<OrderItem>> {
    value
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .enumerate()
        .map(|(index, entry)| {
            // Split from the right so product names may contain ':'
            let mut parts = entry.rsplitn(3, ':');
            let (Some(price), Some(quantity), Some(name)) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(Error::invalid(
                    "items",
                    entry,
                    "expected product:quantity:price",
                ));
            };
            Ok(OrderItem {
                id: EntityId::new(index as u64 + 1),
                product_name: name.trim().to_string(),
                quantity: parse_count("items", quantity)?,
                price: parse_decimal("items", price)?,
            })
        })
        .collect()
}
