use crate::entity::{Draft, Entity, EntityId, EntityKind, contains_folded};
use crate::form::{parse_count, parse_decimal};
use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product with pricing and stock levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub cost: Decimal,
    pub stock: u32,
    pub min_stock: u32,
}

impl Product {
    /// Stock has reached or dropped below the reorder threshold
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// Profit margin in percent, `None` for a zero price
    pub fn margin_percent(&self) -> Option<Decimal> {
        margin_percent(self.cost, self.price)
    }
}

/// (price - cost) / price * 100
pub fn margin_percent(cost: Decimal, price: Decimal) -> Option<Decimal> {
    if price.is_zero() {
        return None;
    }
    price
        .checked_sub(cost)
        .and_then(|profit| profit.checked_div(price))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub cost: Decimal,
    pub stock: u32,
    pub min_stock: u32,
}

impl Entity for Product {
    type Draft = ProductDraft;

    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price,
            cost: self.cost,
            stock: self.stock,
            min_stock: self.min_stock,
        }
    }

    fn from_draft(draft: ProductDraft, id: EntityId) -> Self {
        Product {
            id,
            name: draft.name,
            category: draft.category,
            price: draft.price,
            cost: draft.cost,
            stock: draft.stock,
            min_stock: draft.min_stock,
        }
    }

    fn matches(&self, needle: &str) -> bool {
        contains_folded(&self.name, needle) || contains_folded(&self.category, needle)
    }
}

impl Draft for ProductDraft {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("category", self.category.clone()),
            ("price", self.price.to_string()),
            ("cost", self.cost.to_string()),
            ("stock", self.stock.to_string()),
            ("min_stock", self.min_stock.to_string()),
        ]
    }

    fn set_field(&mut self, field: &str, value: &str) -> Result<()> {
        match field {
            "name" => self.name = value.to_string(),
            "category" => self.category = value.to_string(),
            "price" => self.price = parse_decimal("price", value)?,
            "cost" => self.cost = parse_decimal("cost", value)?,
            "stock" => self.stock = parse_count("stock", value)?,
            "min_stock" | "minStock" => self.min_stock = parse_count("min_stock", value)?,
            other => {
                return Err(Error::UnknownField {
                    kind: EntityKind::Product.singular(),
                    field: other.to_string(),
                });
            }
        }
        Ok(())
    }
}
