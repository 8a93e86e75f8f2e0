pub mod customer;
pub mod entity;
pub mod error;
pub mod form;
pub mod order;
pub mod product;

pub use customer::{Customer, CustomerDraft};
pub use entity::{Draft, Entity, EntityId, EntityKind, contains_folded, fold};
pub use error::{Error, Result};
pub use order::{Order, OrderDraft, OrderItem, OrderStatus};
pub use product::{Product, ProductDraft};
