// Engine module - list controllers and read-only views over in-memory records
// This layer sits between entity types and whatever presents them (CLI, tests)

pub mod catalog;
pub mod confirm;
pub mod controller;
pub mod dashboard;
pub mod error;
pub mod format;
mod search;

pub use confirm::{AlwaysConfirm, Confirm, NeverConfirm, ScriptedConfirm};
pub use controller::{
    ControllerOptions, DeleteOutcome, EntityListController, IdStrategy,
    SubmitOutcome, UpdateMissPolicy,
};
pub use dashboard::{CategoryStock, DashboardSummary, LowStockEntry, MonthlySales};
pub use error::{Error, Result};
pub use search::{Search, search};
