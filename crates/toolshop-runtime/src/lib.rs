pub mod backoffice;
pub mod config;
pub mod error;
pub mod logging;
pub mod seed;

pub use backoffice::Backoffice;
pub use config::{Config, resolve_config_path};
pub use error::{Error, Result};
pub use logging::init_logging;
