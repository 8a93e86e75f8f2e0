mod args;
mod commands;
mod handlers;
pub mod presentation;
pub mod prompt;
pub mod shell;

pub use args::{Cli, Commands, LogLevel, OutputFormat};
pub use commands::run;
