mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "toolshop")]
#[command(about = "Tool shop storefront and back office", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: $TOOLSHOP_CONFIG or XDG config dir)")]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Answer yes to every delete confirmation")]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
