use super::args::{Cli, Commands};
use super::handlers;
use crate::presentation::Renderer;
use crate::prompt::TerminalConfirm;
use anyhow::Result;
use toolshop_runtime::{Backoffice, Config, init_logging};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(&cli.log_level.to_string());

    let config = Config::load(cli.config.as_deref())?;
    let renderer = Renderer::for_stdout(cli.format);
    let backoffice = Backoffice::from_config(&config, TerminalConfirm::new(cli.yes));

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => handlers::shell::handle(backoffice, renderer),

        Commands::Catalog { search } => handlers::catalog::handle_catalog(
            backoffice.products().records(),
            search.as_deref(),
            renderer,
        ),

        Commands::Track { search } => handlers::catalog::handle_track(
            backoffice.orders().records(),
            search.as_deref(),
            renderer,
        ),

        Commands::Products { search } => {
            handlers::list::handle(backoffice.products(), search.as_deref(), renderer)
        }

        Commands::Customers { search } => {
            handlers::list::handle(backoffice.customers(), search.as_deref(), renderer)
        }

        Commands::Orders { search } => {
            handlers::list::handle(backoffice.orders(), search.as_deref(), renderer)
        }

        Commands::Dashboard => handlers::dashboard::handle(&backoffice, renderer),
    }
}
