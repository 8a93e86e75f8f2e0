use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Interactive back office (default)")]
    Shell,

    #[command(about = "Browse the storefront catalog (searches product names)")]
    Catalog {
        #[arg(long)]
        search: Option<String>,
    },

    #[command(about = "Track storefront orders (searches customer names)")]
    Track {
        #[arg(long)]
        search: Option<String>,
    },

    #[command(about = "List products (searches name and category)")]
    Products {
        #[arg(long)]
        search: Option<String>,
    },

    #[command(about = "List customers (searches name and email)")]
    Customers {
        #[arg(long)]
        search: Option<String>,
    },

    #[command(about = "List orders (searches customer name and order number)")]
    Orders {
        #[arg(long)]
        search: Option<String>,
    },

    #[command(about = "Show sales, customer and stock metrics")]
    Dashboard,
}
