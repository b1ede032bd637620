mod catalog;
mod lookup;
mod render;
mod shell;

use clap::{Parser, Subcommand};
use grocer_core::ALL_CATEGORIES;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "grocer-cli")]
#[command(about = "Compare grocery prices at shops near you")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List catalog items matching a search term and category
    Items {
        /// Case-insensitive text the item name must contain
        #[arg(long, default_value = "")]
        search: String,
        /// Category label, or "All"
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,
    },
    /// List the category labels
    Categories,
    /// Look up shops and prices for one catalog item
    Lookup {
        /// Item id or exact item name
        item: String,
        /// Area to search near (defaults to GROCER_DEFAULT_LOCATION)
        #[arg(long)]
        location: Option<String>,
    },
    /// Start an interactive storefront session (the default)
    Shell,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = grocer_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let catalog = config.load_catalog()?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Items { search, category } => {
            catalog::run_items(&catalog, &search, &category);
        }
        Commands::Categories => catalog::run_categories(&catalog),
        Commands::Lookup { item, location } => {
            let client = lookup::build_client(&config)?;
            let location = location.unwrap_or_else(|| config.default_location.clone());
            lookup::run_lookup_once(&client, &catalog, &item, &location).await?;
        }
        Commands::Shell => {
            let client = lookup::build_client(&config)?;
            shell::run_shell(&catalog, &client, &config.default_location).await?;
        }
    }

    Ok(())
}
