mod flags;
mod picker;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::flags::FlagsCommands;

#[derive(Debug, Parser)]
#[command(name = "okaeri")]
#[command(about = "Search, filter and pin work locations from the terminal")]
struct Cli {
    /// YAML catalog standing in for the page's location dropdown
    #[arg(long, env = "OKAERI_CATALOG_PATH", default_value = "./catalog.yaml", global = true)]
    catalog: PathBuf,

    /// Page the selector is mounted on (`main` or `modify`)
    #[arg(long, default_value = "main", global = true)]
    surface: okaeri_core::PageSurface,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the picker: current selection, tabs, and the filtered list
    List {
        /// Tab to show: `all`, `favorites`, or a category key
        #[arg(long, default_value = "all")]
        filter: String,

        /// Search text; overrides the tab while non-empty
        #[arg(long)]
        search: Option<String>,
    },
    /// Select a location by value
    Select { value: String },
    /// Add or remove a location from favorites
    Favorite { value: String },
    /// Print the category table
    Categories,
    /// Inspect or change feature flags
    Flags {
        #[command(subcommand)]
        command: FlagsCommands,
    },
}

/// Everything a command needs, built once from [`okaeri_core::AppConfig`].
pub(crate) struct AppContext {
    pub(crate) preferences: okaeri_store::Preferences,
    pub(crate) categories: Arc<okaeri_core::CategoryTable>,
}

impl AppContext {
    fn from_config(config: &okaeri_core::AppConfig) -> anyhow::Result<Self> {
        let store = okaeri_store::JsonFileStore::new(&config.state_path);
        tracing::debug!(
            env = %config.env,
            state_path = %store.path().display(),
            "preference store opened"
        );
        let preferences = okaeri_store::Preferences::new(Arc::new(store), config.keys.clone());
        let categories = match &config.categories_path {
            Some(path) => okaeri_core::load_categories(path)
                .with_context(|| format!("loading categories from {}", path.display()))?,
            None => okaeri_core::CategoryTable::default(),
        };
        Ok(Self {
            preferences,
            categories: Arc::new(categories),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = okaeri_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(matches!(config.env, okaeri_core::Environment::Development))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::from_config(&config)?;

    match cli.command {
        Some(Commands::List { filter, search }) => {
            picker::run_list(&ctx, &cli.catalog, cli.surface, &filter, search.as_deref()).await
        }
        Some(Commands::Select { value }) => {
            picker::run_select(&ctx, &cli.catalog, cli.surface, &value).await
        }
        Some(Commands::Favorite { value }) => {
            picker::run_favorite(&ctx, &cli.catalog, cli.surface, &value).await
        }
        Some(Commands::Categories) => {
            print!("{}", render::render_categories(&ctx.categories));
            Ok(())
        }
        Some(Commands::Flags { command }) => flags::run_flags(&ctx, command).await,
        None => {
            println!("okaeri: no command given; try `okaeri list`");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
