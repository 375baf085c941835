//! Command-line and environment configuration.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use storefront_core::{Field, ProductClient, ProductId, DEFAULT_BASE_URL};

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Browse and edit the demo store catalog")]
pub struct Cli {
    /// Base address of the store API.
    #[arg(long, env = "STOREFRONT_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "STOREFRONT_TIMEOUT_SECS", default_value_t = 15, global = true)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show every product.
    List,
    /// Show one product.
    Show { id: ProductId },
    /// Create a product.
    Create(CreateArgs),
    /// Edit a product; omitted fields keep their current values.
    Edit {
        id: ProductId,
        #[command(flatten)]
        fields: EditArgs,
    },
    /// Delete a product from the listing.
    Delete {
        id: ProductId,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Open the view for a URL path such as `/product/3`.
    Open { path: String },
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub price: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub image: String,
    #[arg(long)]
    pub category: String,
}

#[derive(Debug, Default, Args)]
pub struct EditArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub image: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
}

impl CreateArgs {
    pub fn changes(self) -> Vec<(Field, String)> {
        vec![
            (Field::Title, self.title),
            (Field::Price, self.price),
            (Field::Description, self.description),
            (Field::Image, self.image),
            (Field::Category, self.category),
        ]
    }
}

impl EditArgs {
    pub fn changes(self) -> Vec<(Field, String)> {
        [
            (Field::Title, self.title),
            (Field::Price, self.price),
            (Field::Description, self.description),
            (Field::Image, self.image),
            (Field::Category, self.category),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

/// Resolved settings for the HTTP layer.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            base_url: cli.base_url.clone(),
            timeout: Duration::from_secs(cli.timeout_secs),
        }
    }

    pub fn client(&self) -> ProductClient {
        ProductClient::new(&self.base_url)
    }
}
