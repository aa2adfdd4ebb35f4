pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::{Parser, Subcommand, ValueEnum};

/// Used when neither --admin-secret nor ADMIN_PASSWORD is set.
const FALLBACK_ADMIN_SECRET: &str = "ChelsAdmin3621";

#[derive(Debug, Parser)]
#[command(name = "studio-catalog")]
#[command(about = "Pricing catalog manager for the studio website")]
pub struct Cli {
    #[command(flatten)]
    pub config: CliConfig,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Parser)]
pub struct CliConfig {
    #[arg(long, default_value = "./data")]
    pub storage_path: String,

    #[arg(long, default_value = "https://chelsessence.com.au/pricing.json")]
    pub default_catalog_url: String,

    #[arg(
        long,
        default_value = "https://services.leadconnectorhq.com/hooks/joEvTeHi9PfiwLqHNsZY/webhook-trigger/63ac8f27-84ea-4754-9591-14b85407c20f"
    )]
    pub webhook_url: String,

    #[arg(long, help = "Override the admin secret (normally ADMIN_PASSWORD)")]
    pub admin_secret: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn default_catalog_url(&self) -> &str {
        &self.default_catalog_url
    }

    fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    fn storage_path(&self) -> &str {
        &self.storage_path
    }

    fn admin_secret(&self) -> String {
        if let Some(secret) = &self.admin_secret {
            return secret.clone();
        }
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| FALLBACK_ADMIN_SECRET.to_string())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("storage_path", &self.storage_path)?;
        validate_url("default_catalog_url", &self.default_catalog_url)?;
        validate_url("webhook_url", &self.webhook_url)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dir {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Visibility {
    /// Shown on the public menu
    Active,
    /// Kept in the editor but hidden from the public menu
    Hidden,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the public service menu
    Show {
        #[arg(long, help = "Only the leading categories and services, as on the home page")]
        preview: bool,
    },
    /// Write a pretty-printed catalog snapshot to a file
    Export {
        #[arg(long, default_value = "pricing-export.json")]
        output: String,
    },
    /// Open an admin session
    Login { password: String },
    /// Close the admin session
    Logout,
    /// Append a new empty category
    AddCategory,
    /// Rename a category
    RenameCategory { category_id: String, name: String },
    /// Toggle a category's visibility on the public menu
    SetCategoryActive {
        category_id: String,
        visibility: Visibility,
    },
    /// Delete a category and all its services
    DeleteCategory { category_id: String },
    /// Move a category up or down the menu
    MoveCategory { index: usize, direction: Dir },
    /// Append a new blank service to a category
    AddService { category_id: String },
    /// Update fields on a service
    UpdateService {
        category_id: String,
        service_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, help = "Raw price input; non-numeric values coerce to 0")]
        price: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        duration_mins: Option<u32>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a service from a category
    DeleteService {
        category_id: String,
        service_id: String,
    },
    /// Move a service up or down within its category
    MoveService {
        category_id: String,
        index: usize,
        direction: Dir,
    },
    /// Update studio details shown on the site
    SetDetails {
        #[arg(long)]
        currency_symbol: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Send an enquiry through the contact webhook
    Contact {
        name: String,
        phone: String,
        message: String,
    },
}
