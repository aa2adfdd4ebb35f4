pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, Cli, CliConfig};
pub use crate::core::editor;
pub use crate::core::{
    contact::ContactClient, gateway::PersistenceGateway, session::SessionGate, store::CatalogStore,
};
pub use crate::domain::model::{
    Catalog, Category, CategoryPatch, ContactForm, DetailsPatch, MoveDirection, SaveStatus,
    Service, ServicePatch, SessionState,
};
pub use crate::utils::error::{CatalogError, Result};
