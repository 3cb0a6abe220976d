//! Configuration management for the portal.
//!
//! The seed catalog (products, projects, government wallet, session user,
//! manufacturer submissions) is loaded from `config.toml`; admin credentials
//! come from environment variables with demo defaults.

/// Admin credential lookup from environment variables
pub mod admin;
/// Seed catalog and rate loading from config.toml
pub mod catalog;

use crate::errors::Result;
use tracing::info;

pub use catalog::{AppConfig, Rates};

/// Loads the full application configuration from the default location.
///
/// # Errors
/// Returns an error if `config.toml` cannot be read or parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let config = catalog::load_default_config()?;
    info!(
        products = config.products.len(),
        projects = config.projects.len(),
        submissions = config.submissions.len(),
        "Loaded seed catalog"
    );
    Ok(config)
}
