//! Seed catalog loading from config.toml
//!
//! This module loads the demo sample data the portal runs on: the product
//! catalog, renewable projects, the government wallet, the session user, and
//! manufacturer submissions, plus the tax and GST rates. The data seeds the
//! in-memory session at startup, the way a database seed would.

use crate::errors::{Error, Result};
use crate::models::{GovernmentWallet, Product, ProductSubmission, RenewableProject, User};
use serde::Deserialize;
use std::path::Path;

/// Tunable rates applied across the portal.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Rates {
    /// Carbon tax in rupees per kg of CO2 equivalent
    #[serde(default = "default_tax_per_kg")]
    pub tax_per_kg: f64,
    /// GST applied on the base price in the calculator quote
    #[serde(default = "default_gst")]
    pub gst: f64,
}

const fn default_tax_per_kg() -> f64 {
    20.0
}

const fn default_gst() -> f64 {
    0.18
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            tax_per_kg: default_tax_per_kg(),
            gst: default_gst(),
        }
    }
}

/// Configuration structure representing the entire config.toml file.
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Tax and GST rates
    #[serde(default)]
    pub rates: Rates,
    /// Product catalog shown on the products page
    pub products: Vec<Product>,
    /// Renewable-energy projects shown on the projects page
    pub projects: Vec<RenewableProject>,
    /// The government collection wallet
    pub government_wallet: GovernmentWallet,
    /// The session user, including any seed purchase history
    pub session_user: User,
    /// Seed manufacturer submissions
    #[serde(default)]
    pub submissions: Vec<ProductSubmission>,
}

/// Loads the seed catalog from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the seed catalog from the default location (./config.toml).
pub fn load_default_config() -> Result<AppConfig> {
    load_config("config.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::models::{PaymentMethod, ProjectStatus, ProjectType, Role};

    const SAMPLE: &str = r#"
        [rates]
        tax_per_kg = 20.0
        gst = 0.18

        [[products]]
        id = "1"
        name = "Eco-Friendly Laptop"
        image = "https://example.com/laptop.jpg"
        base_price = 50000.0
        carbon_tax = 2500.0
        category = "Electronics"
        co2_emission = 125.0
        brand = "EcoTech"

        [[projects]]
        id = "1"
        name = "Solar Plant in Tamil Nadu"
        location = "Tamil Nadu, India"
        type = "solar"
        amount_invested = 30000000.0
        status = "ongoing"
        co2_reduction_estimate = 5000.0
        fund_source = "Carbon Tax Collection Q1 2024"
        tx_hash = "0xabc123...def456"
        image = "https://example.com/solar.jpg"

        [government_wallet]
        address = "0x742d35Cc9570C4669b85B5B65fF045f1F5e6B5a8"
        balance = 125000000.0
        total_collected = 85000000.0
        total_spent = 60000000.0
        verified_transactions = 1247

        [session_user]
        id = "1"
        name = "John Doe"
        email = "john@example.com"
        role = "consumer"
        wallet_balance = 5000.0
        total_tax_paid = 1250.0
        purchase_count = 8

        [[session_user.purchases]]
        id = "1"
        product_name = "Eco-Friendly Laptop"
        product_image = "https://example.com/laptop.jpg"
        base_price = 50000.0
        carbon_tax = 2500.0
        total_price = 52500.0
        date = "2024-01-15"
        payment_method = "Token Wallet"
        tx_hash = "0x1234...abcd"
        co2_emission = 125.0
    "#;

    #[test]
    fn test_parse_sample_catalog() {
        let config: AppConfig = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.rates.tax_per_kg, 20.0);
        assert_eq!(config.products.len(), 1);
        assert_eq!(config.products[0].name, "Eco-Friendly Laptop");
        assert_eq!(config.products[0].brand.as_deref(), Some("EcoTech"));
        assert!(config.products[0].manufacturer_id.is_none());

        assert_eq!(config.projects[0].project_type, ProjectType::Solar);
        assert_eq!(config.projects[0].status, ProjectStatus::Ongoing);

        assert_eq!(config.session_user.role, Role::Consumer);
        assert_eq!(config.session_user.purchases.len(), 1);
        assert_eq!(
            config.session_user.purchases[0].payment_method,
            PaymentMethod::TokenWallet
        );
        assert_eq!(config.government_wallet.verified_transactions, 1247);
        assert!(config.submissions.is_empty());
    }

    #[test]
    fn test_rates_default_when_absent() {
        let trimmed = SAMPLE.replace("[rates]", "[rates_unused]");
        // rename leaves an unknown table, which toml ignores by default
        let config: AppConfig = toml::from_str(&trimmed).unwrap();
        assert_eq!(config.rates.tax_per_kg, 20.0);
        assert_eq!(config.rates.gst, 0.18);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = load_config("definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
