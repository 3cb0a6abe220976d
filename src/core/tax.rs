//! Carbon tax and GST arithmetic, and the calculator quote.
//!
//! The glossary rule of the platform: carbon tax is a per-product surcharge
//! proportional to declared CO2 emission, at a fixed rate per kg. The
//! calculator additionally applies GST on the base price, which purchases do
//! not (a purchase total is base price + carbon tax only).

use crate::core::ledger;
use crate::models::Product;

/// Carbon tax for an emission at the configured rate (rupees per kg).
#[must_use]
pub fn carbon_tax_for(co2_emission_kg: f64, rate_per_kg: f64) -> f64 {
    co2_emission_kg * rate_per_kg
}

/// GST on a base price at the configured rate.
#[must_use]
pub fn gst_for(base_price: f64, gst_rate: f64) -> f64 {
    base_price * gst_rate
}

/// A calculator quote for a single product.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxQuote {
    /// Declared CO2 emission in kg
    pub co2_emitted: f64,
    pub base_price: f64,
    pub gst: f64,
    /// Carbon tax as declared on the product
    pub carbon_tax: f64,
    /// Base price + GST + carbon tax
    pub total_price: f64,
    /// Placeholder ledger identifier attached to the quote
    pub tx_hash: String,
}

/// Builds a calculator quote for a product.
///
/// The quote reuses the tax declared on the product rather than recomputing
/// it, so a catalog entry with a hand-tuned tax quotes exactly what the
/// products page shows.
#[must_use]
pub fn quote_product(product: &Product, gst_rate: f64) -> TaxQuote {
    let gst = gst_for(product.base_price, gst_rate);
    TaxQuote {
        co2_emitted: product.co2_emission,
        base_price: product.base_price,
        gst,
        carbon_tax: product.carbon_tax,
        total_price: product.base_price + gst + product.carbon_tax,
        tx_hash: ledger::random_tx_hash(),
    }
}

/// Filters the catalog down to one category for the calculator's product
/// picker. An empty category selection yields an empty list, matching the
/// calculator's "nothing selected yet" state.
#[must_use]
pub fn products_in_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    if category.is_empty() {
        return Vec::new();
    }
    products.iter().filter(|p| p.category == category).collect()
}
