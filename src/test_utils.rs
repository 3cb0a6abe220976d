//! Shared test fixtures.
//!
//! Builders mirroring the demo seed data, so unit tests do not depend on
//! config.toml being present or unchanged.

use crate::config::{AppConfig, Rates};
use crate::models::{
    GovernmentWallet, PaymentMethod, Product, ProductSubmission, ProjectStatus, ProjectType,
    Purchase, RenewableProject, Role, SubmissionStatus, User,
};
use crate::session::Session;
use chrono::NaiveDate;

fn product(
    id: &str,
    name: &str,
    base_price: f64,
    carbon_tax: f64,
    category: &str,
    co2: f64,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        image: format!("https://example.com/{id}.jpg"),
        base_price,
        carbon_tax,
        category: category.to_string(),
        co2_emission: co2,
        brand: None,
        model: None,
        manufacturer_id: Some(format!("mfg_{id:0>3}")),
    }
}

/// The six-product demo catalog. Carbon tax is emission x ₹20/kg throughout.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        product("1", "Eco-Friendly Laptop", 50000.0, 2500.0, "Electronics", 125.0),
        product("2", "Solar Power Bank", 3000.0, 150.0, "Electronics", 7.5),
        product("3", "Organic Cotton T-Shirt", 800.0, 40.0, "Clothing", 2.0),
        product("4", "Bamboo Phone Case", 500.0, 25.0, "Accessories", 1.25),
        product("5", "Recycled Paper Notebook", 200.0, 10.0, "Stationery", 0.5),
        product("6", "LED Smart Bulb", 1200.0, 60.0, "Electronics", 3.0),
    ]
}

/// The demo session user with an empty history and the standard balances.
#[must_use]
pub fn sample_user() -> User {
    User {
        id: "1".to_string(),
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        role: Role::Consumer,
        wallet_balance: 5000.0,
        total_tax_paid: 1250.0,
        purchase_count: 8,
        purchases: Vec::new(),
    }
}

/// A purchase record for a named product on a given ISO date.
///
/// # Panics
/// Panics on an invalid date string; fixtures use literals.
#[must_use]
pub fn sample_purchase(product_name: &str, date: &str) -> Purchase {
    #[allow(clippy::unwrap_used)]
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    Purchase {
        id: "1705312345678".to_string(),
        product_name: product_name.to_string(),
        product_image: "https://example.com/p.jpg".to_string(),
        base_price: 1000.0,
        carbon_tax: 100.0,
        total_price: 1100.0,
        date,
        payment_method: PaymentMethod::Inr,
        tx_hash: Some("0x1234abcd...5678ef90".to_string()),
        co2_emission: 5.0,
    }
}

fn renewable_project(
    id: &str,
    name: &str,
    location: &str,
    project_type: ProjectType,
    amount: f64,
    status: ProjectStatus,
    co2: f64,
) -> RenewableProject {
    RenewableProject {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        project_type,
        amount_invested: amount,
        status,
        co2_reduction_estimate: co2,
        fund_source: "Carbon Tax Collection".to_string(),
        tx_hash: "0xabc123...def456".to_string(),
        image: format!("https://example.com/project-{id}.jpg"),
    }
}

/// The three demo renewable projects (solar/ongoing, wind/completed,
/// hydro/planned).
#[must_use]
pub fn sample_projects() -> Vec<RenewableProject> {
    vec![
        renewable_project(
            "1",
            "Solar Plant in Tamil Nadu",
            "Tamil Nadu, India",
            ProjectType::Solar,
            30_000_000.0,
            ProjectStatus::Ongoing,
            5000.0,
        ),
        renewable_project(
            "2",
            "Wind Farm in Gujarat",
            "Gujarat, India",
            ProjectType::Wind,
            45_000_000.0,
            ProjectStatus::Completed,
            8000.0,
        ),
        renewable_project(
            "3",
            "Hydro Power Plant in Kerala",
            "Kerala, India",
            ProjectType::Hydro,
            25_000_000.0,
            ProjectStatus::Planned,
            3500.0,
        ),
    ]
}

/// The demo government wallet.
#[must_use]
pub fn sample_wallet() -> GovernmentWallet {
    GovernmentWallet {
        address: "0x742d35Cc9570C4669b85B5B65fF045f1F5e6B5a8".to_string(),
        balance: 125_000_000.0,
        total_collected: 85_000_000.0,
        total_spent: 60_000_000.0,
        verified_transactions: 1247,
    }
}

fn submission(
    id: &str,
    name: &str,
    units_sold: u64,
    tax_generated: f64,
    status: SubmissionStatus,
) -> ProductSubmission {
    #[allow(clippy::unwrap_used)]
    let submitted_date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    ProductSubmission {
        id: id.to_string(),
        name: name.to_string(),
        category: "Electronics".to_string(),
        base_price: 10_000.0,
        co2_emission: 50.0,
        description: String::new(),
        carbon_tax_per_unit: 1000.0,
        units_sold,
        carbon_tax_generated: tax_generated,
        status,
        submitted_date,
        tx_hash: "0xabc123...def456".to_string(),
    }
}

/// Seed manufacturer submissions: two approved with sales, one pending.
#[must_use]
pub fn sample_submissions() -> Vec<ProductSubmission> {
    vec![
        submission("1", "Eco-Friendly Laptop", 2500, 312_500.0, SubmissionStatus::Approved),
        submission("2", "Solar Power Bank", 5000, 37_500.0, SubmissionStatus::Approved),
        submission("3", "Green Smartphone", 0, 0.0, SubmissionStatus::Pending),
    ]
}

/// A fully seeded session for state-transition tests, with an empty
/// submissions list so submission tests control their own contents.
#[must_use]
pub fn test_session() -> Session {
    let config = AppConfig {
        rates: Rates::default(),
        products: sample_products(),
        projects: sample_projects(),
        government_wallet: sample_wallet(),
        session_user: sample_user(),
        submissions: Vec::new(),
    };
    Session::new(&config)
}
