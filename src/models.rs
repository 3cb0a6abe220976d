//! Plain record types shared across the portal.
//!
//! These mirror the entities of the demo: a product catalog, purchase history,
//! the session user, renewable projects, the government wallet, and
//! manufacturer product submissions. Nothing here is persisted; every record
//! lives for the session only.

use crate::errors::Error;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A catalog product with its declared emission and carbon tax.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Display image URL
    pub image: String,
    pub base_price: f64,
    /// Carbon tax in rupees, declared per unit
    pub carbon_tax: f64,
    pub category: String,
    /// Declared CO2 emission in kg per unit
    pub co2_emission: f64,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub manufacturer_id: Option<String>,
}

/// How a purchase was paid for.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    /// The in-memory token wallet balance on the user record
    #[serde(rename = "Token Wallet")]
    TokenWallet,
    /// Ordinary currency; never touches the wallet balance
    #[serde(rename = "INR")]
    Inr,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenWallet => write!(f, "Token Wallet"),
            Self::Inr => write!(f, "INR"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wallet" | "token wallet" | "token-wallet" => Ok(Self::TokenWallet),
            "inr" => Ok(Self::Inr),
            other => Err(Error::Unrecognized {
                what: "payment method",
                value: other.to_string(),
            }),
        }
    }
}

/// A recorded purchase. Snapshot of product fields at purchase time;
/// never mutated or deleted afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Purchase {
    /// Timestamp-derived id (milliseconds since the epoch)
    pub id: String,
    pub product_name: String,
    pub product_image: String,
    pub base_price: f64,
    pub carbon_tax: f64,
    /// Base price plus carbon tax
    pub total_price: f64,
    pub date: NaiveDate,
    pub payment_method: PaymentMethod,
    /// Placeholder ledger identifier; carries no verifiable meaning
    #[serde(default)]
    pub tx_hash: Option<String>,
    pub co2_emission: f64,
}

/// Account role on the platform.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Consumer,
    Manufacturer,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Consumer => write!(f, "consumer"),
            Self::Manufacturer => write!(f, "manufacturer"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "consumer" => Ok(Self::Consumer),
            "manufacturer" => Ok(Self::Manufacturer),
            "admin" => Ok(Self::Admin),
            other => Err(Error::Unrecognized {
                what: "role",
                value: other.to_string(),
            }),
        }
    }
}

/// The one mutable account per session: wallet balance, running totals,
/// and the purchase history (newest first).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub wallet_balance: f64,
    /// Cumulative carbon tax paid across all purchases
    pub total_tax_paid: f64,
    pub purchase_count: u32,
    #[serde(default)]
    pub purchases: Vec<Purchase>,
}

/// Kind of renewable-energy project.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Solar,
    Wind,
    Hydro,
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solar => write!(f, "solar"),
            Self::Wind => write!(f, "wind"),
            Self::Hydro => write!(f, "hydro"),
        }
    }
}

impl FromStr for ProjectType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "solar" => Ok(Self::Solar),
            "wind" => Ok(Self::Wind),
            "hydro" => Ok(Self::Hydro),
            other => Err(Error::Unrecognized {
                what: "project type",
                value: other.to_string(),
            }),
        }
    }
}

/// Lifecycle status of a renewable-energy project.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Ongoing,
    Completed,
    Planned,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing => write!(f, "ongoing"),
            Self::Completed => write!(f, "completed"),
            Self::Planned => write!(f, "planned"),
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ongoing" => Ok(Self::Ongoing),
            "completed" => Ok(Self::Completed),
            "planned" => Ok(Self::Planned),
            other => Err(Error::Unrecognized {
                what: "project status",
                value: other.to_string(),
            }),
        }
    }
}

/// A renewable-energy project funded from collected tax.
/// Read-only sample data; never mutated by any user action.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RenewableProject {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub amount_invested: f64,
    pub status: ProjectStatus,
    /// Estimated CO2 reduction in tons
    pub co2_reduction_estimate: f64,
    pub fund_source: String,
    pub tx_hash: String,
    pub image: String,
}

/// The government collection wallet shown on the transparency pages.
/// Read-only sample data.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GovernmentWallet {
    pub address: String,
    pub balance: f64,
    pub total_collected: f64,
    pub total_spent: f64,
    pub verified_transactions: u64,
}

/// Review status of a manufacturer product submission.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// A product a manufacturer has submitted for review.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductSubmission {
    pub id: String,
    pub name: String,
    pub category: String,
    pub base_price: f64,
    /// Declared CO2 emission in kg per unit
    pub co2_emission: f64,
    #[serde(default)]
    pub description: String,
    /// Carbon tax per unit at the configured rate
    pub carbon_tax_per_unit: f64,
    pub units_sold: u64,
    /// Cumulative tax generated by sales of this product
    pub carbon_tax_generated: f64,
    pub status: SubmissionStatus,
    pub submitted_date: NaiveDate,
    pub tx_hash: String,
}
