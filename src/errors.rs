//! Unified error types for the portal.
//!
//! Every failure a user can trigger is a validation failure that leaves prior
//! state unchanged; there is no retryable I/O beyond reading the seed catalog
//! and writing CSV exports.

use crate::models::Role;
use thiserror::Error;

/// All errors the portal can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Failure reading or parsing configuration.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// A monetary or emission amount that is non-positive or not finite.
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending value
        amount: f64,
    },

    /// Token-wallet purchase attempted with too little balance.
    #[error("Insufficient wallet balance: have \u{20b9}{balance:.2}, need \u{20b9}{required:.2}")]
    InsufficientBalance {
        /// Current wallet balance
        balance: f64,
        /// Base price plus carbon tax of the attempted purchase
        required: f64,
    },

    /// Admin credentials did not match the configured pair.
    #[error("Invalid username or password. Please try again.")]
    InvalidAdminCredentials,

    /// A required form field was left empty.
    #[error("Please fill in all fields: {field} is required")]
    MissingField {
        /// Name of the empty field
        field: String,
    },

    /// Registration passwords do not match.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Registration password below the minimum length.
    #[error("Password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted password length
        min: usize,
    },

    /// The signed-in role may not use this area.
    #[error("Access denied: this area is for {required} accounts")]
    AccessDenied {
        /// Role the area requires
        required: Role,
    },

    /// No product in the catalog with the given id.
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The id that was looked up
        id: String,
    },

    /// A purchase was confirmed with nothing selected.
    #[error("No product selected")]
    NoProductSelected,

    /// Free-form user input that does not name a known value.
    #[error("Unrecognized {what}: {value}")]
    Unrecognized {
        /// What kind of value was expected (page, role, ...)
        what: &'static str,
        /// The input that failed to parse
        value: String,
    },

    /// I/O failure (CSV export, config file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
