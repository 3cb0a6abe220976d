//! Core business logic - framework-agnostic portal operations.
//!
//! Everything in here is a pure function over the record types in
//! [`crate::models`]: tax arithmetic, purchase recording, demo authentication,
//! list filtering and aggregation, manufacturer submissions, and report
//! generation. The session and shell layers compose these; no function here
//! sleeps, prints, or touches the filesystem.

/// Demo authentication - admin check, login, registration, demo users
pub mod auth;
/// Placeholder ledger identifiers - random display hashes and timestamp ids
pub mod ledger;
/// Purchase recording and affordability checks
pub mod purchase;
/// List filtering and dashboard aggregation
pub mod query;
/// CSV exports and display formatting
pub mod report;
/// Manufacturer product submissions
pub mod submission;
/// Carbon tax and GST arithmetic, calculator quotes
pub mod tax;
