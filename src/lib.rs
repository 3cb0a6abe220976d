//! `CarbonPortal` - a demo carbon tax management portal
//!
//! This crate implements a demonstration carbon tax platform over in-memory
//! sample data: a product catalog with per-product carbon tax, a session user
//! with a token wallet, renewable-energy projects funded by collected tax, and
//! a government wallet shown for transparency. All "blockchain" identifiers
//! are randomly generated display strings and all authentication is demo-only.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Performance
    clippy::inefficient_to_string,
    clippy::needless_pass_by_value,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Complexity and readability
    clippy::cognitive_complexity,
    clippy::match_same_arms,
    clippy::too_many_lines,

    // Style consistency
    clippy::enum_glob_use,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Configuration management - seed catalog, rates, and admin credentials
pub mod config;
/// Core business logic - tax math, purchases, demo auth, filtering, reports
pub mod core;
/// Unified error types and result handling
pub mod errors;
/// Plain record types shared across the portal
pub mod models;
/// Single-owner application state and page navigation
pub mod session;
/// Interactive shell - the line-based interface over a session
pub mod shell;

#[cfg(test)]
pub mod test_utils;
