//! CSV exports and display formatting.
//!
//! The portal's only "interfaces" are presentation conveniences: a CSV audit
//! trail of purchases for the government wallet page, an admin transaction
//! log, and rupee formatting helpers for the dashboard stat cards.

use crate::models::Purchase;
use chrono::NaiveDate;

/// Header row of the government wallet audit trail export.
pub const AUDIT_CSV_HEADER: &str = "Date,Product,Tax Amount,TX Hash,Status";

/// Renders the audit-trail CSV: the fixed header, then one row per purchase
/// in list order (newest first), every row with status `Verified`.
#[must_use]
pub fn audit_trail_csv(purchases: &[Purchase]) -> String {
    let mut rows = vec![AUDIT_CSV_HEADER.to_string()];
    rows.extend(purchases.iter().map(|p| {
        format!(
            "{},{},{},{},Verified",
            p.date,
            p.product_name,
            p.carbon_tax,
            p.tx_hash.as_deref().unwrap_or_default(),
        )
    }));
    rows.join("\n")
}

/// One row of the admin dashboard's transaction log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Full purchase id; displays abbreviate it via [`LogEntry::short_id`]
    pub id: String,
    /// Synthetic display name derived from the purchase id
    pub user_name: String,
    pub tax_amount: f64,
    pub date: NaiveDate,
    pub purpose: String,
}

impl LogEntry {
    /// Last eight characters of the id, as shown in the log table.
    #[must_use]
    pub fn short_id(&self) -> &str {
        char_suffix(&self.id, 8)
    }
}

/// Last `n` characters of `s`, or all of it when shorter. Slices on a char
/// boundary so ids from the config file are safe whatever they contain.
fn char_suffix(s: &str, n: usize) -> &str {
    s.char_indices()
        .rev()
        .nth(n.saturating_sub(1))
        .map_or(s, |(idx, _)| &s[idx..])
}

/// Maps purchases into admin log rows. The user name is synthesized from the
/// purchase id since the demo has a single anonymous-ish session user.
#[must_use]
pub fn transaction_log(purchases: &[Purchase]) -> Vec<LogEntry> {
    purchases
        .iter()
        .map(|p| LogEntry {
            id: p.id.clone(),
            user_name: format!("User {}", char_suffix(&p.id, 3)),
            tax_amount: p.carbon_tax,
            date: p.date,
            purpose: "Product Purchase Tax".to_string(),
        })
        .collect()
}

/// Renders the admin transaction log as CSV.
#[must_use]
pub fn transaction_log_csv(entries: &[LogEntry]) -> String {
    let mut rows = vec!["ID,User,Tax Amount,Date,Purpose".to_string()];
    rows.extend(entries.iter().map(|e| {
        format!(
            "{},{},{},{},{}",
            e.short_id(),
            e.user_name,
            e.tax_amount,
            e.date,
            e.purpose
        )
    }));
    rows.join("\n")
}

/// Formats a rupee amount in crores for the stat cards, e.g. `₹8.5 Cr`.
#[must_use]
pub fn format_crore(amount: f64) -> String {
    format!("\u{20b9}{:.1} Cr", amount / 10_000_000.0)
}

/// Formats a plain rupee amount, e.g. `₹5000.00`.
#[must_use]
pub fn format_inr(amount: f64) -> String {
    format!("\u{20b9}{amount:.2}")
}
