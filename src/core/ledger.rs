//! Placeholder ledger identifiers.
//!
//! The portal displays "blockchain" transaction hashes that are randomly
//! generated strings formatted to resemble an abbreviated ledger identifier
//! (`0x12ab34cd...56ef78ab`). They carry no verifiable meaning and are never
//! parsed back. Purchase ids are derived from the wall clock in milliseconds.

use chrono::{DateTime, Utc};
use rand::Rng;

/// Generates a random placeholder transaction hash.
///
/// Format: `0x` + 8 hex digits + `...` + 8 hex digits, mimicking an
/// abbreviated on-chain identifier.
#[must_use]
pub fn random_tx_hash() -> String {
    let mut rng = rand::thread_rng();
    format!("0x{:08x}...{:08x}", rng.r#gen::<u32>(), rng.r#gen::<u32>())
}

/// Derives a purchase id from a timestamp (milliseconds since the epoch).
#[must_use]
pub fn purchase_id(now: DateTime<Utc>) -> String {
    now.timestamp_millis().to_string()
}
