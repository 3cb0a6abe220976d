//! Purchase recording - the one state transition of the consumer flow.
//!
//! A purchase snapshots the product, prepends it to the user's history, and
//! bumps the running totals. The wallet balance is debited only for
//! token-wallet payments, and only after the affordability check passes;
//! a failed check rejects the purchase and changes nothing.

use crate::core::ledger;
use crate::errors::{Error, Result};
use crate::models::{PaymentMethod, Product, Purchase, User};
use chrono::{DateTime, Utc};
use tracing::info;

/// Whether the user's wallet covers base price + carbon tax for a product.
#[must_use]
pub fn affordable(user: &User, product: &Product) -> bool {
    user.wallet_balance >= product.base_price + product.carbon_tax
}

/// Records a purchase of `product` against `user`.
///
/// Effects on success:
/// - a purchase record (timestamp-derived id, placeholder tx hash, today's
///   date, total = base + tax) is prepended to `user.purchases`
/// - `total_tax_paid` increases by the product's carbon tax
/// - `purchase_count` increases by one
/// - `wallet_balance` decreases by base + tax, for wallet payments only
///
/// There is no rollback path: once the affordability precondition passes the
/// update always succeeds.
///
/// # Errors
/// [`Error::InsufficientBalance`] for a wallet payment the balance cannot
/// cover; the user is left unchanged.
pub fn record_purchase(
    user: &mut User,
    product: &Product,
    payment_method: PaymentMethod,
    now: DateTime<Utc>,
) -> Result<Purchase> {
    let total_price = product.base_price + product.carbon_tax;

    if payment_method == PaymentMethod::TokenWallet && !affordable(user, product) {
        return Err(Error::InsufficientBalance {
            balance: user.wallet_balance,
            required: total_price,
        });
    }

    let purchase = Purchase {
        id: ledger::purchase_id(now),
        product_name: product.name.clone(),
        product_image: product.image.clone(),
        base_price: product.base_price,
        carbon_tax: product.carbon_tax,
        total_price,
        date: now.date_naive(),
        payment_method,
        tx_hash: Some(ledger::random_tx_hash()),
        co2_emission: product.co2_emission,
    };

    user.purchases.insert(0, purchase.clone());
    user.total_tax_paid += product.carbon_tax;
    user.purchase_count += 1;
    if payment_method == PaymentMethod::TokenWallet {
        user.wallet_balance -= total_price;
    }

    info!(
        product = %product.name,
        method = %payment_method,
        total = total_price,
        "Recorded purchase"
    );
    Ok(purchase)
}
