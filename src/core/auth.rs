//! Demo authentication.
//!
//! There is no server and no credential store. Admin login compares against
//! the configured fixed pair; user login accepts any non-empty email and
//! password and fabricates a consumer account client-side; registration
//! validates the form and fabricates an account with the chosen role. By
//! construction every input that passes the emptiness and length checks
//! succeeds.

use crate::config::admin::AdminCredentials;
use crate::core::ledger;
use crate::errors::{Error, Result};
use crate::models::{Role, User};
use chrono::Utc;
use tracing::{info, warn};

/// Minimum accepted registration password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Wallet balance a fabricated consumer account starts with.
pub const CONSUMER_STARTING_BALANCE: f64 = 5000.0;

/// Checks a typed username/password against the configured admin pair.
///
/// # Errors
/// [`Error::InvalidAdminCredentials`] on any mismatch. No lockout, no retry
/// accounting.
pub fn verify_admin(username: &str, password: &str, creds: &AdminCredentials) -> Result<()> {
    if username == creds.username && password == creds.password {
        info!("Admin login successful");
        Ok(())
    } else {
        warn!(username, "Admin login rejected");
        Err(Error::InvalidAdminCredentials)
    }
}

/// Demo login: any non-empty email and password fabricates a consumer user
/// named after the email's local part, with the standard demo balances.
///
/// # Errors
/// [`Error::MissingField`] if either field is empty.
pub fn login_user(email: &str, password: &str) -> Result<User> {
    if email.is_empty() {
        return Err(Error::MissingField {
            field: "email".to_string(),
        });
    }
    if password.is_empty() {
        return Err(Error::MissingField {
            field: "password".to_string(),
        });
    }

    let name = email.split('@').next().unwrap_or(email).to_string();
    info!(email, "User login");
    Ok(User {
        id: ledger::purchase_id(Utc::now()),
        name,
        email: email.to_string(),
        role: Role::Consumer,
        wallet_balance: CONSUMER_STARTING_BALANCE,
        total_tax_paid: 1250.0,
        purchase_count: 8,
        purchases: Vec::new(),
    })
}

/// A filled-in registration form.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

/// Demo registration: validates the form and fabricates an account.
///
/// Consumers start with the demo wallet balance; other roles start at zero.
/// Counters start at zero and the purchase list empty.
///
/// # Errors
/// - [`Error::MissingField`] for any empty field
/// - [`Error::PasswordMismatch`] if the passwords differ
/// - [`Error::PasswordTooShort`] below [`MIN_PASSWORD_LEN`]
///
/// No user is created on any of these.
pub fn register_user(form: &RegistrationForm) -> Result<User> {
    for (field, value) in [
        ("name", &form.name),
        ("email", &form.email),
        ("password", &form.password),
    ] {
        if value.is_empty() {
            return Err(Error::MissingField {
                field: field.to_string(),
            });
        }
    }

    if form.password != form.confirm_password {
        return Err(Error::PasswordMismatch);
    }

    if form.password.len() < MIN_PASSWORD_LEN {
        return Err(Error::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }

    let wallet_balance = if form.role == Role::Consumer {
        CONSUMER_STARTING_BALANCE
    } else {
        0.0
    };

    info!(email = %form.email, role = %form.role, "User registered");
    Ok(User {
        id: ledger::purchase_id(Utc::now()),
        name: form.name.clone(),
        email: form.email.clone(),
        role: form.role,
        wallet_balance,
        total_tax_paid: 0.0,
        purchase_count: 0,
        purchases: Vec::new(),
    })
}

/// One-click demo account for a role, as offered on the authentication page.
#[must_use]
pub fn demo_user(role: Role) -> User {
    let (id, name, email, balance, tax_paid, count) = match role {
        Role::Consumer => (
            "demo_consumer",
            "Demo Consumer",
            "consumer@demo.com",
            CONSUMER_STARTING_BALANCE,
            1250.0,
            8,
        ),
        Role::Manufacturer => (
            "demo_manufacturer",
            "Demo Manufacturer",
            "manufacturer@demo.com",
            0.0,
            0.0,
            0,
        ),
        Role::Admin => ("demo_admin", "Demo Admin", "admin@demo.com", 0.0, 0.0, 0),
    };

    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        wallet_balance: balance,
        total_tax_paid: tax_paid,
        purchase_count: count,
        purchases: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    fn demo_creds() -> AdminCredentials {
        AdminCredentials {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }

    #[test]
    fn test_admin_login_exact_pair_only() {
        let creds = demo_creds();

        assert!(verify_admin("admin", "admin123", &creds).is_ok());

        for (u, p) in [
            ("admin", "wrong"),
            ("root", "admin123"),
            ("", ""),
            ("Admin", "admin123"), // case-sensitive
            ("admin", "admin123 "),
        ] {
            let err = verify_admin(u, p, &creds).unwrap_err();
            assert!(matches!(err, Error::InvalidAdminCredentials));
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert!(matches!(
            login_user("", "secret").unwrap_err(),
            Error::MissingField { .. }
        ));
        assert!(matches!(
            login_user("a@b.com", "").unwrap_err(),
            Error::MissingField { .. }
        ));
    }

    #[test]
    fn test_login_fabricates_consumer_from_email() {
        let user = login_user("jane@example.com", "hunter2").unwrap();
        assert_eq!(user.name, "jane");
        assert_eq!(user.role, Role::Consumer);
        assert_eq!(user.wallet_balance, CONSUMER_STARTING_BALANCE);
        assert!(user.purchases.is_empty());
    }

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            role: Role::Consumer,
        }
    }

    #[test]
    fn test_register_mismatched_passwords_rejected() {
        let mut form = valid_form();
        form.confirm_password = "different".to_string();
        assert!(matches!(
            register_user(&form).unwrap_err(),
            Error::PasswordMismatch
        ));
    }

    #[test]
    fn test_register_short_password_rejected() {
        let mut form = valid_form();
        form.password = "abc".to_string();
        form.confirm_password = "abc".to_string();
        assert!(matches!(
            register_user(&form).unwrap_err(),
            Error::PasswordTooShort { min: MIN_PASSWORD_LEN }
        ));
    }

    #[test]
    fn test_register_empty_field_rejected() {
        let mut form = valid_form();
        form.email = String::new();
        assert!(matches!(
            register_user(&form).unwrap_err(),
            Error::MissingField { .. }
        ));
    }

    #[test]
    fn test_register_role_determines_starting_balance() {
        let consumer = register_user(&valid_form()).unwrap();
        assert_eq!(consumer.wallet_balance, CONSUMER_STARTING_BALANCE);
        assert_eq!(consumer.purchase_count, 0);
        assert_eq!(consumer.total_tax_paid, 0.0);

        let mut form = valid_form();
        form.role = Role::Manufacturer;
        let manufacturer = register_user(&form).unwrap();
        assert_eq!(manufacturer.wallet_balance, 0.0);
    }

    #[test]
    fn test_demo_users() {
        let consumer = demo_user(Role::Consumer);
        assert_eq!(consumer.wallet_balance, CONSUMER_STARTING_BALANCE);
        let admin = demo_user(Role::Admin);
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.wallet_balance, 0.0);
    }
}
