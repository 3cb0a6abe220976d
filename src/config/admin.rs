//! Admin credential lookup from environment variables.
//!
//! The admin portal is a demo: credentials are a fixed pair compared in plain
//! text. `ADMIN_USERNAME` and `ADMIN_PASSWORD` in the `.env` file override the
//! built-in demo defaults; there is no hashing and no credential store.

/// Default demo username used when `ADMIN_USERNAME` is unset.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
/// Default demo password used when `ADMIN_PASSWORD` is unset.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// The fixed credential pair admin login is checked against.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// Gets the admin credential pair from the environment, falling back to the
/// demo defaults.
#[must_use]
pub fn get_admin_credentials() -> AdminCredentials {
    let username = std::env::var("ADMIN_USERNAME")
        .unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string());
    let password = std::env::var("ADMIN_PASSWORD")
        .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());
    AdminCredentials { username, password }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_not_configured() {
        // This test assumes the env vars aren't set in the test environment
        let creds = get_admin_credentials();
        if std::env::var("ADMIN_USERNAME").is_err() {
            assert_eq!(creds.username, DEFAULT_ADMIN_USERNAME);
        }
        if std::env::var("ADMIN_PASSWORD").is_err() {
            assert_eq!(creds.password, DEFAULT_ADMIN_PASSWORD);
        }
    }
}
