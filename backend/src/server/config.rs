//! Environment-driven application configuration.

use tracing::warn;

/// Default bind host when `USERBOARD_HOST` is unset.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default bind port when `USERBOARD_PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;
/// Default database file path when `USERBOARD_DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "users.db";

/// Runtime configuration resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server binds to.
    pub port: u16,
    /// SQLite database file path.
    pub database_url: String,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through an injectable lookup, for tests.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("USERBOARD_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let port = match lookup("USERBOARD_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(value = %raw, error = %e, "invalid USERBOARD_PORT, using default");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let database_url =
            lookup("USERBOARD_DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());

        Self {
            host,
            port,
            database_url,
        }
    }
}
