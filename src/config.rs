//! Application configuration management.
//!
//! Configuration comes from environment variables, deserialized into a
//! type-safe struct with the `envy` crate.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Loads an optional `.env` file first, then reads the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing (e.g. DATABASE_URL)
    /// or values cannot be parsed into the expected types.
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names map to upper-cased variables: database_url -> DATABASE_URL
        envy::from_env::<Config>()
    }
}
