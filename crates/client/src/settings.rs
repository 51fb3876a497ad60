//! Client configuration
//!
//! The only required setting is the backend's base URL; everything
//! else has a sensible default. Settings come from a config file, from
//! `CONFAB_`-prefixed environment variables, or both.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Settings for constructing a [`crate::ConfabClient`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Base URL of the Confab backend, e.g. `https://api.confab.example`
    pub api_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            timeout_secs: 30,
            user_agent: concat!("confab-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientSettings {
    /// Load settings from `CONFAB_`-prefixed environment variables
    /// (`CONFAB_API_URL` is required)
    ///
    /// # Errors
    ///
    /// Returns an error if `CONFAB_API_URL` is unset or a variable
    /// cannot be parsed
    pub fn from_env() -> Result<Self, ClientError> {
        let defaults = Self::default();

        let settings = config::Config::builder()
            .set_default("timeout_secs", defaults.timeout_secs)?
            .set_default("user_agent", defaults.user_agent)?
            .add_source(config::Environment::with_prefix("CONFAB"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load settings from a config file, with environment variables
    /// taking precedence
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ClientError> {
        let defaults = Self::default();

        let settings = config::Config::builder()
            .set_default("timeout_secs", defaults.timeout_secs)?
            .set_default("user_agent", defaults.user_agent)?
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix("CONFAB"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
