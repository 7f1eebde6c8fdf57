//! Client configuration

use serde::Deserialize;

use core_kernel::Timezone;
use domain_invoicing::DEFAULT_DUE_SOON_DAYS;

/// Client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the invoicing API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// File path holding the persisted bearer token
    pub token_path: String,
    /// Forward window for the due-soon list, in days
    pub due_soon_days: u32,
    /// Business timezone anchoring "today" for overdue comparisons
    pub timezone: Timezone,
    /// Log level
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000/api".to_string(),
            timeout_secs: 30,
            token_path: ".invoice-token".to_string(),
            due_soon_days: DEFAULT_DUE_SOON_DAYS,
            timezone: Timezone::default(),
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from `INVOICE_`-prefixed environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("INVOICE"))
            .build()?
            .try_deserialize()
    }
}
