pub mod options;

use crate::domain::ports::ProviderConfig;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://v6.exchangerate-api.com/v6";

#[derive(Debug, Clone, Parser)]
#[command(name = "cambio")]
#[command(about = "Interactive currency converter with live exchange rates")]
pub struct CliConfig {
    /// Base URL of the ExchangeRate-API v6 endpoint
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// API key for the quote provider
    #[arg(long, env = "EXCHANGE_RATE_API_KEY", default_value = "b2631255ac4cefb5334dea2f")]
    pub api_key: String,

    /// Request timeout for rate fetches, in seconds
    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    /// How many entries the history view shows
    #[arg(long, default_value = "10")]
    pub history_limit: usize,

    /// TOML file overriding the built-in conversion options
    #[arg(long)]
    pub options_file: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_url", &self.api_url)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_positive_number("timeout_secs", self.timeout_secs as usize, 1)?;
        validate_positive_number("history_limit", self.history_limit, 1)?;
        Ok(())
    }
}

impl ProviderConfig for CliConfig {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: "test-key".to_string(),
            timeout_secs: 10,
            history_limit: 10,
            options_file: None,
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_rejects_blank_api_key() {
        let mut config = base_config();
        config.api_key = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_api_url() {
        let mut config = base_config();
        config.api_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_timeout_and_limit() {
        let mut config = base_config();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.history_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_provider_config_accessors() {
        let config = base_config();
        assert_eq!(ProviderConfig::api_url(&config), DEFAULT_API_URL);
        assert_eq!(ProviderConfig::api_key(&config), "test-key");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }
}
