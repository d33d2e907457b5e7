use crate::error::{ApiError, Result};
use serde::Deserialize;

pub const DEFAULT_LLM_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_LLM_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://openlibrary.org";
pub const DEFAULT_COVERS_BASE_URL: &str = "https://covers.openlibrary.org";

/// Runtime settings, read from `APP_`-prefixed environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub llm_api_key: String,
    pub llm_base_url: String,
    pub llm_model: String,
    pub llm_timeout_secs: u64,
    pub catalog_base_url: String,
    pub covers_base_url: String,
    pub cover_timeout_secs: u64,
}

impl Config {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let settings = config::Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 8080_i64)?
            .set_default("llm_api_key", "")?
            .set_default("llm_base_url", DEFAULT_LLM_BASE_URL)?
            .set_default("llm_model", DEFAULT_LLM_MODEL)?
            .set_default("llm_timeout_secs", 60_i64)?
            .set_default("catalog_base_url", DEFAULT_CATALOG_BASE_URL)?
            .set_default("covers_base_url", DEFAULT_COVERS_BASE_URL)?
            .set_default("cover_timeout_secs", 10_i64)?
            .add_source(config::Environment::with_prefix("APP"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration with defaults for everything except the API key.
    /// Used by tests and by callers that do not read the environment.
    pub fn from_values(llm_api_key: &str) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            llm_api_key: llm_api_key.to_string(),
            llm_base_url: DEFAULT_LLM_BASE_URL.to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_timeout_secs: 60,
            catalog_base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            covers_base_url: DEFAULT_COVERS_BASE_URL.to_string(),
            cover_timeout_secs: 10,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.llm_api_key.trim().is_empty() {
            return Err(ApiError::ConfigError(
                "APP_LLM_API_KEY must be set".to_string(),
            ));
        }
        if self.llm_timeout_secs == 0 || self.cover_timeout_secs == 0 {
            return Err(ApiError::ConfigError(
                "timeouts must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_uses_public_endpoints() {
        let config = Config::from_values("key");
        assert_eq!(config.catalog_base_url, "https://openlibrary.org");
        assert_eq!(config.covers_base_url, "https://covers.openlibrary.org");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_api_key_is_rejected() {
        let config = Config::from_values("   ");
        assert!(matches!(config.validate(), Err(ApiError::ConfigError(_))));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut config = Config::from_values("key");
        config.cover_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
