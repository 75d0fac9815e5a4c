mod args;
mod chain;
mod error;
mod http;
mod log;

pub use args::Args;
pub use chain::{AddressFormat, ChainConfig};
pub use error::ConfigError;
pub use http::HttpConfig;
pub use log::LogConfig;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct FundApiConfig {
    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub chain: ChainConfig,
}

impl FundApiConfig {
    /// Load configuration from FUND_-prefixed environment variables.
    ///
    /// Each section reads its own prefix, e.g. FUND_HTTP_PORT,
    /// FUND_LOG_LEVEL, FUND_CHAIN_CONTRACT_ADDRESS.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            http: envy::prefixed("FUND_HTTP_").from_env::<HttpConfig>()?,
            log: envy::prefixed("FUND_LOG_").from_env::<LogConfig>()?,
            chain: envy::prefixed("FUND_CHAIN_").from_env::<ChainConfig>()?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.http.validate()?;
        self.log.validate()?;
        self.chain.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = FundApiConfig::default();
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.chain.chain_id, "C");
    }

    #[test]
    #[serial]
    fn test_from_env_requires_contract_address() {
        // SAFETY: tests are serialized; no other thread touches the env.
        unsafe {
            std::env::remove_var("FUND_CHAIN_CONTRACT_ADDRESS");
        }
        assert!(FundApiConfig::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_with_contract_address() {
        unsafe {
            std::env::set_var(
                "FUND_CHAIN_CONTRACT_ADDRESS",
                "claw1qqqqqqqqqqqqqpgqkru70vyjyx3t5je4v2ywcjz33xnkfjfws0cszj63m0",
            );
        }
        let config = FundApiConfig::from_env().expect("config should load");
        assert!(config.chain.contract_address.starts_with("claw1"));
        unsafe {
            std::env::remove_var("FUND_CHAIN_CONTRACT_ADDRESS");
        }
    }
}
