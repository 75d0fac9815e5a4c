use crate::ConfigError;
use serde::Deserialize;

/// How 32-byte public keys are rendered in API responses.
///
/// This is a deployment-wide choice: every address in every response uses
/// the same format. Bech32 is the canonical form; hex exists for tooling
/// that cannot consume bech32. The two are not round-trip compatible, so
/// the format is fixed at startup rather than negotiated per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AddressFormat {
    #[default]
    Bech32,
    Hex,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    /// Bech32 address of the Autonomous Fund contract
    ///
    /// Env: FUND_CHAIN_CONTRACT_ADDRESS
    pub contract_address: String,

    /// Gateway/proxy URL of the Claws network
    ///
    /// Env: FUND_CHAIN_PROXY_URL
    /// Valid schemes: http://, https://
    /// Default: https://api.claws.network
    #[serde(default = "default_proxy_url")]
    pub proxy_url: String,

    /// Chain identifier passed to signed transactions
    ///
    /// Env: FUND_CHAIN_CHAIN_ID
    /// Default: C
    #[serde(default = "default_chain_id")]
    pub chain_id: String,

    /// Path to the wallet PEM used to sign state-changing calls
    ///
    /// Env: FUND_CHAIN_PEM_PATH
    /// Default: ./wallet.pem
    #[serde(default = "default_pem_path")]
    pub pem_path: String,

    /// Gas limit for contract calls
    ///
    /// Env: FUND_CHAIN_GAS_LIMIT_CALL
    /// Default: 10_000_000
    #[serde(default = "default_gas_limit_call")]
    pub gas_limit_call: u64,

    /// Gas price in attoCLAW
    ///
    /// Env: FUND_CHAIN_GAS_PRICE
    /// Default: 20_000_000_000_000
    #[serde(default = "default_gas_price")]
    pub gas_price: u64,

    /// Name or path of the clawpy binary used to reach the chain
    ///
    /// Env: FUND_CHAIN_CLAWPY_BIN
    /// Default: clawpy
    #[serde(default = "default_clawpy_bin")]
    pub clawpy_bin: String,

    /// Address rendering format for API responses
    ///
    /// Env: FUND_CHAIN_ADDRESS_FORMAT
    /// Valid values: bech32, hex
    /// Default: bech32
    #[serde(default)]
    pub address_format: AddressFormat,
}

fn default_proxy_url() -> String {
    "https://api.claws.network".to_string()
}

fn default_chain_id() -> String {
    "C".to_string()
}

fn default_pem_path() -> String {
    "./wallet.pem".to_string()
}

fn default_gas_limit_call() -> u64 {
    10_000_000
}

fn default_gas_price() -> u64 {
    20_000_000_000_000
}

fn default_clawpy_bin() -> String {
    "clawpy".to_string()
}

impl ChainConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.contract_address.is_empty() {
            return Err(ConfigError::ValidateError(
                "Contract address cannot be empty".to_string(),
            ));
        }

        if !self.contract_address.starts_with("claw1") {
            return Err(ConfigError::ValidateError(format!(
                "Contract address '{}' does not look like a claw1... bech32 address",
                self.contract_address
            )));
        }

        Self::validate_url(&self.proxy_url)?;

        if self.gas_limit_call == 0 {
            return Err(ConfigError::ValidateError(
                "Gas limit cannot be 0".to_string(),
            ));
        }

        if self.clawpy_bin.is_empty() {
            return Err(ConfigError::ValidateError(
                "clawpy binary path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_url(url_str: &str) -> Result<(), ConfigError> {
        if url_str.is_empty() {
            return Err(ConfigError::ValidateError(
                "Proxy URL cannot be empty".to_string(),
            ));
        }

        let parsed = url::Url::parse(url_str)
            .map_err(|e| ConfigError::ValidateError(format!("Invalid URL '{}': {}", url_str, e)))?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConfigError::ValidateError(format!(
                "Invalid URL scheme '{}'. Must be http:// or https://",
                scheme
            ))),
        }
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            contract_address: String::new(),
            proxy_url: default_proxy_url(),
            chain_id: default_chain_id(),
            pem_path: default_pem_path(),
            gas_limit_call: default_gas_limit_call(),
            gas_price: default_gas_price(),
            clawpy_bin: default_clawpy_bin(),
            address_format: AddressFormat::Bech32,
        }
    }
}
