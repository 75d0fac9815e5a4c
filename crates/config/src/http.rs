use crate::ConfigError;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Port to bind the HTTP server to
    ///
    /// Env: FUND_HTTP_PORT
    /// Default: 8080
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host address to bind to
    ///
    /// Env: FUND_HTTP_BIND_HOST
    /// Default: 127.0.0.1
    #[serde(default = "default_bind_host")]
    pub bind_host: String,
}

fn default_port() -> u16 {
    8080
}

fn default_bind_host() -> String {
    "127.0.0.1".to_string()
}

impl HttpConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::ValidateError(
                "HTTP port cannot be 0".to_string(),
            ));
        }

        if self.bind_host.is_empty() {
            return Err(ConfigError::ValidateError(
                "HTTP bind host cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_host: default_bind_host(),
        }
    }
}
