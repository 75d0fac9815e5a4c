//! Production [`ContractBackend`] driving the `clawpy` CLI.

use async_trait::async_trait;
use config::ChainConfig;
use num_bigint::BigUint;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use super::{BackendError, CallArg, ContractBackend, SubmitReceipt};

/// Stdout shape of `clawpy contract query`.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(rename = "returnData", default)]
    return_data: Vec<String>,
}

/// Stdout shape of `clawpy contract call --send`. Only the hash matters.
#[derive(Debug, Deserialize)]
struct CallResponse {
    #[serde(rename = "emittedTransactionHash")]
    tx_hash: Option<String>,
}

/// Shells out to `clawpy` with the flags the network tooling expects.
///
/// One instance is shared across all handlers; it holds only borrowed
/// configuration, no connection state.
#[derive(Debug, Clone)]
pub struct ClawpyBackend {
    chain: ChainConfig,
}

impl ClawpyBackend {
    pub fn new(chain: ChainConfig) -> Self {
        Self { chain }
    }

    async fn run(&self, mut cmd: Command) -> Result<std::process::Output, BackendError> {
        let output = cmd.output().await.map_err(BackendError::Spawn)?;
        if !output.status.success() {
            return Err(BackendError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output)
    }
}

#[async_trait]
impl ContractBackend for ClawpyBackend {
    async fn query(&self, function: &str, args: &[CallArg]) -> Result<Vec<String>, BackendError> {
        debug!(function, args = ?args, "contract query");

        let mut cmd = Command::new(&self.chain.clawpy_bin);
        cmd.arg("contract")
            .arg("query")
            .arg(&self.chain.contract_address)
            .arg("--function")
            .arg(function)
            .arg("--proxy")
            .arg(&self.chain.proxy_url);
        for arg in args {
            cmd.arg("--arguments").arg(arg.to_string());
        }

        let output = self.run(cmd).await?;
        let response: QueryResponse = serde_json::from_slice(&output.stdout)
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;
        Ok(response.return_data)
    }

    async fn call(
        &self,
        function: &str,
        args: &[CallArg],
        value: Option<&BigUint>,
    ) -> Result<SubmitReceipt, BackendError> {
        debug!(function, args = ?args, "contract call");

        let value = value.cloned().unwrap_or_default();
        let mut cmd = Command::new(&self.chain.clawpy_bin);
        cmd.arg("contract")
            .arg("call")
            .arg(&self.chain.contract_address)
            .arg("--function")
            .arg(function)
            .arg("--gas-limit")
            .arg(self.chain.gas_limit_call.to_string())
            .arg("--gas-price")
            .arg(self.chain.gas_price.to_string())
            .arg("--value")
            .arg(value.to_string())
            .arg("--recall-nonce")
            .arg("--pem")
            .arg(&self.chain.pem_path)
            .arg("--chain")
            .arg(&self.chain.chain_id)
            .arg("--proxy")
            .arg(&self.chain.proxy_url)
            .arg("--send");
        for arg in args {
            cmd.arg("--arguments").arg(arg.to_string());
        }

        let output = self.run(cmd).await?;
        // Older CLI builds print human-readable text instead of JSON; a
        // missing hash is not a failure, the transaction was still sent.
        let tx_hash = serde_json::from_slice::<CallResponse>(&output.stdout)
            .ok()
            .and_then(|r| r.tx_hash);
        Ok(SubmitReceipt { tx_hash })
    }
}
