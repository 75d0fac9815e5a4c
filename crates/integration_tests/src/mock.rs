//! Mock contract backend for in-process API tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use num_bigint::BigUint;
use server::backend::{BackendError, CallArg, ContractBackend, SubmitReceipt};

/// One recorded write transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub function: String,
    /// Arguments in their CLI text rendering.
    pub args: Vec<String>,
    pub value: Option<String>,
}

/// Backend double with canned query responses and a call recorder.
///
/// Queries answer from a per-function slot table; unknown functions
/// return no slots, matching a view with no stored data. Calls always
/// succeed with a fixed hash unless `fail_calls` is set.
///
/// Clones share the call log, so tests keep a clone for assertions
/// after handing the original to the app state.
#[derive(Default, Clone)]
pub struct MockBackend {
    responses: HashMap<String, Vec<String>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    fail_queries: bool,
    fail_calls: bool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base64 slots returned for one view function.
    pub fn with_query(mut self, function: &str, slots: Vec<String>) -> Self {
        self.responses.insert(function.to_string(), slots);
        self
    }

    /// Make every query fail as if the CLI exited non-zero.
    pub fn failing_queries(mut self) -> Self {
        self.fail_queries = true;
        self
    }

    /// Make every call fail as if the CLI exited non-zero.
    pub fn failing_calls(mut self) -> Self {
        self.fail_calls = true;
        self
    }

    /// Calls recorded so far, in submission order.
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl ContractBackend for MockBackend {
    async fn query(&self, function: &str, _args: &[CallArg]) -> Result<Vec<String>, BackendError> {
        if self.fail_queries {
            return Err(BackendError::Failed {
                status: "exit status: 1".to_string(),
                stderr: "proxy unreachable".to_string(),
            });
        }
        Ok(self.responses.get(function).cloned().unwrap_or_default())
    }

    async fn call(
        &self,
        function: &str,
        args: &[CallArg],
        value: Option<&BigUint>,
    ) -> Result<SubmitReceipt, BackendError> {
        if self.fail_calls {
            return Err(BackendError::Failed {
                status: "exit status: 1".to_string(),
                stderr: "signature rejected".to_string(),
            });
        }
        self.calls.lock().expect("mock lock poisoned").push(RecordedCall {
            function: function.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            value: value.map(|v| v.to_string()),
        });
        Ok(SubmitReceipt {
            tx_hash: Some("c0ffee".to_string()),
        })
    }
}
