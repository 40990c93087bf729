//! Engine Client
//!
//! Turns an authenticated chat prompt into one child-process invocation
//! of the reasoning engine and maps the process outcome back onto the
//! bridge error taxonomy.

use std::process::Stdio;
use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::sync::Semaphore;
use tokio::time::timeout;

use crate::application::config::BridgeConfig;
use crate::error::{BridgeError, BridgeResult, truncate_detail};

/// Client for the external reasoning engine
///
/// Cheap to clone; the semaphore bounding concurrent engine processes
/// is shared across clones.
#[derive(Clone)]
pub struct EngineClient {
    config: Arc<BridgeConfig>,
    permits: Arc<Semaphore>,
}

impl EngineClient {
    pub fn new(config: Arc<BridgeConfig>) -> Self {
        let permits = Arc::new(Semaphore::new(config.max_concurrency.max(1)));
        Self { config, permits }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Dispatch a prompt to the engine and return its JSON payload verbatim
    ///
    /// One prompt maps to at most one process invocation; nothing is
    /// retried here. The payload shape is not interpreted beyond
    /// "valid JSON".
    pub async fn dispatch(&self, prompt: &str) -> BridgeResult<serde_json::Value> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            // No process is started for an empty prompt
            return Err(BridgeError::MissingPrompt);
        }

        // Backpressure: wait for a free engine slot instead of spawning
        // one process per in-flight request
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| BridgeError::Internal("engine semaphore closed".to_string()))?;

        let request = serde_json::json!({ "prompt": prompt });
        let payload = request.to_string();

        tracing::debug!(
            runtime = %self.config.runtime.display(),
            script = %self.config.script.display(),
            prompt_len = prompt.len(),
            "Spawning engine process"
        );

        let mut child = Command::new(&self.config.runtime)
            .arg(&self.config.script)
            .current_dir(&self.config.app_root)
            .env("PYTHONPATH", &self.config.app_root)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(BridgeError::SpawnFailed)?;

        // Write the single request object, then close stdin to signal
        // end-of-input to the engine
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(payload.as_bytes())
                .await
                .map_err(BridgeError::SpawnFailed)?;
            drop(stdin);
        }

        // wait_with_output drains stdout and stderr concurrently with
        // waiting for exit; a full pipe buffer cannot deadlock us.
        // On deadline expiry the future (and child) is dropped, and
        // kill_on_drop terminates the process.
        let output = match timeout(self.config.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(BridgeError::SpawnFailed)?,
            Err(_) => {
                tracing::error!(
                    timeout_ms = self.config.timeout_ms(),
                    "Engine process exceeded its deadline, killed"
                );
                return Err(BridgeError::EngineTimeout);
            }
        };

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            tracing::error!(
                exit = ?output.status.code(),
                stderr = %stderr,
                "Engine process failed"
            );
            return Err(BridgeError::EngineFailed {
                details: truncate_detail(&stderr),
            });
        }

        match serde_json::from_slice::<serde_json::Value>(&output.stdout) {
            Ok(value) => {
                tracing::info!(prompt_len = prompt.len(), "Engine dispatch completed");
                Ok(value)
            }
            Err(e) => {
                // Exit 0 with unparsable stdout is a contract violation
                // by the engine, not an engine-internal error
                tracing::error!(error = %e, stderr = %stderr, "Engine emitted invalid JSON");
                Err(BridgeError::BadEngineResponse {
                    details: truncate_detail(&stderr),
                })
            }
        }
    }
}
