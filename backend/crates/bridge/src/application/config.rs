//! Application Configuration
//!
//! Configuration for the engine bridge. Loaded once at startup and
//! immutable afterwards.

use std::path::PathBuf;
use std::time::Duration;

/// Engine bridge configuration
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Engine runtime binary (e.g. `python3`)
    pub runtime: PathBuf,
    /// Engine entry script passed as the single argument
    pub script: PathBuf,
    /// Working directory for the engine; also exported as `PYTHONPATH`
    /// so the script can locate the rest of the application
    pub app_root: PathBuf,
    /// Hard deadline per engine invocation; the child is killed on expiry
    pub timeout: Duration,
    /// Maximum concurrent engine processes; excess requests queue
    pub max_concurrency: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            runtime: PathBuf::from("python3"),
            script: PathBuf::from("backend/scripts/rag_runner.py"),
            app_root: PathBuf::from("."),
            timeout: Duration::from_secs(120),
            max_concurrency: 4,
        }
    }
}

impl BridgeConfig {
    pub fn timeout_ms(&self) -> i64 {
        self.timeout.as_millis() as i64
    }
}
