// src/config.rs

//! Client configuration.

use crate::errors::{ClientError, Result};
use crate::{DEFAULT_CONFIRM_TIMEOUT_MS, DEFAULT_POLL_INTERVAL_MS};
use ember_core::GasParams;
use serde::{Deserialize, Serialize};

/// Complete client configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Chain id submitted with every transaction
    pub chain_id: u8,

    /// Gas parameters applied to every transaction
    pub gas: GasParams,

    /// Seconds added to the current time for the expiration timestamp
    pub expiration_secs: u64,

    /// Upper bound on the confirmation wait per submission
    pub confirm_timeout_ms: u64,

    /// Fixed interval between confirmation polls; short relative to the
    /// timeout
    pub poll_interval_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            chain_id: 4,
            gas: GasParams {
                max_gas_amount: 2000,
                gas_unit_price: 100,
            },
            expiration_secs: 600,
            confirm_timeout_ms: DEFAULT_CONFIRM_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from file
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("Failed to read config: {}", e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| ClientError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Saves configuration to file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ClientError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)
            .map_err(|e| ClientError::Config(format!("Failed to write config: {}", e)))?;
        Ok(())
    }
}
