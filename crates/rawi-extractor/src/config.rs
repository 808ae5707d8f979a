//! Configuration for the extraction protocol

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the extraction protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum time for a single generation call (seconds)
    pub generation_timeout_secs: u64,

    /// Characters of section content embedded in the fallback prompt
    pub fallback_excerpt_chars: usize,
}

impl ExtractorConfig {
    /// Get the generation timeout as a Duration
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.generation_timeout_secs == 0 {
            return Err("generation_timeout_secs must be greater than 0".to_string());
        }
        if self.fallback_excerpt_chars == 0 {
            return Err("fallback_excerpt_chars must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            generation_timeout_secs: 120,
            fallback_excerpt_chars: 500,
        }
    }
}
