//! Configuration management for Lookout services.
//!
//! All Lookout services share a unified configuration file at
//! `~/.lookout/config.json`.
//!
//! # Configuration Priority
//!
//! 1. Explicit config file values
//! 2. Environment variables (LOOKOUT_* prefix)
//! 3. Default values
//!
//! # Environment Variable Mapping
//!
//! - `LOOKOUT_LOG_LEVEL` → observability.log_level
//! - `LOOKOUT_LOG_FORMAT` → observability.log_format
//! - `LOOKOUT_VERIFICATION_THRESHOLD` → verification.threshold

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    directories::UserDirs::new().map_or_else(
        || PathBuf::from(".lookout"),
        |dirs| dirs.home_dir().join(".lookout"),
    )
}

/// Get the configuration file path.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

// ============================================================================
// Observability Configuration
// ============================================================================

/// Logging configuration shared by all services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Base log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format: "json" or "pretty"
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

// ============================================================================
// Verification Configuration
// ============================================================================

/// Weights and threshold for multi-signal identity verification.
///
/// The weights of the default configuration sum to 1.0. Values outside
/// [0.0, 1.0] are clamped by the verification engine, not rejected here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationConfig {
    /// Weight of the logo similarity signal
    #[serde(default = "default_logo_weight")]
    pub logo_weight: f64,

    /// Weight of the domain match signal
    #[serde(default = "default_domain_weight")]
    pub domain_weight: f64,

    /// Weight of the business-context signal
    #[serde(default = "default_context_weight")]
    pub context_weight: f64,

    /// Weight of the LLM verification signal
    #[serde(default = "default_llm_weight")]
    pub llm_weight: f64,

    /// Minimum confidence for an entity to count as verified (inclusive)
    #[serde(default = "default_verification_threshold")]
    pub threshold: f64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            logo_weight: default_logo_weight(),
            domain_weight: default_domain_weight(),
            context_weight: default_context_weight(),
            llm_weight: default_llm_weight(),
            threshold: default_verification_threshold(),
        }
    }
}

fn default_logo_weight() -> f64 {
    0.30
}

fn default_domain_weight() -> f64 {
    0.30
}

fn default_context_weight() -> f64 {
    0.15
}

fn default_llm_weight() -> f64 {
    0.25
}

fn default_verification_threshold() -> f64 {
    0.40
}

// ============================================================================
// Freshness Configuration
// ============================================================================

/// Day windows used to bucket HTTP Last-Modified freshness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreshnessConfig {
    /// Content modified within this many days counts as a positive signal
    #[serde(default = "default_fresh_days")]
    pub fresh_days: i64,

    /// Content modified within this many days counts as a neutral signal;
    /// anything older is negative
    #[serde(default = "default_stale_days")]
    pub stale_days: i64,
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            fresh_days: default_fresh_days(),
            stale_days: default_stale_days(),
        }
    }
}

fn default_fresh_days() -> i64 {
    90
}

fn default_stale_days() -> i64 {
    365
}

// ============================================================================
// Top-level Configuration
// ============================================================================

/// Unified configuration for Lookout services.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Identity verification weights and threshold
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Last-Modified freshness windows
    #[serde(default)]
    pub freshness: FreshnessConfig,
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            tracing::info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Load configuration with environment variable fallbacks.
    pub fn load_with_env() -> Result<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("LOOKOUT_LOG_LEVEL") {
            self.observability.log_level = level;
        }
        if let Ok(format) = std::env::var("LOOKOUT_LOG_FORMAT") {
            self.observability.log_format = format;
        }
        if let Ok(threshold) = std::env::var("LOOKOUT_VERIFICATION_THRESHOLD") {
            if let Ok(t) = threshold.parse() {
                self.verification.threshold = t;
            }
        }
    }

    /// Persist the configuration to the default path.
    pub fn save(&self) -> Result<()> {
        let dir = config_dir();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config dir {}", dir.display()))?;

        let path = config_path();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}
