//! Configuration management
//!
//! Settings are read from a TOML file. Every section and key is optional and
//! falls back to the defaults below, so an empty file is a valid config.
//!
//! ```toml
//! [matching]
//! use_fuzzy = false
//! metric = "token_overlap"
//! match_threshold = 90
//! partial_threshold = 60
//!
//! [logging]
//! level = "info"
//! json = false
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::JudgeError;
use crate::similarity::SimilarityMetric;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JudgeConfig {
    #[serde(default)]
    pub matching: MatchingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings handed to the evaluator at call time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Compare descriptions by token similarity instead of equality/containment
    #[serde(default)]
    pub use_fuzzy: bool,

    #[serde(default)]
    pub metric: SimilarityMetric,

    /// Ratio at or above which a fuzzy description counts as a Match
    #[serde(default = "default_match_threshold")]
    pub match_threshold: u8,

    /// Ratio at or above which a fuzzy description counts as Partial
    #[serde(default = "default_partial_threshold")]
    pub partial_threshold: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_match_threshold() -> u8 {
    90
}

fn default_partial_threshold() -> u8 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            use_fuzzy: false,
            metric: SimilarityMetric::default(),
            match_threshold: default_match_threshold(),
            partial_threshold: default_partial_threshold(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl MatchingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable_fuzzy(mut self) -> Self {
        self.use_fuzzy = true;
        self
    }

    pub fn with_fuzzy(mut self, use_fuzzy: bool) -> Self {
        self.use_fuzzy = use_fuzzy;
        self
    }

    pub fn with_metric(mut self, metric: SimilarityMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_thresholds(mut self, match_threshold: u8, partial_threshold: u8) -> Self {
        self.match_threshold = match_threshold;
        self.partial_threshold = partial_threshold;
        self
    }

    pub fn validate(&self) -> Result<(), JudgeError> {
        if self.match_threshold > 100 {
            return Err(JudgeError::Config(format!(
                "match_threshold must be at most 100, got {}",
                self.match_threshold
            )));
        }
        if self.partial_threshold > self.match_threshold {
            return Err(JudgeError::Config(format!(
                "partial_threshold ({}) must not exceed match_threshold ({})",
                self.partial_threshold, self.match_threshold
            )));
        }
        Ok(())
    }
}

impl JudgeConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, JudgeError> {
        let config: JudgeConfig = toml::from_str(content)
            .map_err(|e| JudgeError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a config file from disk.
    pub fn load(path: &Path) -> Result<Self, JudgeError> {
        let content = fs::read_to_string(path).map_err(|e| JudgeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, JudgeError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), JudgeError> {
        self.matching.validate()
    }

    pub fn to_toml_string(&self) -> Result<String, JudgeError> {
        toml::to_string(self)
            .map_err(|e| JudgeError::Config(format!("Failed to serialize config: {}", e)))
    }
}
