//! Command-line interface built on clap's derive API.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::MatchingConfig;
use crate::model::{Frequency, MaintenanceType};
use crate::similarity::SimilarityMetric;

/// Decides whether a proposed maintenance action is already covered by an
/// existing maintenance plan.
#[derive(Parser, Debug)]
#[command(name = "coverage-judge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate an action against the plan registry (default)
    Evaluate(EvaluateArgs),

    /// List the maintenance plans
    Plans {
        /// JSON file with plans (defaults to the built-in sample set)
        #[arg(long, value_name = "PATH")]
        plans: Option<PathBuf>,
    },

    /// Explain how plans are judged
    Explain,
}

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    /// Action identifier
    #[arg(long, default_value = "A-103")]
    pub id: String,

    /// Action name (free-text description)
    #[arg(long, default_value = "Replace Hydraulic Filter")]
    pub name: String,

    /// Recurrence: "3 months", "6 months" or "12 months"
    #[arg(long, default_value = "6 months")]
    pub frequency: Frequency,

    /// Maintenance type: PDM, CM, PVM or FF
    #[arg(long = "type", default_value = "PDM")]
    pub maintenance_type: MaintenanceType,

    /// Use fuzzy matching for the description
    #[arg(long)]
    pub fuzzy: bool,

    /// Use exact matching even if the config enables fuzzy matching
    #[arg(long, conflicts_with = "fuzzy")]
    pub no_fuzzy: bool,

    /// Similarity metric for fuzzy matching (token_overlap, token_set)
    #[arg(long)]
    pub metric: Option<SimilarityMetric>,

    /// JSON file with plans (defaults to the built-in sample set)
    #[arg(long, value_name = "PATH")]
    pub plans: Option<PathBuf>,
}

impl Default for EvaluateArgs {
    fn default() -> Self {
        Self {
            id: "A-103".to_string(),
            name: "Replace Hydraulic Filter".to_string(),
            frequency: Frequency::SixMonths,
            maintenance_type: MaintenanceType::Pdm,
            fuzzy: false,
            no_fuzzy: false,
            metric: None,
            plans: None,
        }
    }
}

impl EvaluateArgs {
    /// Layers the matching flags over the configured settings.
    pub fn apply(&self, mut matching: MatchingConfig) -> MatchingConfig {
        if self.fuzzy {
            matching = matching.enable_fuzzy();
        }
        if self.no_fuzzy {
            matching = matching.with_fuzzy(false);
        }
        if let Some(metric) = self.metric {
            matching = matching.with_metric(metric);
        }
        matching
    }
}
