pub mod cli;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod protocol;
pub mod registry;
pub mod report;
pub mod similarity;
pub mod telemetry;
pub mod validation;

pub use error::JudgeError;
pub use evaluator::{Evaluator, MatchEvaluator, evaluate, evaluate_all, evaluate_checked, select_best};
pub use model::{Action, Frequency, MaintenancePlan, MaintenanceType};
pub use protocol::{DescriptionMatch, EvaluationResult, Verdict};
