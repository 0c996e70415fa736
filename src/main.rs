use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use coverage_judge::cli::{Cli, Command, EvaluateArgs};
use coverage_judge::config::JudgeConfig;
use coverage_judge::error::JudgeError;
use coverage_judge::evaluator::MatchEvaluator;
use coverage_judge::model::Action;
use coverage_judge::registry::PlanRegistry;
use coverage_judge::report::{self, EvaluationReport};
use coverage_judge::telemetry;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            match e.downcast_ref::<JudgeError>() {
                Some(judge) => {
                    eprintln!("{} {}", "hint:".yellow(), judge.user_hint());
                    if judge.is_recoverable() {
                        ExitCode::FAILURE
                    } else {
                        ExitCode::from(2)
                    }
                }
                None => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = JudgeConfig::load_or_default(cli.config.as_deref())?;
    if let Some(level) = cli.log {
        config.logging.level = level;
    }
    telemetry::init_telemetry(&config.logging);

    if cli.json {
        colored::control::set_override(false);
    }

    match cli.command.unwrap_or(Command::Evaluate(EvaluateArgs::default())) {
        Command::Evaluate(args) => {
            let registry = load_registry(args.plans.as_deref())?;

            if registry.is_empty() {
                tracing::warn!("Plan registry is empty, nothing can cover the action");
            }

            let matching = args.apply(config.matching.clone());
            matching.validate()?;

            let action = Action::new(&args.id, &args.name, args.frequency, args.maintenance_type);
            let evaluator = MatchEvaluator::new(matching);
            let results = evaluator.evaluate_all(registry.plans(), &action)?;
            let report = EvaluationReport::new(action, registry.plans().to_vec(), results);

            if cli.json {
                print_json(&report)?;
            } else {
                println!("{}", report.render());
            }
        }
        Command::Plans { plans } => {
            let registry = load_registry(plans.as_deref())?;
            if cli.json {
                print_json(registry.plans())?;
            } else {
                println!("{}", report::render_plans(registry.plans()));
            }
        }
        Command::Explain => println!("{}", report::explanation(&config.matching)),
    }

    Ok(())
}

fn load_registry(path: Option<&std::path::Path>) -> Result<PlanRegistry, JudgeError> {
    match path {
        Some(path) => PlanRegistry::from_json_file(path),
        None => Ok(PlanRegistry::sample()),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
