//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::process;

use clap::Parser;

use crate::{
    config::StoutConfig,
    logging::{init_logging, LoggingConfig},
    registry::{register, shared_registry, ValidatorRegistry},
    state::StateSet,
    syntax::{parse_clauses, parse_descriptor},
    validators::{evaluate, HintValidator, Validator},
    StoutError,
};

pub mod args;
pub mod output;

use args::{Command, StoutArgs};
use output::{color_choice, print_error, print_list};

/// The main entry point for the CLI.
pub fn run() {
    let args = StoutArgs::parse();

    let config = match &args.config {
        Some(path) => StoutConfig::load(path).unwrap_or_else(|e| {
            print_error(e);
            process::exit(2);
        }),
        None => StoutConfig::default(),
    };

    init_logging(&LoggingConfig::from(&config));

    // The CLI is a host like any other: it opts in to the hint validator.
    register("hint", HintValidator::factory);

    let choice = color_choice(config.color);
    let states = config.state_set().unwrap_or_else(|e| {
        print_error(e);
        process::exit(2);
    });

    let code = match args.command {
        Command::Parse { descriptor, json } => {
            with_validators(&descriptor, &states, |validators| {
                if json {
                    println!("{}", output::validators_json(validators)?);
                } else {
                    output::print_validators(choice, validators).map_err(write_error)?;
                }
                Ok(0)
            })
        }

        Command::Check { descriptor, value } => {
            with_validators(&descriptor, &states, |validators| {
                let subject = subject_from_arg(&value);
                let outcomes = evaluate(validators, &subject);
                output::print_outcomes(choice, &outcomes).map_err(write_error)?;
                Ok(if outcomes.is_empty() { 0 } else { 1 })
            })
        }

        Command::Explain { descriptor } => {
            let clauses = parse_clauses(&descriptor, &states);
            report(output::print_clauses(choice, &descriptor, &clauses).map_err(write_error).map(|_| 0))
        }

        Command::ListValidators => report(with_registry(|registry| {
            print_list(&registry.names());
            Ok(0)
        })),

        Command::ListStates => {
            let names: Vec<String> = states.iter().map(str::to_string).collect();
            print_list(&names);
            0
        }
    };

    process::exit(code);
}

// ============================================================================
// HELPER FUNCTIONS - Common patterns extracted
// ============================================================================

/// Interprets a command-line value as JSON, falling back to a plain string.
pub fn subject_from_arg(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
}

fn with_registry<F>(f: F) -> Result<i32, StoutError>
where
    F: FnOnce(&ValidatorRegistry) -> Result<i32, StoutError>,
{
    let registry = shared_registry()
        .read()
        .map_err(|_| crate::err_msg!(Internal, "the shared validator registry lock is poisoned"))?;
    f(&registry)
}

fn with_validators<F>(descriptor: &str, states: &StateSet, f: F) -> i32
where
    F: FnOnce(&[Box<dyn Validator>]) -> Result<i32, StoutError>,
{
    report(with_registry(|registry| {
        let validators = parse_descriptor(descriptor, registry, states)?;
        f(&validators)
    }))
}

fn report(result: Result<i32, StoutError>) -> i32 {
    result.unwrap_or_else(|e| {
        print_error(e);
        1
    })
}

fn write_error(e: std::io::Error) -> StoutError {
    StoutError::io("failed to write output", e)
}
