//! Handles all user-facing output for the CLI.
//!
//! This module is responsible for pretty-printing, colorizing output,
//! formatting errors, and generating JSON.

use std::io::Write;

use miette::Report;
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::config::ColorMode;
use crate::syntax::ParsedClause;
use crate::validators::{Outcome, Validator, ValidatorCore};
use crate::StoutError;

/// Resolves the configured color mode against the terminal.
pub fn color_choice(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}

/// Renders an error with miette's graphical handler on stderr.
pub fn print_error(error: StoutError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}

fn heading(stdout: &mut StandardStream, color: Color, text: &str) -> std::io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(stdout, "{}", text)?;
    stdout.reset()
}

fn print_messages(stdout: &mut StandardStream, core: &ValidatorCore) -> std::io::Result<()> {
    for (state, text) in &core.messages {
        writeln!(stdout, "    {}: {}", state, text)?;
    }
    Ok(())
}

/// Prints each validator with its arguments and messages.
pub fn print_validators(choice: ColorChoice, validators: &[Box<dyn Validator>]) -> std::io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    if validators.is_empty() {
        writeln!(stdout, "(no validators)")?;
        return Ok(());
    }
    for (i, validator) in validators.iter().enumerate() {
        heading(&mut stdout, Color::Cyan, &format!("{}. {}", i + 1, validator.kind()))?;
        writeln!(stdout, " ({} on failure)", validator.validation())?;
        if !validator.args().is_empty() {
            writeln!(stdout, "  args: {}", validator.args().join(", "))?;
        }
        print_messages(&mut stdout, validator.core())?;
    }
    Ok(())
}

/// JSON form of the validators: their shared bookkeeping, in order.
pub fn validators_json(validators: &[Box<dyn Validator>]) -> Result<String, StoutError> {
    let cores: Vec<&ValidatorCore> = validators.iter().map(|v| v.core()).collect();
    to_json(&cores)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, StoutError> {
    serde_json::to_string_pretty(value).map_err(|e| StoutError::Internal {
        message: "failed to serialize output".to_string(),
        ctx: crate::ErrorContext::none(),
        source: Some(Box::new(e)),
    })
}

/// Prints the result of `check`: either a pass line or every failure.
pub fn print_outcomes(choice: ColorChoice, outcomes: &[Outcome]) -> std::io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    if outcomes.is_empty() {
        heading(&mut stdout, Color::Green, "✓ valid")?;
        return writeln!(stdout);
    }
    for outcome in outcomes {
        heading(&mut stdout, Color::Red, &format!("✗ {}", outcome.kind))?;
        match &outcome.message {
            Some(message) => writeln!(stdout, " [{}] {}", outcome.state, message)?,
            None => writeln!(stdout, " [{}]", outcome.state)?,
        }
    }
    Ok(())
}

/// Prints the clause breakdown used by `explain`.
pub fn print_clauses(choice: ColorChoice, descriptor: &str, clauses: &[ParsedClause]) -> std::io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    if clauses.is_empty() {
        writeln!(stdout, "(no clauses)")?;
        return Ok(());
    }
    for clause in clauses {
        let text = &descriptor[clause.span.start..clause.span.end];
        heading(&mut stdout, Color::Yellow, &format!("[{}..{}]", clause.span.start, clause.span.end))?;
        writeln!(stdout, " {}", text)?;
        writeln!(stdout, "  name: {}", clause.name)?;
        writeln!(stdout, "  args: [{}]", clause.args.join(", "))?;
        for o in &clause.overrides {
            writeln!(stdout, "  {}: {}", o.state, o.text)?;
        }
        for span in &clause.ignored {
            writeln!(stdout, "  ignored: {}", &descriptor[span.start..span.end])?;
        }
    }
    Ok(())
}

/// Prints one item per line, or a placeholder for an empty list.
pub fn print_list(items: &[String]) {
    if items.is_empty() {
        println!("  No items found.");
        return;
    }
    for item in items {
        println!("  {}", item);
    }
}
