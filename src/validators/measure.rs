//! Argument conversion and subject measuring shared by the built-in kinds.

use serde_json::Value;
use unicode_segmentation::UnicodeSegmentation;

use crate::{err_msg, StoutError};

/// Returns the positional argument at `index`, or an `IllegalArgument` naming the kind.
pub fn required_arg<'a>(kind: &str, args: &'a [String], index: usize) -> Result<&'a str, StoutError> {
    args.get(index).map(String::as_str).ok_or_else(|| {
        err_msg!(
            IllegalArgument,
            "validator \"{}\" expects an argument at position {}",
            kind,
            index + 1
        )
    })
}

/// Parses a finite numeric bound.
pub fn number_arg(kind: &str, raw: &str) -> Result<f64, StoutError> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(err_msg!(
            IllegalArgument,
            "validator \"{}\" expects a number, got {:?}",
            kind,
            raw
        )),
    }
}

/// Parses a non-negative length.
pub fn length_arg(kind: &str, raw: &str) -> Result<usize, StoutError> {
    raw.trim().parse::<usize>().map_err(|e| StoutError::IllegalArgument {
        message: format!("validator \"{}\" expects a non-negative integer, got {:?}", kind, raw),
        ctx: crate::ErrorContext::none(),
        source: Some(Box::new(e)),
    })
}

/// Length of a string in grapheme clusters.
pub fn grapheme_len(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Length of strings, arrays and objects. Other subjects have no length.
pub fn length_of(subject: &Value) -> Option<usize> {
    match subject {
        Value::String(s) => Some(grapheme_len(s)),
        Value::Array(items) => Some(items.len()),
        Value::Object(map) => Some(map.len()),
        _ => None,
    }
}

/// The quantity a numeric bound is compared against.
///
/// Numbers and numeric strings compare by value; other strings, arrays and objects by
/// length. Null and booleans have no magnitude.
pub fn magnitude(subject: &Value) -> Option<f64> {
    match subject {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Some(n),
            _ => Some(grapheme_len(s) as f64),
        },
        Value::Array(_) | Value::Object(_) => length_of(subject).map(|len| len as f64),
        Value::Null | Value::Bool(_) => None,
    }
}
