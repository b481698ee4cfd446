//! Numeric upper and lower bounds.

use serde_json::Value;

use super::measure::{magnitude, number_arg, required_arg};
use super::{Validator, ValidatorCore};
use crate::state::ValidationState;
use crate::StoutError;

/// `max:N`: the subject's magnitude must not exceed `N`.
#[derive(Debug, Clone, PartialEq)]
pub struct Max {
    core: ValidatorCore,
    max: f64,
}

impl Max {
    pub fn new(args: &[String]) -> Result<Self, StoutError> {
        let raw = required_arg("max", args, 0)?;
        let max = number_arg("max", raw)?;
        let core = ValidatorCore::new("max", args)
            .with_message(ValidationState::Error.as_str(), format!("Must be at most {}.", raw.trim()));
        Ok(Self { core, max })
    }

    pub fn factory(args: &[String]) -> Result<Box<dyn Validator>, StoutError> {
        Ok(Box::new(Self::new(args)?))
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

impl Validator for Max {
    fn core(&self) -> &ValidatorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ValidatorCore {
        &mut self.core
    }

    fn validate(&self, subject: &Value) -> bool {
        magnitude(subject).map_or(true, |m| m <= self.max)
    }
}

/// `min:N`: the subject's magnitude must be at least `N`.
#[derive(Debug, Clone, PartialEq)]
pub struct Min {
    core: ValidatorCore,
    min: f64,
}

impl Min {
    pub fn new(args: &[String]) -> Result<Self, StoutError> {
        let raw = required_arg("min", args, 0)?;
        let min = number_arg("min", raw)?;
        let core = ValidatorCore::new("min", args)
            .with_message(ValidationState::Error.as_str(), format!("Must be at least {}.", raw.trim()));
        Ok(Self { core, min })
    }

    pub fn factory(args: &[String]) -> Result<Box<dyn Validator>, StoutError> {
        Ok(Box::new(Self::new(args)?))
    }

    pub fn min(&self) -> f64 {
        self.min
    }
}

impl Validator for Min {
    fn core(&self) -> &ValidatorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ValidatorCore {
        &mut self.core
    }

    fn validate(&self, subject: &Value) -> bool {
        magnitude(subject).map_or(true, |m| m >= self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn max_compares_numbers_and_lengths() {
        let max = Max::new(&args(&["10"])).unwrap();
        assert!(max.validate(&json!(10)));
        assert!(!max.validate(&json!(10.5)));
        assert!(max.validate(&json!("9")));
        assert!(!max.validate(&json!("eleven chars")));
        assert!(max.validate(&Value::Null));
    }

    #[test]
    fn min_keeps_extra_arguments() {
        let min = Min::new(&args(&["2", "5"])).unwrap();
        assert_eq!(min.min(), 2.0);
        assert_eq!(min.args(), &["2".to_string(), "5".to_string()]);
        assert!(!min.validate(&json!(1)));
        assert!(min.validate(&json!([1, 2])));
    }

    #[test]
    fn bounds_reject_bad_arguments() {
        assert!(Max::new(&[]).is_err());
        assert!(Min::new(&args(&["lots"])).is_err());
    }

    #[test]
    fn default_messages_are_keyed_by_error() {
        let max = Max::new(&args(&["3"])).unwrap();
        assert_eq!(max.messages().get("error").map(String::as_str), Some("Must be at most 3."));
        assert_eq!(max.kind(), "max");
        assert_eq!(max.validation(), "error");
    }
}
