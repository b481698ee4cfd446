//! Informational validator.
//!
//! A hint never blocks a value; it only carries a message under the `hint` state.
//! It is not one of the built-ins. Hosts opt in with
//! `registry.put("hint", HintValidator::factory)`, after which `hint:Some text`
//! parses like any other clause.

use serde_json::Value;

use super::{Validator, ValidatorCore};
use crate::state::ValidationState;
use crate::StoutError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintValidator {
    core: ValidatorCore,
}

impl HintValidator {
    pub fn new(message: impl Into<String>) -> Self {
        let core = ValidatorCore::new("hint", &[])
            .with_validation(ValidationState::Hint.as_str())
            .with_message(ValidationState::Hint.as_str(), message);
        Self { core }
    }

    /// The first argument is the message; later ones are recorded but unused.
    /// Hint text that needs commas goes in brackets: `hint:x,hint[Short, sweet]`.
    pub fn factory(args: &[String]) -> Result<Box<dyn Validator>, StoutError> {
        let mut hint = Self::new(args.first().cloned().unwrap_or_default());
        hint.core.args = args.to_vec();
        Ok(Box::new(hint))
    }
}

impl Validator for HintValidator {
    fn core(&self) -> &ValidatorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ValidatorCore {
        &mut self.core
    }

    fn validate(&self, _subject: &Value) -> bool {
        true
    }
}
