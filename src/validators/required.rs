use serde_json::Value;

use super::{Validator, ValidatorCore};
use crate::state::ValidationState;
use crate::StoutError;

/// `required`: the subject must be present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Required {
    core: ValidatorCore,
}

impl Required {
    pub fn new(args: &[String]) -> Self {
        let core = ValidatorCore::new("required", args)
            .with_message(ValidationState::Error.as_str(), "This field is required.");
        Self { core }
    }

    pub fn factory(args: &[String]) -> Result<Box<dyn Validator>, StoutError> {
        Ok(Box::new(Self::new(args)))
    }
}

impl Validator for Required {
    fn core(&self) -> &ValidatorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ValidatorCore {
        &mut self.core
    }

    fn validate(&self, subject: &Value) -> bool {
        match subject {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
            Value::Bool(_) | Value::Number(_) => true,
        }
    }
}
