// # Stout Validator Kinds
//
// Every validator the descriptor parser can produce implements the `Validator`
// capability trait. Concrete kinds keep their shared bookkeeping (kind tag,
// failure state, constructor arguments, per-state messages) in a
// `ValidatorCore` and only add their own parameters and `validate` logic.
//
// ## Module Structure
//
// - **`bounds`**: `Max` and `Min`
// - **`size`**: length / cardinality checks
// - **`required`**: presence check
// - **`hint`**: informational `HintValidator`, not pre-registered
// - **`measure`**: shared argument conversion and subject measuring
//
// Constructors receive the raw, trimmed string arguments from the descriptor and
// own their conversion. A constructor that cannot make sense of its arguments
// returns `StoutError::IllegalArgument`, which the parser propagates unchanged.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::ValidationState;
use crate::StoutError;

pub mod bounds;
pub mod hint;
pub mod measure;
pub mod required;
pub mod size;

pub use bounds::{Max, Min};
pub use hint::HintValidator;
pub use required::Required;
pub use size::Size;

/// Messages keyed by validation state name.
pub type Messages = BTreeMap<String, String>;

/// A validator factory: builds a fresh instance from positional string arguments.
///
/// Factories are plain function pointers, so they are `Copy` and can be stored in a
/// process-wide registry without synchronisation on the values themselves.
pub type ValidatorFactory = fn(args: &[String]) -> Result<Box<dyn Validator>, StoutError>;

/// Bookkeeping shared by every validator kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorCore {
    /// The registry key this kind is known under.
    pub kind: String,
    /// The state reported when validation fails.
    pub validation: String,
    /// Positional arguments the instance was constructed from.
    pub args: Vec<String>,
    /// Message text per validation state.
    pub messages: Messages,
}

impl ValidatorCore {
    /// A core reporting the `error` state on failure.
    pub fn new(kind: impl Into<String>, args: &[String]) -> Self {
        Self {
            kind: kind.into(),
            validation: ValidationState::Error.as_str().to_string(),
            args: args.to_vec(),
            messages: Messages::new(),
        }
    }

    pub fn with_validation(mut self, state: impl Into<String>) -> Self {
        self.validation = state.into();
        self
    }

    pub fn with_message(mut self, state: impl Into<String>, text: impl Into<String>) -> Self {
        self.messages.insert(state.into(), text.into());
        self
    }
}

/// The capability interface every validator kind exposes.
pub trait Validator: fmt::Debug + Send + Sync {
    fn core(&self) -> &ValidatorCore;

    fn core_mut(&mut self) -> &mut ValidatorCore;

    /// Returns `true` when `subject` satisfies this validator.
    fn validate(&self, subject: &Value) -> bool;

    fn kind(&self) -> &str {
        &self.core().kind
    }

    fn validation(&self) -> &str {
        &self.core().validation
    }

    fn args(&self) -> &[String] {
        &self.core().args
    }

    fn messages(&self) -> &Messages {
        &self.core().messages
    }

    fn messages_mut(&mut self) -> &mut Messages {
        &mut self.core_mut().messages
    }

    /// The message for the state this validator reports on failure.
    fn message(&self) -> Option<&str> {
        self.messages().get(self.validation()).map(String::as_str)
    }
}

/// A single validator failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub kind: String,
    pub state: String,
    pub message: Option<String>,
}

/// Runs every validator against `subject`, collecting the failures in order.
pub fn evaluate(validators: &[Box<dyn Validator>], subject: &Value) -> Vec<Outcome> {
    validators
        .iter()
        .filter(|v| !v.validate(subject))
        .map(|v| Outcome {
            kind: v.kind().to_string(),
            state: v.validation().to_string(),
            message: v.message().map(str::to_string),
        })
        .collect()
}
