//! Length and cardinality checks.

use serde_json::Value;

use super::measure::{length_arg, length_of, required_arg};
use super::{Validator, ValidatorCore};
use crate::state::ValidationState;
use crate::{err_msg, StoutError};

/// `size:N` or `size:LO,HI`.
///
/// Strings are measured in grapheme clusters, arrays and objects by element count.
/// Subjects without a length pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Size {
    core: ValidatorCore,
    lo: usize,
    hi: usize,
}

impl Size {
    pub fn new(args: &[String]) -> Result<Self, StoutError> {
        let lo = length_arg("size", required_arg("size", args, 0)?)?;
        let hi = match args.get(1) {
            Some(raw) => length_arg("size", raw)?,
            None => lo,
        };
        if lo > hi {
            return Err(err_msg!(
                IllegalArgument,
                "validator \"size\" expects LO <= HI, got {} > {}",
                lo,
                hi
            ));
        }
        let message = if lo == hi {
            format!("Must have a size of exactly {}.", lo)
        } else {
            format!("Must have a size between {} and {}.", lo, hi)
        };
        let core = ValidatorCore::new("size", args).with_message(ValidationState::Error.as_str(), message);
        Ok(Self { core, lo, hi })
    }

    pub fn factory(args: &[String]) -> Result<Box<dyn Validator>, StoutError> {
        Ok(Box::new(Self::new(args)?))
    }

    pub fn range(&self) -> (usize, usize) {
        (self.lo, self.hi)
    }
}

impl Validator for Size {
    fn core(&self) -> &ValidatorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ValidatorCore {
        &mut self.core
    }

    fn validate(&self, subject: &Value) -> bool {
        length_of(subject).map_or(true, |len| (self.lo..=self.hi).contains(&len))
    }
}
