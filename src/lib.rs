pub use crate::diagnostics::{ErrorContext, ErrorType, StoutError};
pub use crate::syntax::Span;

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod logging;
pub mod registry;
pub mod state;
pub mod syntax;
pub mod validators;

use crate::registry::shared_registry;
use crate::state::StateSet;
use crate::validators::Validator;

/// Parses `descriptor` against the process-wide registry with the standard states.
///
/// ```
/// let validators = stout::parse("required|max:10").unwrap();
/// assert_eq!(validators.len(), 2);
/// assert!(stout::parse("bogusname:1").is_err());
/// ```
pub fn parse(descriptor: &str) -> Result<Vec<Box<dyn Validator>>, StoutError> {
    let registry = shared_registry().read().map_err(|_| {
        crate::err_msg!(Internal, "the shared validator registry lock is poisoned")
    })?;
    syntax::parse_descriptor(descriptor, &registry, &StateSet::standard())
}
