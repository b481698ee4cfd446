//! Descriptor parser: turns a descriptor string into configured validator instances.
//!
//! Each `|`-delimited clause is trimmed (empty clauses are skipped), its message
//! fragments are scanned out, the name before the first `:` is resolved in the
//! registry and the comma-separated arguments after it are passed to the factory.
//! Overrides are merged over the constructor's default messages, last one winning.
//!
//! Parsing is fail-fast: the first unregistered name or constructor failure aborts
//! the whole descriptor and no partial list is returned.

use serde::Serialize;

use super::lexer::{split_clauses, split_once_top_level, split_top_level, Segment};
use super::messages::{strip_fragments, MessageOverride};
use super::Span;
use crate::diagnostics::to_error_source;
use crate::registry::ValidatorRegistry;
use crate::state::StateSet;
use crate::validators::Validator;
use crate::StoutError;

/// One clause, resolved down to a name, arguments and overrides but not yet built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedClause {
    pub name: String,
    pub name_span: Span,
    pub args: Vec<String>,
    pub overrides: Vec<MessageOverride>,
    /// Bracket groups that did not follow a known state.
    pub ignored: Vec<Span>,
    pub span: Span,
}

/// Breaks one clause down. Returns `None` for a clause that is blank once trimmed.
pub fn parse_clause(clause: Segment<'_>, states: &StateSet) -> Option<ParsedClause> {
    if clause.text.trim().is_empty() {
        return None;
    }

    let (name_part, args_part) = split_once_top_level(clause, ':');

    let name = strip_fragments(name_part, states);
    let mut overrides = name.overrides;
    let mut ignored = name.ignored;

    let mut args = Vec::new();
    if let Some(args_part) = args_part {
        let tokens = split_top_level(args_part, ',');
        let single = tokens.len() == 1;
        for token in tokens {
            let stripped = strip_fragments(token, states);
            let had_fragments = stripped.had_fragments();
            overrides.extend(stripped.overrides);
            ignored.extend(stripped.ignored);
            let value = stripped.text.trim();
            // `max:` and tokens that held nothing but fragments contribute no argument.
            if value.is_empty() && (single || had_fragments) {
                continue;
            }
            args.push(value.to_string());
        }
    }

    Some(ParsedClause {
        name: name.text.trim().to_string(),
        name_span: name.content.unwrap_or_else(|| name_part.trimmed_span()),
        args,
        overrides,
        ignored,
        span: clause.trimmed_span(),
    })
}

/// Breaks a descriptor into clauses without consulting any registry.
pub fn parse_clauses(descriptor: &str, states: &StateSet) -> Vec<ParsedClause> {
    split_clauses(descriptor)
        .into_iter()
        .filter_map(|clause| parse_clause(clause, states))
        .collect()
}

/// Parses descriptors against a registry and a set of known states.
///
/// The parser holds no state of its own between calls; every call to
/// [`DescriptorParser::parse`] builds fresh instances.
///
/// # Example
/// ```
/// use stout::registry::ValidatorRegistry;
/// use stout::state::StateSet;
/// use stout::syntax::DescriptorParser;
/// use stout::validators::Validator;
///
/// let registry = ValidatorRegistry::with_builtins();
/// let states = StateSet::standard();
/// let parser = DescriptorParser::new(&registry, &states);
/// let validators = parser.parse("required|max:10,error[Too long]").unwrap();
/// assert_eq!(validators.len(), 2);
/// assert_eq!(validators[1].messages()["error"], "Too long");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DescriptorParser<'r> {
    registry: &'r ValidatorRegistry,
    states: &'r StateSet,
}

impl<'r> DescriptorParser<'r> {
    pub fn new(registry: &'r ValidatorRegistry, states: &'r StateSet) -> Self {
        Self { registry, states }
    }

    pub fn parse(&self, descriptor: &str) -> Result<Vec<Box<dyn Validator>>, StoutError> {
        let mut validators = Vec::new();

        for clause in split_clauses(descriptor) {
            let Some(parsed) = parse_clause(clause, self.states) else {
                continue;
            };

            let factory = self.registry.get(&parsed.name).ok_or_else(|| {
                StoutError::unregistered(
                    parsed.name.clone(),
                    Some((to_error_source(descriptor), parsed.name_span)),
                )
            })?;

            let mut validator = factory(&parsed.args)?;
            let messages = validator.messages_mut();
            for o in parsed.overrides {
                messages.insert(o.state, o.text);
            }

            log::debug!(
                "parsed clause {:?} as {} with {} argument(s)",
                &descriptor[parsed.span.start..parsed.span.end],
                validator.kind(),
                parsed.args.len()
            );
            validators.push(validator);
        }

        Ok(validators)
    }
}

/// Parses `descriptor` against `registry`, recognising overrides for `states`.
pub fn parse_descriptor(
    descriptor: &str,
    registry: &ValidatorRegistry,
    states: &StateSet,
) -> Result<Vec<Box<dyn Validator>>, StoutError> {
    DescriptorParser::new(registry, states).parse(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ErrorType;

    fn clauses(descriptor: &str) -> Vec<ParsedClause> {
        parse_clauses(descriptor, &StateSet::standard())
    }

    #[test]
    fn clause_arguments_are_trimmed() {
        let parsed = clauses(" min : 2 , 5 ");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "min");
        assert_eq!(parsed[0].args, vec!["2", "5"]);
        assert_eq!(parsed[0].span, Span::new(1, 12));
        assert_eq!(parsed[0].name_span, Span::new(1, 4));
    }

    #[test]
    fn fragments_never_become_arguments() {
        let parsed = clauses("max:10, error[Too big] , hint[Keep it short]");
        assert_eq!(parsed[0].args, vec!["10"]);
        let states: Vec<_> = parsed[0].overrides.iter().map(|o| o.state.as_str()).collect();
        assert_eq!(states, vec!["error", "hint"]);
    }

    #[test]
    fn override_before_colon_is_allowed() {
        let parsed = clauses("required error[Needed]");
        assert_eq!(parsed[0].name, "required");
        assert!(parsed[0].args.is_empty());
        assert_eq!(parsed[0].overrides[0].text, "Needed");
    }

    #[test]
    fn bracket_after_name_is_ignored() {
        let parsed = clauses("min[error]:2");
        assert_eq!(parsed[0].name, "min");
        assert_eq!(parsed[0].args, vec!["2"]);
        assert!(parsed[0].overrides.is_empty());
        assert_eq!(parsed[0].ignored.len(), 1);
    }

    #[test]
    fn glued_override_keeps_the_argument() {
        let parsed = clauses("max:10error[Too long]");
        assert_eq!(parsed[0].args, vec!["10"]);
        assert_eq!(parsed[0].overrides[0].state, "error");
        assert_eq!(parsed[0].overrides[0].text, "Too long");

        let parsed = clauses("max:10,myerror[x]");
        assert_eq!(parsed[0].args, vec!["10", "my"]);
        assert_eq!(parsed[0].overrides[0].state, "error");
    }

    #[test]
    fn name_span_covers_only_the_name() {
        assert_eq!(clauses("nope[x]")[0].name_span, Span::new(0, 4));
        assert_eq!(clauses(" required error[x] ")[0].name_span, Span::new(1, 9));

        let mut states = StateSet::standard();
        states.insert("in.review").unwrap();
        let parsed = parse_clauses("required in.review[Wait]", &states);
        assert_eq!(parsed[0].name, "required");
        assert_eq!(parsed[0].name_span, Span::new(0, 8));
        assert_eq!(parsed[0].overrides[0].state, "in.review");
    }

    #[test]
    fn empty_argument_part_means_no_arguments() {
        assert!(clauses("required:").remove(0).args.is_empty());
        assert!(clauses("required:  ").remove(0).args.is_empty());
        assert_eq!(clauses("size:1,").remove(0).args, vec!["1", ""]);
    }

    #[test]
    fn unregistered_name_is_located() {
        let registry = ValidatorRegistry::with_builtins();
        let states = StateSet::standard();
        let err = parse_descriptor("required| nope:1", &registry, &states).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::UnregisteredValidator);
        assert_eq!(err.validator_name(), Some("nope"));
        match err {
            StoutError::UnregisteredValidator { ctx, .. } => {
                assert_eq!(ctx.span, Some(Span::new(10, 14)));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn constructor_errors_pass_through() {
        let registry = ValidatorRegistry::with_builtins();
        let states = StateSet::standard();
        let err = parse_descriptor("max:lots", &registry, &states).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::IllegalArgument);
        assert!(err.to_string().contains("\"lots\""));
    }

    #[test]
    fn overrides_merge_over_defaults() {
        let registry = ValidatorRegistry::with_builtins();
        let states = StateSet::standard();
        let parsed = parse_descriptor(
            "max:3,hint[Up to three],error[first],error[second]",
            &registry,
            &states,
        )
        .unwrap();
        let messages = parsed[0].messages();
        assert_eq!(messages["error"], "second");
        assert_eq!(messages["hint"], "Up to three");
        assert_eq!(messages.len(), 2);
    }
}
