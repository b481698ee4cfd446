// tests/registry_tests.rs

use serde_json::Value;
use stout::registry::{register, shared_registry, ValidatorRegistry, BUILT_IN_VALIDATORS};
use stout::state::StateSet;
use stout::syntax::parse_descriptor;
use stout::validators::{Validator, ValidatorCore};
use stout::{ErrorType, StoutError};

/// Accepts strings that start with a configured prefix.
#[derive(Debug)]
struct StartsWith {
    core: ValidatorCore,
    prefix: String,
}

impl StartsWith {
    fn factory(args: &[String]) -> Result<Box<dyn Validator>, StoutError> {
        let prefix = args.first().cloned().unwrap_or_default();
        let core = ValidatorCore::new("starts_with", args)
            .with_message("error", format!("Must start with {prefix:?}."));
        Ok(Box::new(Self { core, prefix }))
    }
}

impl Validator for StartsWith {
    fn core(&self) -> &ValidatorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ValidatorCore {
        &mut self.core
    }

    fn validate(&self, subject: &Value) -> bool {
        subject.as_str().map_or(true, |s| s.starts_with(&self.prefix))
    }
}

#[test]
fn test_builtins_are_exactly_the_four_kinds() {
    let registry = ValidatorRegistry::with_builtins();
    assert_eq!(registry.len(), BUILT_IN_VALIDATORS.len());
    assert_eq!(registry.names(), vec!["max", "min", "required", "size"]);
    assert!(!registry.contains("hint"));
}

#[test]
fn test_local_registration_is_visible_to_parse() {
    let mut registry = ValidatorRegistry::with_builtins();
    let states = StateSet::standard();

    let err = parse_descriptor("starts_with:ab", &registry, &states).unwrap_err();
    assert_eq!(err.error_type(), ErrorType::UnregisteredValidator);

    registry.put("starts_with", StartsWith::factory);
    let validators = parse_descriptor("required|starts_with:ab,error[Needs ab]", &registry, &states).unwrap();
    assert_eq!(validators[1].kind(), "starts_with");
    assert_eq!(validators[1].args(), &["ab".to_string()]);
    assert_eq!(validators[1].messages()["error"], "Needs ab");
    assert!(validators[1].validate(&Value::from("abc")));
    assert!(!validators[1].validate(&Value::from("xyz")));
}

#[test]
fn test_overwriting_a_builtin_changes_later_parses() {
    let mut registry = ValidatorRegistry::with_builtins();
    let previous = registry.put("max", StartsWith::factory);
    assert!(previous.is_some());

    let validators = parse_descriptor("max:10", &registry, &StateSet::standard()).unwrap();
    assert_eq!(validators[0].kind(), "starts_with");
}

#[test]
fn test_removed_name_becomes_unregistered() {
    let mut registry = ValidatorRegistry::with_builtins();
    assert!(registry.remove("size").is_some());
    let err = parse_descriptor("size:1", &registry, &StateSet::standard()).unwrap_err();
    assert_eq!(err.validator_name(), Some("size"));
}

#[test]
fn test_shared_registry_mutation_affects_top_level_parse() {
    let err = stout::parse("custom_xyz:x").unwrap_err();
    assert_eq!(err.error_type(), ErrorType::UnregisteredValidator);

    register("custom_xyz", StartsWith::factory);
    let validators = stout::parse("custom_xyz:x").unwrap();
    assert_eq!(validators.len(), 1);
    assert_eq!(validators[0].args(), &["x".to_string()]);
    assert!(shared_registry().read().unwrap().contains("custom_xyz"));
}
