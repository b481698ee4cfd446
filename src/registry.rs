//! # Stout: Validator Registry
//!
//! Name → factory lookup for validator kinds, extensible at runtime.
//!
//! Registry invariant: parsing only ever reads the registry. It is built once (with
//! [`build_default_validator_registry`] or [`ValidatorRegistry::with_builtins`]),
//! optionally extended with [`ValidatorRegistry::put`], and then passed by reference
//! to the parser.
//!
//! Hosts that want one registry for the whole process use [`shared_registry`], which
//! guards a lazily built default registry with an `RwLock`.
//!
//! | Method       | Overwrites | Notes                          |
//! |--------------|------------|--------------------------------|
//! | put          | Yes        | Returns the replaced factory   |
//! | get/contains | N/A        | Exact, case-sensitive lookup   |
//! | remove       | N/A        | Returns the removed factory    |

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;

use crate::validators::{Max, Min, Required, Size, ValidatorFactory};

/// The names the default registry is seeded with.
pub const BUILT_IN_VALIDATORS: [&str; 4] = ["max", "min", "size", "required"];

/// Registry for validator factories, inspectable at runtime.
#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    validators: HashMap<String, ValidatorFactory>,
}

impl ValidatorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding exactly the built-in kinds.
    ///
    /// # Example
    /// ```
    /// use stout::registry::ValidatorRegistry;
    /// let registry = ValidatorRegistry::with_builtins();
    /// assert!(registry.contains("required"));
    /// assert_eq!(registry.len(), 4);
    /// ```
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.put("max", Max::factory);
        registry.put("min", Min::factory);
        registry.put("size", Size::factory);
        registry.put("required", Required::factory);
        registry
    }

    /// Registers `factory` under `name`, silently replacing any previous entry.
    ///
    /// Returns the factory that was replaced, if any.
    pub fn put(&mut self, name: &str, factory: ValidatorFactory) -> Option<ValidatorFactory> {
        let previous = self.validators.insert(name.to_string(), factory);
        if previous.is_some() {
            log::debug!("validator {:?} re-registered", name);
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<ValidatorFactory> {
        self.validators.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ValidatorFactory> {
        self.validators.remove(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.validators.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

/// Builds a registry populated with the built-in validator kinds.
#[inline]
pub fn build_default_validator_registry() -> ValidatorRegistry {
    ValidatorRegistry::with_builtins()
}

static SHARED: Lazy<RwLock<ValidatorRegistry>> =
    Lazy::new(|| RwLock::new(build_default_validator_registry()));

/// The process-wide registry, seeded with the built-ins on first use.
pub fn shared_registry() -> &'static RwLock<ValidatorRegistry> {
    &SHARED
}

/// Registers a factory in the process-wide registry.
pub fn register(name: &str, factory: ValidatorFactory) -> Option<ValidatorFactory> {
    // A poisoned lock still holds a consistent map: `put` is a single insert.
    let mut registry = match SHARED.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    registry.put(name, factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{HintValidator, Validator};

    #[test]
    fn builtins_are_exactly_the_four_kinds() {
        let registry = build_default_validator_registry();
        assert_eq!(registry.names(), vec!["max", "min", "required", "size"]);
        for name in BUILT_IN_VALIDATORS {
            assert!(registry.contains(name));
        }
    }

    #[test]
    fn put_overwrites_and_returns_previous() {
        let mut registry = ValidatorRegistry::new();
        assert!(registry.put("hint", HintValidator::factory).is_none());
        assert!(registry.put("hint", Required::factory).is_some());
        assert_eq!(registry.len(), 1);
        let built = (registry.get("hint").unwrap())(&[]).unwrap();
        assert_eq!(built.kind(), "required");
    }

    #[test]
    fn lookup_is_exact() {
        let registry = ValidatorRegistry::with_builtins();
        assert!(registry.get("Max").is_none());
        assert!(registry.get("max ").is_none());
        assert!(registry.get("max").is_some());
    }

    #[test]
    fn remove_forgets_the_name() {
        let mut registry = ValidatorRegistry::with_builtins();
        assert!(registry.remove("size").is_some());
        assert!(!registry.contains("size"));
        assert!(registry.remove("size").is_none());
    }

    #[test]
    fn shared_registry_starts_with_builtins() {
        let registry = shared_registry().read().unwrap();
        for name in BUILT_IN_VALIDATORS {
            assert!(registry.contains(name));
        }
    }
}
