//! Validation states.
//!
//! A validation state is the named outcome a validator's message is keyed by. The
//! descriptor scanner only recognises `state[text]` fragments for names in the
//! [`StateSet`] it is given, so hosts with extra states (from configuration, for
//! instance) extend the set before parsing.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{err_msg, StoutError};

/// The standard validation states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationState {
    Error,
    Warning,
    Hint,
    Valid,
}

impl ValidationState {
    pub const ALL: [ValidationState; 4] = [
        ValidationState::Error,
        ValidationState::Warning,
        ValidationState::Hint,
        ValidationState::Valid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationState::Error => "error",
            ValidationState::Warning => "warning",
            ValidationState::Hint => "hint",
            ValidationState::Valid => "valid",
        }
    }
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationState {
    type Err = StoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValidationState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| err_msg!(IllegalArgument, "unknown validation state {:?}", s))
    }
}

/// The set of state names the message scanner accepts.
///
/// Names are case-sensitive and kept sorted. The scanner matches them literally
/// before a `[`, so a name may hold any character except the descriptor delimiters
/// `|`, `:`, `,`, `[` and `]`. Names are non-empty and carry no surrounding
/// whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSet {
    names: BTreeSet<String>,
}

const RESERVED: [char; 5] = ['|', ':', ',', '[', ']'];

/// Checks that `name` can ever be matched by the message scanner.
pub fn check_state_name(name: &str) -> Result<(), StoutError> {
    if name.is_empty() || name.trim() != name {
        return Err(err_msg!(
            IllegalArgument,
            "state name {:?} must be non-empty without surrounding whitespace",
            name
        ));
    }
    if let Some(c) = name.chars().find(|c| RESERVED.contains(c)) {
        return Err(err_msg!(
            IllegalArgument,
            "state name {:?} contains the descriptor delimiter {:?}",
            name,
            c
        ));
    }
    Ok(())
}

impl StateSet {
    pub fn new<I, S>(names: I) -> Result<Self, StoutError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self {
            names: BTreeSet::new(),
        };
        for name in names {
            set.insert(name)?;
        }
        Ok(set)
    }

    /// The four standard states: `error`, `warning`, `hint`, `valid`.
    pub fn standard() -> Self {
        Self {
            names: ValidationState::ALL
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Adds a state name. Returns `Ok(false)` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> Result<bool, StoutError> {
        let name = name.into();
        check_state_name(&name)?;
        Ok(self.names.insert(name))
    }

    /// The longest state name `text` ends with.
    pub fn longest_suffix_of(&self, text: &str) -> Option<&str> {
        self.names
            .iter()
            .filter(|name| text.ends_with(name.as_str()))
            .max_by_key(|name| name.len())
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for StateSet {
    fn default() -> Self {
        Self::standard()
    }
}
