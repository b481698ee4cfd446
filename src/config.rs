//! Configuration for the `stout` binary.
//!
//! Files ending in `.json` are read as JSON, anything else as YAML:
//!
//! ```yaml
//! states: [pending, success]   # added to the standard states
//! log_filter: stout=debug
//! color: never                 # auto | always | never
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use miette::NamedSource;
use serde::{Deserialize, Serialize};

use crate::state::StateSet;
use crate::{Span, StoutError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoutConfig {
    /// Extra validation states recognised in message fragments.
    pub states: Vec<String>,
    /// `env_logger` filter used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
    pub color: ColorMode,
}

impl StoutConfig {
    pub fn load(path: &Path) -> Result<Self, StoutError> {
        let content = fs::read_to_string(path)
            .map_err(|e| StoutError::io(format!("failed to read {}", path.display()), e))?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, StoutError> {
        // An empty document deserializes to `null`, which means "all defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| match e.location() {
            Some(at) => {
                let source = Arc::new(NamedSource::new("config", content.to_string()));
                let start = at.index().min(content.len().saturating_sub(1));
                let span = Span::new(start, start);
                StoutError::config_at("invalid YAML configuration", e, source, span)
            }
            None => StoutError::config("invalid YAML configuration", e),
        })
    }

    pub fn from_json(content: &str) -> Result<Self, StoutError> {
        serde_json::from_str(content).map_err(|e| StoutError::config("invalid JSON configuration", e))
    }

    /// The standard states plus any configured ones.
    ///
    /// A configured name the descriptor scanner could never match is a `Config` error.
    pub fn state_set(&self) -> Result<StateSet, StoutError> {
        let mut states = StateSet::standard();
        for name in &self.states {
            states
                .insert(name.trim())
                .map_err(|e| StoutError::config(format!("unusable state name {:?}", name), e))?;
        }
        Ok(states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorType;

    #[test]
    fn yaml_config_extends_states() {
        let config = StoutConfig::from_yaml("states: [pending]\ncolor: never\n").unwrap();
        assert_eq!(config.color, ColorMode::Never);
        let states = config.state_set().unwrap();
        assert!(states.contains("pending"));
        assert!(states.contains("error"));
    }

    #[test]
    fn empty_documents_use_defaults() {
        assert_eq!(StoutConfig::from_yaml("").unwrap(), StoutConfig::default());
        assert_eq!(StoutConfig::from_json("{}").unwrap(), StoutConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = StoutConfig::from_yaml("colour: always").unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Config);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn unscannable_state_names_are_config_errors() {
        let config = StoutConfig::from_yaml("states: [in.review, \"a|b\"]").unwrap();
        let err = config.state_set().unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Config);
        assert!(err.to_string().contains("a|b"));

        let config = StoutConfig::from_yaml("states: [in.review]").unwrap();
        assert!(config.state_set().unwrap().contains("in.review"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = StoutConfig::load(Path::new("definitely/not/here.yaml")).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Io);
    }
}
