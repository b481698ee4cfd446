//! Logging setup for the `stout` binary.
//!
//! The library only talks to the `log` facade; the binary picks `env_logger` as the
//! backend and writes to stderr so command output on stdout stays clean.

use std::sync::Once;

use env_logger::{Builder, Target, WriteStyle};
use log::LevelFilter;

use crate::config::{ColorMode, StoutConfig};

/// Logger settings, usually taken from a [`StoutConfig`].
///
/// `filter` follows the `env_logger` directive syntax, e.g. `"stout::syntax=trace"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub color: ColorMode,
}

impl From<&StoutConfig> for LoggingConfig {
    fn from(config: &StoutConfig) -> Self {
        Self {
            filter: config.log_filter.clone(),
            color: config.color,
        }
    }
}

impl LoggingConfig {
    fn write_style(&self) -> WriteStyle {
        match self.color {
            ColorMode::Auto => WriteStyle::Auto,
            ColorMode::Always => WriteStyle::Always,
            ColorMode::Never => WriteStyle::Never,
        }
    }

    /// The directives in effect: `RUST_LOG` first, then the configured filter.
    fn directives(&self) -> Option<String> {
        std::env::var("RUST_LOG")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.filter.clone())
    }
}

static INIT: Once = Once::new();

/// Installs the logger on first call. With no directives only warnings are shown.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = Builder::new();
        match config.directives() {
            Some(directives) => builder.parse_filters(&directives),
            None => builder.filter_level(LevelFilter::Warn),
        };
        builder.target(Target::Stderr).write_style(config.write_style());

        // Embedding hosts may have installed their own logger already.
        if builder.try_init().is_err() {
            return;
        }
        log::debug!("logging initialized");
    });
}
