//!
//! ****************************************************************************************
//! ** ERROR CONSTRUCTION RULES FOR Stout Errors (`err_msg!` and the constructors)        **
//! ****************************************************************************************
//!
//! # Overview
//!
//! This module defines the unified, `miette`-based diagnostic system for the Stout parser.
//! Every failure the registry, the descriptor parser, a validator constructor or the CLI
//! can produce is a [`StoutError`]. Error construction goes through the `err_msg!` macro
//! or one of the `StoutError` constructors.
//!
//! # Error Construction
//!
//! - **Use `err_msg!` for simple, message-only errors.**
//!   - `err_msg!(IllegalArgument, "Max expects a number, got {:?}", raw)`
//!
//! - **Use `StoutError::io` / `StoutError::config` to wrap a foreign error as `source`.**
//!   - `StoutError::config_at` additionally points into the configuration text.
//!
//! # Rules
//!
//! - Unregistered validator names are reported with [`StoutError::unregistered`], which
//!   carries the offending name and, when available, the descriptor and name span.
//! - Constructor failures are `IllegalArgument` and are passed through the parser unchanged.
//! - Never pass a bare offset as a span. Build a [`Span`].
//!
//! ****************************************************************************************

use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use thiserror::Error;

use crate::Span;

pub type SourceArc = Arc<NamedSource<String>>;

/// Type-safe error classification that corresponds to `StoutError` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// The descriptor names a validator the registry does not know.
    UnregisteredValidator,
    /// A validator constructor rejected its arguments.
    IllegalArgument,
    /// Configuration file could not be read or understood.
    Config,
    /// File or stream IO failed.
    Io,
    /// Internal invariant violated.
    Internal,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::UnregisteredValidator => "UnregisteredValidator",
            ErrorType::IllegalArgument => "IllegalArgument",
            ErrorType::Config => "Config",
            ErrorType::Io => "Io",
            ErrorType::Internal => "Internal",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Minimal, composable error context for diagnostics.
#[derive(Debug, Default)]
pub struct ErrorContext {
    /// The descriptor (or file) this error points into, if any.
    pub source: Option<SourceArc>,
    /// The primary span for this error, if any.
    pub span: Option<Span>,
    /// An optional help message.
    pub help: Option<String>,
}

impl ErrorContext {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_source_and_span(source: SourceArc, span: Span) -> Self {
        Self {
            source: Some(source),
            span: Some(span),
            help: None,
        }
    }

    pub fn with_all(source: SourceArc, span: Span, help: String) -> Self {
        Self {
            source: Some(source),
            span: Some(span),
            help: Some(help),
        }
    }
}

/// Unified error type for all Stout failure modes.
#[derive(Debug, Error)]
pub enum StoutError {
    #[error("Validator \"{name}\" does not exist or is not registered.")]
    UnregisteredValidator { name: String, ctx: ErrorContext },
    #[error("Illegal argument: {message}")]
    IllegalArgument {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
    #[error("IO error: {message}")]
    Io {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
}

impl StoutError {
    /// Builds the error raised for a validator name with no registry entry.
    ///
    /// When `source` is given, the diagnostic labels `span` inside it.
    pub fn unregistered(name: impl Into<String>, source: Option<(SourceArc, Span)>) -> Self {
        let ctx = match source {
            Some((src, span)) => ErrorContext::with_all(
                src,
                span,
                "register the validator with `ValidatorRegistry::put` before parsing".to_string(),
            ),
            None => ErrorContext::none(),
        };
        StoutError::UnregisteredValidator {
            name: name.into(),
            ctx,
        }
    }

    /// Wraps an IO failure, keeping it as the `source`.
    pub fn io(message: impl Into<String>, cause: std::io::Error) -> Self {
        StoutError::Io {
            message: message.into(),
            ctx: ErrorContext::none(),
            source: Some(Box::new(cause)),
        }
    }

    pub fn config(
        message: impl Into<String>,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        StoutError::Config {
            message: message.into(),
            ctx: ErrorContext::none(),
            source: Some(Box::new(cause)),
        }
    }

    /// Like [`StoutError::config`], labelling `span` inside the configuration text.
    pub fn config_at(
        message: impl Into<String>,
        cause: impl std::error::Error + Send + Sync + 'static,
        source: SourceArc,
        span: Span,
    ) -> Self {
        StoutError::Config {
            message: message.into(),
            ctx: ErrorContext::with_source_and_span(source, span),
            source: Some(Box::new(cause)),
        }
    }

    fn get_ctx(&self) -> &ErrorContext {
        match self {
            StoutError::UnregisteredValidator { ctx, .. } => ctx,
            StoutError::IllegalArgument { ctx, .. } => ctx,
            StoutError::Config { ctx, .. } => ctx,
            StoutError::Io { ctx, .. } => ctx,
            StoutError::Internal { ctx, .. } => ctx,
        }
    }

    pub fn error_type(&self) -> ErrorType {
        match self {
            StoutError::UnregisteredValidator { .. } => ErrorType::UnregisteredValidator,
            StoutError::IllegalArgument { .. } => ErrorType::IllegalArgument,
            StoutError::Config { .. } => ErrorType::Config,
            StoutError::Io { .. } => ErrorType::Io,
            StoutError::Internal { .. } => ErrorType::Internal,
        }
    }

    /// Name carried by an `UnregisteredValidator` error.
    pub fn validator_name(&self) -> Option<&str> {
        match self {
            StoutError::UnregisteredValidator { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl Diagnostic for StoutError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let code = match self {
            StoutError::UnregisteredValidator { .. } => "stout::unregistered",
            StoutError::IllegalArgument { .. } => "stout::illegal_argument",
            StoutError::Config { .. } => "stout::config",
            StoutError::Io { .. } => "stout::io",
            StoutError::Internal { .. } => "stout::internal",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.get_ctx()
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.get_ctx()
            .source
            .as_ref()
            .map(|s| s.as_ref() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let ctx = self.get_ctx();
        let span = ctx.span?;
        let text = match self {
            StoutError::UnregisteredValidator { .. } => "unknown validator".to_string(),
            StoutError::IllegalArgument { message, .. } => message.clone(),
            StoutError::Config { message, .. } => message.clone(),
            StoutError::Io { message, .. } => message.clone(),
            StoutError::Internal { message, .. } => message.clone(),
        };
        let len = if span.end > span.start {
            span.end - span.start
        } else {
            1
        };
        Some(Box::new(std::iter::once(LabeledSpan::new(
            Some(text),
            span.start,
            len,
        ))))
    }
}

/// Converts a descriptor into an `Arc<NamedSource<String>>` for use in error contexts.
pub fn to_error_source<S: AsRef<str>>(source: S) -> SourceArc {
    Arc::new(NamedSource::new("descriptor", source.as_ref().to_string()))
}

/// Constructs a StoutError variant with a formatted message and no context.
#[macro_export]
macro_rules! err_msg {
    ($variant:ident, $msg:expr, $($arg:expr),+ $(,)?) => {
        $crate::StoutError::$variant {
            message: format!($msg, $($arg),+),
            ctx: $crate::ErrorContext { source: None, span: None, help: None },
            source: None,
        }
    };
    ($variant:ident, $msg:expr) => {
        $crate::StoutError::$variant {
            message: format!("{}", $msg),
            ctx: $crate::ErrorContext { source: None, span: None, help: None },
            source: None,
        }
    };
}
