//! Descriptor syntax.
//!
//! ```text
//! descriptor := clause ('|' clause)*
//! clause     := name (':' arg (',' arg)*)?     with state[text] fragments anywhere
//! ```
//!
//! A bracket group runs from `[` to the next `]` and shields its contents from the
//! `|`, `:` and `,` delimiters. An `[` with no closing `]` is an ordinary character.

use miette::SourceSpan;
use serde::{Deserialize, Serialize};

pub mod lexer;
pub mod messages;
pub mod parser;

pub use messages::MessageOverride;
pub use parser::{parse_clauses, parse_descriptor, DescriptorParser, ParsedClause};

/// Byte range into a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shifts the span right by `offset` bytes.
    pub fn offset(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}
