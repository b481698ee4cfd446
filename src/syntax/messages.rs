//! Message-override scanning.
//!
//! A fragment `state[text]` sets the message for `state`, where `state` is the
//! longest name in the `StateSet` that the text before the `[` ends with. Whatever
//! precedes the matched name stays in place, so `10error[Too big]` leaves `10`
//! behind. A bracket group with no known state in front of it is removed on its
//! own. The scan is a single forward pass with no backtracking.

use serde::Serialize;

use super::lexer::{closing_bracket, Segment};
use super::Span;
use crate::state::StateSet;

/// One `(state, text)` pair found in a clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageOverride {
    pub state: String,
    pub text: String,
    pub span: Span,
}

/// A segment with its bracket fragments taken out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stripped {
    /// The remaining text, untrimmed.
    pub text: String,
    /// Where the remaining text sits, from its first to its last non-blank byte.
    pub content: Option<Span>,
    pub overrides: Vec<MessageOverride>,
    /// Bracket groups not preceded by a known state.
    pub ignored: Vec<Span>,
}

impl Stripped {
    pub fn had_fragments(&self) -> bool {
        !self.overrides.is_empty() || !self.ignored.is_empty()
    }

    /// Appends `segment.text[start..end]`, widening `content` over its non-blank part.
    fn keep(&mut self, segment: Segment<'_>, start: usize, end: usize) {
        let piece = &segment.text[start..end];
        self.text.push_str(piece);
        let trimmed = piece.trim();
        if trimmed.is_empty() {
            return;
        }
        let lead = piece.len() - piece.trim_start().len();
        let from = segment.span.start + start + lead;
        let to = from + trimmed.len();
        self.content = Some(match self.content {
            Some(span) => Span::new(span.start, to),
            None => Span::new(from, to),
        });
    }
}

/// Removes every bracket group from `segment`, collecting overrides for known states.
pub fn strip_fragments(segment: Segment<'_>, states: &StateSet) -> Stripped {
    let text = segment.text;
    let mut stripped = Stripped::default();
    let mut cursor = 0;

    while let Some(rel) = text[cursor..].find('[') {
        let open = cursor + rel;
        let Some(close) = closing_bracket(text, open) else {
            break;
        };

        match states.longest_suffix_of(&text[cursor..open]) {
            Some(state) => {
                let state_start = open - state.len();
                stripped.keep(segment, cursor, state_start);
                let found = MessageOverride {
                    state: state.to_string(),
                    text: text[open + 1..close].to_string(),
                    span: Span::new(state_start, close + 1).offset(segment.span.start),
                };
                log::trace!("message override {}[{}]", found.state, found.text);
                stripped.overrides.push(found);
            }
            None => {
                stripped.keep(segment, cursor, open);
                log::debug!(
                    "ignoring bracket text {:?}: no known state before it",
                    &text[open..=close]
                );
                stripped
                    .ignored
                    .push(Span::new(open, close + 1).offset(segment.span.start));
            }
        }
        cursor = close + 1;
    }

    stripped.keep(segment, cursor, text.len());
    stripped
}
