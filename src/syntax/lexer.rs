//! Bracket-aware splitting of descriptors into clauses and clause parts.

use super::Span;

/// A slice of the descriptor together with where it sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Segment<'a> {
    pub fn whole(text: &'a str) -> Self {
        Self {
            text,
            span: Span::new(0, text.len()),
        }
    }

    fn slice(&self, start: usize, end: usize) -> Segment<'a> {
        Segment {
            text: &self.text[start..end],
            span: Span::new(self.span.start + start, self.span.start + end),
        }
    }

    /// The span of the text once surrounding whitespace is dropped.
    pub fn trimmed_span(&self) -> Span {
        let lead = self.text.len() - self.text.trim_start().len();
        let kept = self.text.trim().len();
        Span::new(self.span.start + lead, self.span.start + lead + kept)
    }
}

/// Byte offset of the `]` closing a group opened at `open`, if there is one.
pub fn closing_bracket(text: &str, open: usize) -> Option<usize> {
    text[open + 1..].find(']').map(|rel| open + 1 + rel)
}

/// Byte offsets of every `delimiter` outside bracket groups.
fn top_level_positions(text: &str, delimiter: char) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut iter = text.char_indices();
    while let Some((i, c)) = iter.next() {
        if c == '[' {
            if let Some(close) = closing_bracket(text, i) {
                // Skip the group; `]` is ASCII so `close + 1` is a char boundary.
                for (j, _) in iter.by_ref() {
                    if j == close {
                        break;
                    }
                }
            }
        } else if c == delimiter {
            positions.push(i);
        }
    }
    positions
}

/// Splits `segment` on every top-level `delimiter`, preserving order.
pub fn split_top_level<'a>(segment: Segment<'a>, delimiter: char) -> Vec<Segment<'a>> {
    let mut parts = Vec::new();
    let mut start = 0;
    for pos in top_level_positions(segment.text, delimiter) {
        parts.push(segment.slice(start, pos));
        start = pos + delimiter.len_utf8();
    }
    parts.push(segment.slice(start, segment.text.len()));
    parts
}

/// Splits `segment` on the first top-level `delimiter`.
pub fn split_once_top_level<'a>(
    segment: Segment<'a>,
    delimiter: char,
) -> (Segment<'a>, Option<Segment<'a>>) {
    match top_level_positions(segment.text, delimiter).first() {
        Some(&pos) => (
            segment.slice(0, pos),
            Some(segment.slice(pos + delimiter.len_utf8(), segment.text.len())),
        ),
        None => (segment, None),
    }
}

/// Splits a descriptor into its `|`-delimited clauses.
pub fn split_clauses(descriptor: &str) -> Vec<Segment<'_>> {
    split_top_level(Segment::whole(descriptor), '|')
}
