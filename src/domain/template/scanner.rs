//! Placeholder discovery
//!
//! One left-to-right pass. Each `}` closes the most recent `${` that is still
//! open, so discovered spans are either nested or disjoint, never partially
//! overlapping. Unclosed `${` and stray `}` stay literal text.

use smallvec::SmallVec;

use super::types::Span;

const PREFIX: char = '$';
const OPEN: char = '{';
const CLOSE: char = '}';

/// Find every well-formed `${...}` span in `text`, in closing order
pub fn scan_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    // Offsets of `{` still waiting for their `}`
    let mut pending: SmallVec<[usize; 8]> = SmallVec::new();
    let mut armed = false;

    for (index, ch) in text.char_indices() {
        match ch {
            PREFIX => {
                armed = true;
                continue;
            }
            OPEN => {
                if armed {
                    pending.push(index);
                }
            }
            CLOSE => {
                if let Some(start) = pending.pop() {
                    spans.push(Span::new(start, index, &text[start + 1..index]));
                }
            }
            _ => {}
        }

        armed = false;
    }

    spans
}
