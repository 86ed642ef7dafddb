//! Substitution engine for `${...}` placeholders

use super::types::{Binding, Resolution, Span, UnmatchedPolicy};

/// Resolve ordered spans against bindings.
///
/// Spans are consumed in the given order. For each one the first binding
/// that matches wins; its value replaces the whole `${...}` text. Unmatched
/// placeholders are kept or removed according to `policy`. After every
/// change of buffer length the spans still waiting are rebased so their
/// offsets and content describe the new buffer.
pub fn substitute(
    text: &str,
    mut spans: Vec<Span>,
    bindings: &[Binding],
    policy: UnmatchedPolicy,
) -> Resolution {
    let mut buffer = text.to_string();
    let mut replaced = 0;

    for index in 0..spans.len() {
        let (done, waiting) = spans.split_at_mut(index + 1);
        let current = &done[index];

        let replacement = match bindings.iter().find(|b| b.matches(&current.content)) {
            Some(binding) => {
                tracing::trace!(
                    content = %current.content,
                    pattern = %binding.pattern(),
                    "Placeholder matched"
                );
                replaced += 1;
                binding.value()
            }
            None => match policy {
                UnmatchedPolicy::Delete => {
                    tracing::trace!(content = %current.content, "Placeholder removed");
                    ""
                }
                UnmatchedPolicy::Keep => continue,
            },
        };

        buffer = splice(&buffer, current, replacement);
        rebase(&buffer, current, replacement.len(), waiting);
    }

    Resolution {
        output: buffer,
        replaced,
    }
}

/// Replace the placeholder text of `span` (`$`, `{`, content, `}`) with `value`
fn splice(buffer: &str, span: &Span, value: &str) -> String {
    let head = &buffer[..span.start - 1];
    let tail = &buffer[span.end + 1..];

    let mut result = String::with_capacity(head.len() + value.len() + tail.len());
    result.push_str(head);
    result.push_str(value);
    result.push_str(tail);
    result
}

/// Move waiting spans to match a buffer where `resolved` became `inserted`
/// bytes of literal text
fn rebase(buffer: &str, resolved: &Span, inserted: usize, waiting: &mut [Span]) {
    let removed = resolved.placeholder_len();

    for span in waiting {
        if span.encloses(resolved) {
            span.end = span.end + inserted - removed;
            span.content = buffer[span.start + 1..span.end].to_string();
        } else if span.start > resolved.end {
            span.start = span.start + inserted - removed;
            span.end = span.end + inserted - removed;
        }
    }
}
