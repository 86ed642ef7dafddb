//! Resolution order for discovered placeholders

use super::types::Span;

/// Sort spans into processing order: shortest content first, ties broken by
/// leftmost start.
///
/// An enclosing placeholder's content contains its inner placeholders
/// verbatim, so it is always longer and therefore resolved after them.
/// Equal-length spans at different depths fall back to position only.
pub fn order_spans(mut spans: Vec<Span>) -> Vec<Span> {
    spans.sort_by_cached_key(|span| (span.content.chars().count(), span.start));
    spans
}
