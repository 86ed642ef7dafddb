//! Template evaluation entry points and matching-mode policy

use super::ordering::order_spans;
use super::scanner::scan_spans;
use super::store::BindingStore;
use super::substitution::substitute;
use super::types::{Binding, MatchingMode, Resolution, Span, UnmatchedPolicy};

/// Stateless template evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateEngine;

impl TemplateEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a template from nullable inputs.
    ///
    /// - No template: returns `None`.
    /// - Empty template or no binding store: returns the template unchanged.
    /// - Unknown or missing mode name: behaves as `delete-unmatched`.
    pub fn evaluate(
        &self,
        template: Option<&str>,
        store: Option<&BindingStore>,
        mode: Option<&str>,
    ) -> Option<String> {
        let template = template?;

        let Some(store) = store.filter(|_| !template.is_empty()) else {
            return Some(template.to_string());
        };

        Some(self.render(template, store, MatchingMode::from_name(mode)).output)
    }

    /// Resolve every placeholder in `template` and report how many were
    /// replaced by a binding
    pub fn render(&self, template: &str, store: &BindingStore, mode: MatchingMode) -> Resolution {
        let bindings = store.snapshot();
        let spans = order_spans(scan_spans(template));

        tracing::debug!(
            mode = %mode,
            placeholders = spans.len(),
            bindings = bindings.len(),
            "Resolving template"
        );

        match mode {
            MatchingMode::KeepUnmatched => {
                substitute(template, spans, &bindings, UnmatchedPolicy::Keep)
            }
            MatchingMode::DeleteUnmatched => {
                substitute(template, spans, &bindings, UnmatchedPolicy::Delete)
            }
            MatchingMode::Optimization => optimize(template, spans, &bindings),
        }
    }
}

/// Run both unmatched policies on independent copies and keep the delete
/// result only when it replaces strictly more placeholders
fn optimize(template: &str, spans: Vec<Span>, bindings: &[Binding]) -> Resolution {
    let keep = substitute(template, spans.clone(), bindings, UnmatchedPolicy::Keep);
    let delete = substitute(template, spans, bindings, UnmatchedPolicy::Delete);

    let winner = if delete.replaced > keep.replaced {
        (UnmatchedPolicy::Delete, delete)
    } else {
        (UnmatchedPolicy::Keep, keep)
    };

    tracing::debug!(policy = ?winner.0, replaced = winner.1.replaced, "Optimization picked policy");

    winner.1
}

/// Evaluate with a default [`TemplateEngine`]
pub fn evaluate(
    template: Option<&str>,
    store: Option<&BindingStore>,
    mode: Option<&str>,
) -> Option<String> {
    TemplateEngine::new().evaluate(template, store, mode)
}
