//! Ordered, append-only binding storage

use super::types::{Binding, BindingError, BindingResult, CaseSensitivity};

/// Ordered binding storage.
///
/// Bindings keep their insertion order and are never deduplicated: when two
/// bindings select the same placeholder, the one stored first wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingStore {
    bindings: Vec<Binding>,
}

impl BindingStore {
    /// Create an empty binding store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding from nullable parts.
    ///
    /// Fails when the pattern is absent or empty, or when the value is
    /// absent. An empty value is accepted.
    pub fn store(
        &mut self,
        pattern: Option<&str>,
        value: Option<&str>,
        case_sensitive: Option<bool>,
    ) -> BindingResult<()> {
        let pattern = pattern.ok_or(BindingError::EmptyPattern)?;
        let value = value.ok_or_else(|| BindingError::MissingValue(pattern.to_string()))?;

        self.insert(pattern, value, CaseSensitivity::from_flag(case_sensitive))
    }

    /// Append a binding
    pub fn insert(
        &mut self,
        pattern: impl Into<String>,
        value: impl Into<String>,
        case_sensitivity: CaseSensitivity,
    ) -> BindingResult<()> {
        let pattern = pattern.into();

        if pattern.is_empty() {
            tracing::debug!("Rejected binding with empty pattern");
            return Err(BindingError::EmptyPattern);
        }

        self.bindings
            .push(Binding::new(pattern, value.into(), case_sensitivity));

        Ok(())
    }

    /// Get a binding by insertion index
    pub fn get(&self, index: usize) -> Option<&Binding> {
        self.bindings.get(index)
    }

    /// Iterate bindings in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Binding> {
        self.bindings.iter()
    }

    /// Get the number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Copy of the current bindings, in order.
    ///
    /// Resolution works against a snapshot so later inserts cannot affect a
    /// run that is already in progress.
    pub fn snapshot(&self) -> Vec<Binding> {
        self.bindings.clone()
    }
}

impl<'a> IntoIterator for &'a BindingStore {
    type Item = &'a Binding;
    type IntoIter = std::slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
