//! Template types and error definitions

use std::fmt;

use thiserror::Error;

/// Binding-specific error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("Invalid binding: pattern must not be empty")]
    EmptyPattern,

    #[error("Invalid binding: missing value for pattern '{0}'")]
    MissingValue(String),
}

/// Result type for binding operations
pub type BindingResult<T> = Result<T, BindingError>;

/// Case handling requested when a binding was stored.
///
/// `Insensitive` and `Unspecified` match identically, but they are kept apart
/// so two bindings that differ only in this flag are still different bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseSensitivity {
    /// Placeholder text must match the pattern's case exactly
    Sensitive,
    /// Case is ignored
    Insensitive,
    /// No flag was given; case is ignored
    #[default]
    Unspecified,
}

impl CaseSensitivity {
    /// Map a nullable flag onto the three states
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => Self::Sensitive,
            Some(false) => Self::Insensitive,
            None => Self::Unspecified,
        }
    }

    pub fn is_sensitive(self) -> bool {
        matches!(self, Self::Sensitive)
    }
}

/// A stored `(pattern, value, case sensitivity)` association.
///
/// Only constructed through [`BindingStore`](super::BindingStore), which
/// guarantees the pattern is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binding {
    pattern: String,
    value: String,
    case_sensitivity: CaseSensitivity,
}

impl Binding {
    pub(crate) fn new(pattern: String, value: String, case_sensitivity: CaseSensitivity) -> Self {
        Self {
            pattern,
            value,
            case_sensitivity,
        }
    }

    /// Text compared against placeholder content
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Replacement text (may be empty)
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity
    }

    /// Check whether placeholder content selects this binding.
    ///
    /// All whitespace is stripped from both sides before comparing, so
    /// `${first name}`, `${firstname}` and `${ first\tname }` are equivalent.
    pub fn matches(&self, content: &str) -> bool {
        let content = strip_whitespace(content);
        let pattern = strip_whitespace(&self.pattern);

        if self.case_sensitivity.is_sensitive() {
            content == pattern
        } else {
            content.to_lowercase() == pattern.to_lowercase()
        }
    }
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// A located `${...}` placeholder in the working buffer.
///
/// `start` is the byte offset of the opening `{` (the `$` sits right before
/// it) and `end` the offset of the matching `}`. Offsets and content are
/// rebased in place while other placeholders are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub content: String,
}

impl Span {
    pub fn new(start: usize, end: usize, content: impl Into<String>) -> Self {
        Self {
            start,
            end,
            content: content.into(),
        }
    }

    /// Whether `other` lies strictly inside this span
    pub fn encloses(&self, other: &Span) -> bool {
        self.start < other.start && self.end > other.end
    }

    /// Bytes taken by the whole placeholder, delimiters included
    pub fn placeholder_len(&self) -> usize {
        self.content.len() + 3
    }
}

/// Output of one resolution run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved text
    pub output: String,

    /// Placeholders replaced by a binding value (deletions are not counted)
    pub replaced: usize,
}

/// What happens to a placeholder no binding matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmatchedPolicy {
    /// Leave the placeholder text untouched
    Keep,
    /// Remove the placeholder and its delimiters
    Delete,
}

/// Named matching modes accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchingMode {
    KeepUnmatched,
    #[default]
    DeleteUnmatched,
    /// Run both policies and keep whichever replaces more placeholders
    Optimization,
}

impl MatchingMode {
    pub const KEEP_UNMATCHED: &'static str = "keep-unmatched";
    pub const DELETE_UNMATCHED: &'static str = "delete-unmatched";
    pub const OPTIMIZATION: &'static str = "optimization";

    /// Resolve a mode name. Names are case-sensitive; anything unknown,
    /// including no name at all, means `delete-unmatched`.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(Self::KEEP_UNMATCHED) => Self::KeepUnmatched,
            Some(Self::OPTIMIZATION) => Self::Optimization,
            _ => Self::DeleteUnmatched,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::KeepUnmatched => Self::KEEP_UNMATCHED,
            Self::DeleteUnmatched => Self::DELETE_UNMATCHED,
            Self::Optimization => Self::OPTIMIZATION,
        }
    }
}

impl fmt::Display for MatchingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
