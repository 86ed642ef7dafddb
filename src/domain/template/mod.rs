//! `${...}` placeholder templates.
//!
//! This module provides:
//! - An ordered, append-only binding store (`pattern` -> `value`)
//! - Placeholder discovery with nesting (`${outer ${inner}}`)
//! - A substitution engine that resolves inner placeholders first and keeps
//!   enclosing placeholders in sync with the rewritten text
//! - Matching modes for placeholders no binding matches
//!
//! # Example
//!
//! ```
//! use template_engine::template::{BindingStore, CaseSensitivity, TemplateEngine};
//!
//! let mut store = BindingStore::new();
//! store.insert("fname", "Rose", CaseSensitivity::Insensitive)?;
//! store.insert("lname", "Tyler", CaseSensitivity::Insensitive)?;
//!
//! let engine = TemplateEngine::new();
//! let text = "${fname} ${lname} is ${age} years old";
//!
//! assert_eq!(
//!     engine.evaluate(Some(text), Some(&store), Some("keep-unmatched")).as_deref(),
//!     Some("Rose Tyler is ${age} years old")
//! );
//! assert_eq!(
//!     engine.evaluate(Some(text), Some(&store), Some("delete-unmatched")).as_deref(),
//!     Some("Rose Tyler is  years old")
//! );
//! # Ok::<(), template_engine::template::BindingError>(())
//! ```

mod engine;
mod ordering;
mod scanner;
mod store;
mod substitution;
mod types;

pub use engine::{evaluate, TemplateEngine};
pub use ordering::order_spans;
pub use scanner::scan_spans;
pub use store::BindingStore;
pub use substitution::substitute;
pub use types::{
    Binding, BindingError, BindingResult, CaseSensitivity, MatchingMode, Resolution, Span,
    UnmatchedPolicy,
};
