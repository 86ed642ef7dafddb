//! Domain layer modules
//!
//! This module contains the template resolution logic:
//! - `template`: Binding store, placeholder scanning and substitution

pub mod template;
