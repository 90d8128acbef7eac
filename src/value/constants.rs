//! Symbolic constant resolution.
//!
//! String-valued attributes may reference a constant as `@name`. Components
//! resolve such references through a [`ConstantResolver`] before parsing. The
//! constant storage itself (themes, resources) lives outside this crate; the
//! [`ConstantTable`] here is a plain map for hosts and tests.

use std::collections::HashMap;

use crate::property::error::PropertyError;

// ---------------------------------------------------------------------------
// ConstantResolver
// ---------------------------------------------------------------------------

/// Looks up the text of a named constant.
///
/// `name` is passed without the leading `@`.
pub trait ConstantResolver: Send + Sync {
    /// Return the constant's text, or `None` if it is not defined.
    fn resolve(&self, name: &str) -> Option<String>;
}

/// A resolver that knows no constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConstants;

impl ConstantResolver for NoConstants {
    fn resolve(&self, _name: &str) -> Option<String> {
        None
    }
}

// ---------------------------------------------------------------------------
// ConstantTable
// ---------------------------------------------------------------------------

/// Case-insensitive name → text table.
#[derive(Debug, Clone, Default)]
pub struct ConstantTable {
    entries: HashMap<String, String>,
}

impl ConstantTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a constant (builder).
    pub fn with(mut self, name: &str, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    /// Define or replace a constant.
    pub fn insert(&mut self, name: &str, text: impl Into<String>) {
        self.entries.insert(name.to_ascii_lowercase(), text.into());
    }

    /// Number of defined constants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConstantResolver for ConstantTable {
    fn resolve(&self, name: &str) -> Option<String> {
        self.entries.get(&name.to_ascii_lowercase()).cloned()
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve `text` if it is a constant reference, following chained references
/// up to `max_depth` hops.
///
/// Text that does not start with `@` is returned trimmed and unchanged.
pub fn resolve_constants(
    text: &str,
    resolver: &dyn ConstantResolver,
    max_depth: usize,
) -> Result<String, PropertyError> {
    let mut current = text.trim().to_string();
    for _ in 0..=max_depth {
        let Some(name) = current.strip_prefix('@') else {
            return Ok(current);
        };
        match resolver.resolve(name) {
            Some(next) => current = next.trim().to_string(),
            None => {
                return Err(PropertyError::UnresolvedConstant {
                    name: name.to_string(),
                })
            }
        }
    }
    Err(PropertyError::UnresolvedConstant {
        name: text.trim().trim_start_matches('@').to_string(),
    })
}
