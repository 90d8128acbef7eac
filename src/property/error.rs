//! Errors from property coercion, shorthand parsing, and selection requests.

use crate::selection::SelectionError;

/// Errors from setting or parsing a property value.
///
/// Every variant is recoverable: the mutating call reports failure and the
/// previously stored value is left in place.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropertyError {
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    #[error("\"{tag}\" property value {value} is not compatible")]
    IncompatibleType { tag: String, value: String },
    #[error("invalid bounds value \"{literal}\" (needs 1 or 4 elements separated by comma)")]
    InvalidShorthand { literal: String },
    #[error("unresolved constant: @{name}")]
    UnresolvedConstant { name: String },
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

impl PropertyError {
    /// Shorthand for [`PropertyError::IncompatibleType`].
    pub fn incompatible(tag: &str, value: impl std::fmt::Debug) -> Self {
        Self::IncompatibleType {
            tag: tag.to_string(),
            value: format!("{value:?}"),
        }
    }
}
