//! Error types for Siftable.

use std::fmt;

use crate::registry::CompositeKind;

/// The main error type for Siftable operations.
///
/// Normal filter operation is infallible; errors arise only from
/// misconfiguration of the instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A refresh capability is already registered for this composite kind.
    DuplicateRefreshTarget(CompositeKind),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRefreshTarget(kind) => {
                write!(f, "a refresh target is already registered for {kind}")
            }
        }
    }
}

impl std::error::Error for FilterError {}

/// A specialized Result type for Siftable operations.
pub type Result<T> = std::result::Result<T, FilterError>;
