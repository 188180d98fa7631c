//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent misuse of the tree structure.
/// These are independent of parsing, configuration and CLI concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unsupported operation: cannot {operation} children on a leaf")]
    UnsupportedOperation { operation: &'static str },

    #[error("cycle detected: branch is already reachable from the node being added")]
    CycleDetected,
}

/// Result type for tree operations.
pub type DomainResult<T> = Result<T, DomainError>;
