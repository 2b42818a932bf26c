//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the tree generation rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Too many nodes for level {levels}! ({nodes} requested, at most {max} fit)")]
    Capacity { levels: u32, nodes: usize, max: usize },

    #[error("unknown traversal order: {0}")]
    UnknownOrder(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
