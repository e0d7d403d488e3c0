//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent lookups of things a practice does not know about.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown machine type: {0}")]
    UnknownMachine(String),

    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    #[error("Unknown notification type: {0}")]
    UnknownChannel(String),

    #[error("Unknown principle: {0}")]
    UnknownPrinciple(String),
}
