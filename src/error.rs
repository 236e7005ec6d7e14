//! Error handling utilities shared across the crate.

use thiserror::Error;

/// Convenient result type used throughout the crate.
pub type Result<T, E = SubvocError> = std::result::Result<T, E>;

/// Domain-specific error describing fatal failures during trainer construction.
///
/// Rejecting a candidate piece is *not* an error; it is the routine `false`
/// branch of [`PieceValidator::is_valid`](crate::PieceValidator::is_valid).
/// Everything in this enum is a construction-time hard failure: a trainer
/// built on an inconsistent reserved-id layout would persist a vocabulary
/// whose ids disagree with its special tokens, so callers must propagate
/// these instead of continuing.
#[derive(Debug, Error)]
pub enum SubvocError {
    /// Trainer configuration failed validation or violates a reserved-id invariant.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Catch-all variant for invariants that should not occur.
    #[error("internal error: {0}")]
    Internal(String),
}
