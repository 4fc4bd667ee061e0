//! Error types for rule construction and collection editing

use landmark_core::OrientationMark;
use thiserror::Error;

/// Errors raised while building rules or editing a collection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    /// Parameter count or type does not fit the rule kind.
    #[error("Malformed {kind} rule: {reason}")]
    Malformed { kind: String, reason: String },

    /// Rule kind name not recognised.
    #[error("Unknown rule type '{0}'")]
    UnknownKind(String),

    /// Profile kind name not recognised.
    #[error("Unknown profile kind '{0}'")]
    UnknownProfileKind(String),

    /// Edits addressed by orientation mark need the mark to be bound.
    #[error("Orientation mark {0} is not bound to a landmark")]
    UnboundMark(OrientationMark),
}

impl RuleError {
    pub(crate) fn malformed(kind: impl ToString, reason: impl Into<String>) -> Self {
        RuleError::Malformed {
            kind: kind.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the error describes an unreadable rule definition.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            RuleError::Malformed { .. }
                | RuleError::UnknownKind(_)
                | RuleError::UnknownProfileKind(_)
        )
    }
}

/// Result type alias for rule operations
pub type Result<T> = std::result::Result<T, RuleError>;
