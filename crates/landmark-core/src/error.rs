//! Error types for landmark evaluation

use thiserror::Error;

use crate::landmark::{Landmark, OrientationMark};
use crate::profile::ProfileKind;

/// Failure to locate a landmark in a set of profiles.
///
/// Errors are reported per landmark. A failure for one landmark never
/// prevents the others of the same collection from being evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The rules narrowed the candidate mask down to nothing.
    #[error("No index matched the rules")]
    NoMatch,

    /// More than one candidate survived the last rule.
    #[error("Ambiguous match: {} candidates remain ({candidates:?})", candidates.len())]
    AmbiguousMatch {
        /// Surviving indices, ascending.
        candidates: Vec<usize>,
    },

    /// Rule sets bound to the same landmark resolved to different indices.
    #[error("Rule sets for landmark '{landmark}' disagree: {indices:?}")]
    InconsistentLandmark {
        landmark: Landmark,
        /// One resolved index per rule set, in rule-set order.
        indices: Vec<usize>,
    },

    /// A rule set targets a profile kind the nucleus does not provide.
    #[error("Profile {0} is not available")]
    MissingProfile(ProfileKind),

    /// Profiles must contain at least one sample.
    #[error("Profile {0} is empty")]
    EmptyProfile(ProfileKind),

    /// Profiles combined for one landmark must share the same index space.
    #[error("Profile {kind} has length {found}, expected {expected}")]
    ProfileLengthMismatch {
        kind: ProfileKind,
        expected: usize,
        found: usize,
    },

    /// The landmark has no rule sets; its position must be supplied externally.
    #[error("No rule sets defined for landmark '{0}'")]
    NoRuleSets(Landmark),

    /// The orientation mark is not bound to any landmark.
    #[error("Orientation mark {0} is not bound to a landmark")]
    UnboundMark(OrientationMark),
}

/// Result type alias for landmark evaluation
pub type Result<T> = std::result::Result<T, EvalError>;

/// Error when parsing one of the closed name sets (profile kinds,
/// orientation marks, axes, application types).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNameError {
    /// What was being parsed, e.g. `"orientation mark"`.
    pub expected: &'static str,
    pub name: String,
}

impl UnknownNameError {
    pub(crate) fn new(expected: &'static str, name: &str) -> Self {
        Self {
            expected,
            name: name.to_string(),
        }
    }
}

impl std::fmt::Display for UnknownNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown {}: '{}'", self.expected, self.name)
    }
}

impl std::error::Error for UnknownNameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_message_lists_candidates() {
        let err = EvalError::AmbiguousMatch {
            candidates: vec![3, 7],
        };
        assert_eq!(
            err.to_string(),
            "Ambiguous match: 2 candidates remain ([3, 7])"
        );
    }

    #[test]
    fn test_unknown_name_display() {
        let err = UnknownNameError::new("profile kind", "CURVATURE");
        assert_eq!(err.to_string(), "Unknown profile kind: 'CURVATURE'");
    }
}
