//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime outcomes
//! (goal reached, frontier exhausted, budget exhaustion) are expressed via
//! [`crate::graph::TerminationReasonV1`] and always produce a
//! `SearchGraphV1` audit trail.

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before search execution begins. No `SearchGraphV1`
/// is produced because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The policy combines an option with a strategy that cannot honor it.
    UnsupportedPolicyMode { detail: String },
    /// The policy is self-contradictory regardless of strategy.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedPolicyMode { detail } => {
                write!(f, "unsupported policy mode: {detail}")
            }
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
