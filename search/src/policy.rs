//! Search policy types.

use crate::error::SearchError;

/// Per-invocation search configuration.
///
/// The default policy is unbounded: a search over an infinite state space
/// without a reachable goal runs until memory is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on node expansions. `None` means no cap.
    pub max_expansions: Option<u64>,
    /// Run problem callbacks under `catch_unwind` and report panics as
    /// [`SearchError::ProblemPanicked`] instead of unwinding through the caller.
    pub catch_panics: bool,
}

impl SearchPolicy {
    /// Policy with an expansion cap and default everything else.
    #[must_use]
    pub fn with_max_expansions(limit: u64) -> Self {
        Self {
            max_expansions: Some(limit),
            ..Self::default()
        }
    }

    /// Pre-flight validation.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is
    /// `Some(0)`, which could never expand even the start state.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: None,
            catch_panics: true,
        }
    }
}
