//! Analyzer configuration.

/// What to do when a leaf already declared with one status is declared
/// again with the other.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ConflictPolicy {
    /// The later declaration replaces the earlier one. A warning is logged.
    #[default]
    LastWriterWins,
    /// Fail with [`AnalysisError::ConflictingMandatory`](crate::AnalysisError::ConflictingMandatory).
    Reject,
}

/// Configuration for input-detail analysis.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct AnalyzerConfig {
    /// Handling of leaves declared both mandatory and optional.
    pub conflict_policy: ConflictPolicy,
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject conflicting declarations instead of overwriting them.
    pub fn strict() -> Self {
        Self::default().with_conflict_policy(ConflictPolicy::Reject)
    }

    #[must_use]
    pub fn with_conflict_policy(mut self, conflict_policy: ConflictPolicy) -> Self {
        self.conflict_policy = conflict_policy;
        self
    }
}
