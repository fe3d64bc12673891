//! Cache-efficiency statistics derived from the solver's visit counts.

use std::fmt;

use crate::memoized::VisitCounts;

/// Summary of how much work the memo saved during one recursive solve.
///
/// `total_calls` is the sum of all visit counts (every request of a
/// subproblem, cache hits included); `unique_subproblems` is the number of
/// distinct keys requested. The two are equal exactly when no subproblem
/// was ever re-requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub total_calls: usize,
    pub unique_subproblems: usize,
}

impl CacheStats {
    /// Derives the statistics from a visit-count map.
    ///
    /// # Examples
    ///
    /// ```
    /// use lcs::{lcs_length_with_stats, CacheStats};
    ///
    /// let (_, visits) = lcs_length_with_stats("AGGTAB", "GXTXAYB");
    /// let stats = CacheStats::from_visit_counts(&visits);
    /// assert!(stats.total_calls >= stats.unique_subproblems);
    /// ```
    pub fn from_visit_counts(visits: &VisitCounts) -> Self {
        Self {
            total_calls: visits.values().sum(),
            unique_subproblems: visits.len(),
        }
    }

    /// Fraction of calls that did real work: unique subproblems over total
    /// calls. 1.0 means every subproblem was requested exactly once; lower
    /// values mean the memo absorbed repeat requests. 0.0 for an empty map.
    pub fn efficiency(&self) -> f64 {
        if self.total_calls == 0 {
            return 0.0;
        }
        self.unique_subproblems as f64 / self.total_calls as f64
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} calls, {} unique subproblems, {:.2}% efficiency",
            self.total_calls,
            self.unique_subproblems,
            self.efficiency() * 100.0
        )
    }
}
