//! Coordinator combining the memoized solver and the tabulating
//! reconstructor over the same pair of inputs.

use log::debug;

use crate::memoized::{lcs_length_with_stats, VisitCounts};
use crate::stats::CacheStats;
use crate::tabulated::reconstruct_lcs;

/// Everything one LCS computation produces: the length, one concrete
/// subsequence of that length, and the visit counts from the recursive
/// pass.
#[derive(Debug, Clone)]
pub struct LcsResult {
    pub length: usize,
    pub subsequence: String,
    pub visit_counts: VisitCounts,
}

impl LcsResult {
    /// Cache statistics for the recursive pass that produced this result.
    pub fn cache_stats(&self) -> CacheStats {
        CacheStats::from_visit_counts(&self.visit_counts)
    }
}

/// Computes the LCS of `a` and `b` with both strategies: the memoized
/// recursion supplies the length and the visit counts, the bottom-up table
/// supplies the subsequence.
///
/// The two passes are independent; the reconstructor builds its own table
/// rather than reusing the memo, so the visit counts describe the recursive
/// pass alone. Both must agree on the length.
///
/// # Examples
///
/// ```
/// use lcs::compute;
///
/// let result = compute("AGGTAB", "GXTXAYB");
/// assert_eq!(result.length, 4);
/// assert_eq!(result.subsequence, "GTAB");
/// assert_eq!(result.length, result.subsequence.chars().count());
/// ```
pub fn compute(a: &str, b: &str) -> LcsResult {
    let (length, visit_counts) = lcs_length_with_stats(a, b);
    let subsequence = reconstruct_lcs(a, b);
    debug_assert_eq!(length, subsequence.chars().count());

    let result = LcsResult {
        length,
        subsequence,
        visit_counts,
    };
    debug!(
        "compute: length={} cache=[{}]",
        result.length,
        result.cache_stats()
    );
    result
}
