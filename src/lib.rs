//! Longest common subsequence (LCS) between two strings, solved two ways:
//! a top-down memoized recursion that also counts how often each subproblem
//! is requested, and a bottom-up table build that reconstructs one concrete
//! subsequence. [`compute()`](compute::compute) runs both and returns
//! length, subsequence, and the visit counts together.

pub mod compute;
pub mod memoized;
pub mod stats;
pub mod tabulated;

pub use compute::{compute, LcsResult};
pub use memoized::{lcs_length, lcs_length_with_stats, VisitCounts};
pub use stats::CacheStats;
pub use tabulated::reconstruct_lcs;
