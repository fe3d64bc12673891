//! Top-down memoized LCS length solver.
//!
//! Alongside the memo itself, a second map counts how many times each
//! subproblem key was requested (cache hits included). The counts are
//! reporting data only; they never influence the computed length.

use std::collections::HashMap;

use log::debug;

/// Number of times each subproblem `(i, j)` was requested during one
/// top-level solve, keyed by prefix lengths into the two inputs.
pub type VisitCounts = HashMap<(usize, usize), usize>;

/// Memo and visit counter for one top-level solve. Owned by the entry
/// point and threaded through every recursive call as a single `&mut`
/// borrow; never recreated mid-descent.
struct MemoContext {
    memo: HashMap<(usize, usize), usize>,
    visits: VisitCounts,
}

impl MemoContext {
    fn new() -> Self {
        Self {
            memo: HashMap::new(),
            visits: VisitCounts::new(),
        }
    }
}

/// Returns the length of the longest common subsequence (LCS) between
/// `a` and `b`, computed by memoized recursion over prefix lengths.
///
/// # Examples
///
/// ```
/// use lcs::lcs_length;
///
/// assert_eq!(lcs_length("ABCDGH", "AEDFHR"), 3); // "ADH"
/// assert_eq!(lcs_length("AGGTAB", "GXTXAYB"), 4); // "GTAB"
/// assert_eq!(lcs_length("ABC", ""), 0);
/// ```
pub fn lcs_length(a: &str, b: &str) -> usize {
    lcs_length_with_stats(a, b).0
}

/// Returns the LCS length together with the per-subproblem visit counts
/// accumulated during the recursion.
///
/// Each entry maps a prefix-length pair `(i, j)` to the number of times
/// that subproblem was requested. A count above 1 means the memo served
/// that key from cache on the later requests.
///
/// # Examples
///
/// ```
/// use lcs::lcs_length_with_stats;
///
/// let (length, visits) = lcs_length_with_stats("ABC", "AC");
/// assert_eq!(length, 2);
/// // Every reachable subproblem is visited at least once.
/// assert!(visits.values().all(|&count| count >= 1));
/// ```
pub fn lcs_length_with_stats(a: &str, b: &str) -> (usize, VisitCounts) {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut ctx = MemoContext::new();
    let length = solve(&a_chars, &b_chars, a_chars.len(), b_chars.len(), &mut ctx);

    debug!(
        "lcs_length: m={} n={} length={} unique_subproblems={}",
        a_chars.len(),
        b_chars.len(),
        length,
        ctx.visits.len()
    );

    (length, ctx.visits)
}

/// Recursive core: LCS length of the length-`i` prefix of `a` and the
/// length-`j` prefix of `b`. Call depth is bounded by `i + j` since every
/// recursive step strictly decreases the sum.
fn solve(a: &[char], b: &[char], i: usize, j: usize, ctx: &mut MemoContext) -> usize {
    let key = (i, j);
    *ctx.visits.entry(key).or_insert(0) += 1;

    // Cache hit: return without recursing further.
    if let Some(&length) = ctx.memo.get(&key) {
        return length;
    }

    let length = if i == 0 || j == 0 {
        0
    } else if a[i - 1] == b[j - 1] {
        1 + solve(a, b, i - 1, j - 1, ctx)
    } else {
        solve(a, b, i - 1, j, ctx).max(solve(a, b, i, j - 1, ctx))
    };

    ctx.memo.insert(key, length);
    length
}
