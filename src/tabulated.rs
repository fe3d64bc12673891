//! Bottom-up LCS table and subsequence reconstruction.
//!
//! The table is built in full, never lazily: reconstruction walks it
//! backward from `(m, n)` and needs every cell reachable along the way.

/// Builds the `(m+1) x (n+1)` LCS length table for `a` and `b`.
///
/// Cell `(i, j)` holds the LCS length of the length-`i` prefix of `a` and
/// the length-`j` prefix of `b`; row and column 0 stay at the base-case
/// value 0 (empty prefix).
fn build_table(a: &[char], b: &[char]) -> Vec<Vec<usize>> {
    let m = a.len();
    let n = b.len();
    let mut dp = vec![vec![0; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    dp
}

/// Reconstructs and returns one longest common subsequence of `a` and `b`.
///
/// When several subsequences share the maximal length, the backward walk
/// decides which one is returned: on a cell where both neighbors carry the
/// same length it always steps toward a shorter `b` prefix (decrements `j`).
/// The choice is arbitrary but fixed, so the same inputs always produce the
/// same string. Returns an empty string when there is no common symbol.
///
/// # Examples
///
/// ```
/// use lcs::reconstruct_lcs;
///
/// assert_eq!(reconstruct_lcs("ABCDGH", "AEDFHR"), "ADH");
/// assert_eq!(reconstruct_lcs("AGGTAB", "GXTXAYB"), "GTAB");
/// assert_eq!(reconstruct_lcs("ABC", ""), "");
/// ```
pub fn reconstruct_lcs(a: &str, b: &str) -> String {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let dp = build_table(&a_chars, &b_chars);

    // Walk back from dp[m][n]; symbols are discovered last-first.
    let mut i = a_chars.len();
    let mut j = b_chars.len();
    let mut subsequence = Vec::new();

    while i > 0 && j > 0 {
        if a_chars[i - 1] == b_chars[j - 1] {
            // This symbol is part of the LCS.
            subsequence.push(a_chars[i - 1]);
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] > dp[i][j - 1] {
            i -= 1;
        } else {
            // Tie-break: when dp[i-1][j] == dp[i][j-1], prefer decrementing
            // j. This fixes which of the equally long subsequences we emit.
            j -= 1;
        }
    }

    subsequence.reverse();
    subsequence.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks that `subseq` occurs in `s` in order, possibly with gaps.
    fn is_subsequence(subseq: &str, s: &str) -> bool {
        let mut it = s.chars();
        for c in subseq.chars() {
            if it.find(|&x| x == c).is_none() {
                return false;
            }
        }
        true
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(reconstruct_lcs("", ""), "");
        assert_eq!(reconstruct_lcs("ABC", ""), "");
        assert_eq!(reconstruct_lcs("", "XYZ"), "");
    }

    #[test]
    fn test_known_subsequences() {
        // Exact strings pinned down by the tie-break.
        assert_eq!(reconstruct_lcs("ABC", "AC"), "AC");
        assert_eq!(reconstruct_lcs("ABCDGH", "AEDFHR"), "ADH");
        assert_eq!(reconstruct_lcs("AGGTAB", "GXTXAYB"), "GTAB");
    }

    #[test]
    fn test_identical_inputs_reconstruct_to_themselves() {
        assert_eq!(reconstruct_lcs("BANANA", "BANANA"), "BANANA");
    }

    #[test]
    fn test_no_common_symbols() {
        assert_eq!(reconstruct_lcs("ABC", "XYZ"), "");
    }

    #[test]
    fn test_result_is_a_subsequence_of_both_inputs() {
        let a = "XMJYAUZ";
        let b = "MZJAWXU";
        let result = reconstruct_lcs(a, b);
        assert_eq!(result.chars().count(), 4);
        assert!(is_subsequence(&result, a));
        assert!(is_subsequence(&result, b));
    }

    #[test]
    fn test_table_base_rows_stay_zero() {
        let a: Vec<char> = "ABCB".chars().collect();
        let b: Vec<char> = "BDCB".chars().collect();
        let dp = build_table(&a, &b);
        assert!(dp[0].iter().all(|&cell| cell == 0));
        assert!(dp.iter().all(|row| row[0] == 0));
        assert_eq!(dp[a.len()][b.len()], 3); // "BCB"
    }
}
