use lcs::compute;

fn main() {
    let pairs = [("ABC", "AC"), ("ABCDGH", "AEDFHR"), ("AGGTAB", "GXTXAYB")];

    println!("{}", "=".repeat(50));
    println!("Longest Common Subsequence (LCS) demo");
    println!("{}", "=".repeat(50));

    for (a, b) in pairs {
        let result = compute(a, b);
        let stats = result.cache_stats();

        println!("\nString 1: '{}'", a);
        println!("String 2: '{}'", b);
        println!("LCS length: {}", result.length);
        println!("Subsequence: '{}'", result.subsequence);

        println!("\nCache statistics:");
        println!("Total recursive calls: {}", stats.total_calls);
        println!("Unique subproblems: {}", stats.unique_subproblems);
        println!("Cache efficiency: {:.2}%", stats.efficiency() * 100.0);
        println!("{}", "-".repeat(50));
    }
}
