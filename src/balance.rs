// 💰 Balance Aggregator - render multi-commodity balances for display

use indexmap::IndexMap;

/// Formats a commodity→amount map as `"CHF 1000.50, USD 500.25"`.
///
/// Amounts are rendered with exactly two decimal digits using Rust's default
/// float formatting (round to nearest, ties to even on the exact binary
/// value). Entries join with `", "` in the map's insertion order, which is
/// why the input is an [`IndexMap`] and not an unordered map. An empty map
/// yields the empty string.
pub fn format_balances(balances: &IndexMap<String, f64>) -> String {
    balances
        .iter()
        .map(|(code, amount)| format!("{} {:.2}", code, amount))
        .collect::<Vec<String>>()
        .join(", ")
}

// ============================================================================
// TESTS
// ============================================================================
