// 🌳 Account Hierarchy - derive chart-of-accounts paths from account numbers
// "1020" → 1:10:102:1020, "6570.001" → 6:65:657:6570:6570.001

/// Derives the ordered hierarchy segments for an account number.
///
/// The number is split on the first `.` into a main part and an optional
/// decimal suffix. Every prefix of the main part becomes one segment, and if
/// a suffix exists the full number is appended as one final segment:
///
/// - `"1020"` → `["1", "10", "102", "1020"]`
/// - `"6570.001"` → `["6", "65", "657", "6570", "6570.001"]`
///
/// Input is trimmed first. An empty (or whitespace-only) input yields no
/// segments; every non-empty input yields at least one.
pub fn derive_hierarchy(account_number: &str) -> Vec<String> {
    let number = account_number.trim();
    if number.is_empty() {
        return Vec::new();
    }

    let main_part = number.split('.').next().unwrap_or("");
    let has_suffix = main_part.len() < number.len();

    let mut segments = Vec::with_capacity(main_part.len() + usize::from(has_suffix));
    let mut prefix = String::with_capacity(main_part.len());
    for ch in main_part.chars() {
        prefix.push(ch);
        segments.push(prefix.clone());
    }

    if has_suffix {
        segments.push(number.to_string());
    }

    segments
}

/// Renders the hierarchy as a colon-joined path, the display form used by
/// account views. `"1020"` → `"1:10:102:1020"`.
pub fn hierarchy_path(account_number: &str) -> String {
    derive_hierarchy(account_number).join(":")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_account_number() {
        assert_eq!(derive_hierarchy("1020"), ["1", "10", "102", "1020"]);
    }

    #[test]
    fn test_account_number_with_decimal_suffix() {
        assert_eq!(
            derive_hierarchy("6570.001"),
            ["6", "65", "657", "6570", "6570.001"]
        );
    }

    #[test]
    fn test_dotless_numbers_yield_one_segment_per_digit() {
        for number in ["1", "42", "999", "10200", "658000"] {
            let segments = derive_hierarchy(number);
            assert_eq!(segments.len(), number.len(), "number {}", number);
            assert_eq!(segments.last().unwrap(), number);
        }
    }

    #[test]
    fn test_single_character() {
        assert_eq!(derive_hierarchy("9"), ["9"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(derive_hierarchy("").is_empty());
        assert!(derive_hierarchy("   ").is_empty());
        assert_eq!(hierarchy_path(""), "");
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(derive_hierarchy("  1020 "), ["1", "10", "102", "1020"]);
    }

    #[test]
    fn test_suffix_only_input() {
        // No main part to take prefixes from, but derivation stays total
        assert_eq!(derive_hierarchy(".001"), [".001"]);
    }

    #[test]
    fn test_multiple_dots_keep_full_number_as_tail() {
        assert_eq!(
            derive_hierarchy("6570.0.1"),
            ["6", "65", "657", "6570", "6570.0.1"]
        );
    }

    #[test]
    fn test_colon_joined_path() {
        assert_eq!(hierarchy_path("1020"), "1:10:102:1020");
        assert_eq!(hierarchy_path("6570.001"), "6:65:657:6570:6570.001");
    }
}
