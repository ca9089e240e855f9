//! Property-based tests for matching invariants
//!
//! These tests use proptest to verify critical invariants:
//! - Normalization is idempotent and produces canonical spacing
//! - Tokens rejoin to exactly the normalized text
//! - All similarity metrics stay within [0, 1]
//! - Identical inputs always score a perfect match

use matching_core::{jaccard, jaro, jaro_winkler, normalize, tokenize};
use proptest::prelude::*;

/// Strategy for arbitrary short text, including unicode
fn text_strategy() -> impl Strategy<Value = String> {
    ".{0,40}"
}

/// Strategy for token lists
fn token_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9]{1,8}", 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: normalizing twice is the same as normalizing once
    #[test]
    fn prop_normalize_idempotent(s in text_strategy()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Property: normalized text has canonical spacing and no ASCII uppercase
    #[test]
    fn prop_normalize_canonical_form(s in text_strategy()) {
        let n = normalize(&s);
        prop_assert!(!n.contains("  "));
        prop_assert!(!n.starts_with(' ') && !n.ends_with(' '));
        prop_assert!(!n.chars().any(|c| c.is_ascii_uppercase()));
    }

    /// Property: tokens rejoined with single spaces equal the normalized text
    #[test]
    fn prop_tokens_rejoin(s in text_strategy()) {
        prop_assert_eq!(tokenize(&s).join(" "), normalize(&s));
    }

    /// Property: Jaro stays within [0, 1]
    #[test]
    fn prop_jaro_in_range(a in text_strategy(), b in text_strategy()) {
        let score = jaro(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    /// Property: Jaro-Winkler stays within [0, 1] and never undercuts Jaro
    #[test]
    fn prop_jaro_winkler_in_range(a in text_strategy(), b in text_strategy()) {
        let base = jaro(&normalize(&a), &normalize(&b));
        let score = jaro_winkler(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
        prop_assert!(score >= base - 1e-12);
    }

    /// Property: any string is a perfect match for itself
    #[test]
    fn prop_jaro_winkler_identity(s in text_strategy()) {
        prop_assert!((jaro_winkler(&s, &s) - 1.0).abs() < 1e-12);
    }

    /// Property: Jaccard is symmetric and within [0, 1]
    #[test]
    fn prop_jaccard_symmetric(a in token_list_strategy(), b in token_list_strategy()) {
        let ab = jaccard(&a, &b);
        let ba = jaccard(&b, &a);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(ab, ba);
    }
}
