//! Property-based tests for screening invariants
//!
//! These tests use proptest to verify critical invariants:
//! - Exactly two candidates per watchlist entry, payer and beneficiary
//! - Every score and sub-score stays within [0, 1]
//! - Candidates are sorted best-first and the head is the reported best
//! - The decision always follows the sanction-override/threshold rule
//! - The sanction flag and the reason lines agree

use proptest::prelude::*;
use screening_engine::{decide, ScreeningEngine, Transaction};

/// Strategy for party names, occasionally close to seeded entries
fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z][A-Za-z ]{0,20}",
        Just("Zhang Wei".to_string()),
        Just("Mohammed Al-Hameed".to_string()),
        Just("Global Trading Limited".to_string()),
    ]
}

/// Strategy for addresses, occasionally mentioning sanctioned places
fn address_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9 ,\\.]{0,28}",
        Just("PO Box 12345, Dubai, UAE".to_string()),
        Just("Kreschatyk 22, Kyiv, Ukraine".to_string()),
        Just("Karachi, Pakistan".to_string()),
    ]
}

/// Strategy for declared countries: codes, names, misspellings, blanks
fn country_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z]{2}",
        Just("Ukraine".to_string()),
        Just("ukraise".to_string()),
        Just("South Korea".to_string()),
        Just("Germany".to_string()),
        Just(String::new()),
    ]
}

/// Strategy for dates of birth: valid, malformed, or absent
fn dob_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("1978-04-09".to_string()),
        Just("1990-02-01".to_string()),
        Just("31-12-1990".to_string()),
        "[0-9]{4}-[0-9]{2}-[0-9]{2}",
    ])
}

fn party_strategy() -> impl Strategy<Value = (String, String, String, Option<String>)> {
    (
        name_strategy(),
        address_strategy(),
        country_strategy(),
        dob_strategy(),
    )
}

/// Strategy for full screening payloads
fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (party_strategy(), party_strategy()).prop_map(|(payer, benef)| Transaction {
        payer_name: payer.0,
        payer_address: payer.1,
        payer_country: payer.2,
        payer_dob: payer.3,
        benef_name: benef.0,
        benef_address: benef.1,
        benef_country: benef.2,
        benef_dob: benef.3,
        amount: rust_decimal::Decimal::new(100_000, 2),
        currency: "USD".to_string(),
        reference: "PROP-TEST".to_string(),
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: every watchlist entry yields a payer and a beneficiary candidate
    #[test]
    fn prop_two_candidates_per_entry(txn in transaction_strategy()) {
        let engine = ScreeningEngine::default();
        let result = engine.screen(&txn);
        prop_assert_eq!(result.candidates.len(), 2 * engine.watchlist().len());
    }

    /// Property: all scores and sub-scores stay within [0, 1]
    #[test]
    fn prop_scores_within_range(txn in transaction_strategy()) {
        let engine = ScreeningEngine::default();
        let result = engine.screen(&txn);

        prop_assert!((0.0..=1.0).contains(&result.best_score));
        for candidate in &result.candidates {
            prop_assert!((0.0..=1.0).contains(&candidate.score));
            prop_assert!((0.0..=1.0).contains(&candidate.breakdown.name));
            prop_assert!((0.0..=1.0).contains(&candidate.breakdown.address));
            prop_assert!((0.0..=1.0).contains(&candidate.breakdown.dob));
            let bonus = candidate.breakdown.country_bonus;
            prop_assert!(bonus == 0.0 || bonus == 0.05);
        }
    }

    /// Property: candidates are sorted best-first and the head is the best
    #[test]
    fn prop_best_is_head_of_sorted_list(txn in transaction_strategy()) {
        let engine = ScreeningEngine::default();
        let result = engine.screen(&txn);

        for pair in result.candidates.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }

        let best = result.best.as_ref().unwrap();
        let head = &result.candidates[0];
        prop_assert_eq!(best.score, head.score);
        prop_assert_eq!(best.role, head.role);
        prop_assert_eq!(&best.entry, &head.entry);
        prop_assert_eq!(best.score, result.best_score);
    }

    /// Property: the decision always matches the published rule
    #[test]
    fn prop_decision_follows_rule(txn in transaction_strategy()) {
        let engine = ScreeningEngine::default();
        let result = engine.screen(&txn);

        let expected = decide(
            result.sanction_flag,
            result.best_score,
            engine.escalation_threshold(),
        );
        prop_assert_eq!((result.decision, result.reason), expected);
    }

    /// Property: the sanction flag and the reason lines agree
    #[test]
    fn prop_sanction_flag_iff_reasons(txn in transaction_strategy()) {
        let engine = ScreeningEngine::default();
        let result = engine.screen(&txn);
        prop_assert_eq!(result.sanction_flag, !result.sanction_reasons.is_empty());
    }
}
