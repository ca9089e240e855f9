//! Composite risk scoring
//!
//! Blends name, address and date-of-birth similarity with a flat
//! declared-country bonus into one score per (party, watchlist entry)
//! pair. Weights sum to 1.0 with the bonus included; the composite is
//! clamped there anyway.

use crate::country::{normalize_country, SanctionScreener};
use crate::types::{Party, ScoreBreakdown, WatchlistEntry};
use chrono::NaiveDate;
use matching_core::{jaccard, jaro_winkler, tokenize};

/// Weight of the best name similarity in the composite score.
pub const NAME_WEIGHT: f64 = 0.60;
/// Weight of the blended address similarity.
pub const ADDRESS_WEIGHT: f64 = 0.30;
/// Weight of an exact date-of-birth match.
pub const DOB_WEIGHT: f64 = 0.05;
/// Flat bonus for an exactly matching declared country.
pub const COUNTRY_BONUS: f64 = 0.05;

/// Token overlap counts for less than the character metric when
/// ranking candidate names.
const NAME_JACCARD_SCALE: f64 = 0.5;
/// Jaro-Winkler share of the address blend.
const ADDRESS_JW_WEIGHT: f64 = 0.4;
/// Token-set share of the address blend.
const ADDRESS_JACCARD_WEIGHT: f64 = 0.6;

/// Best name similarity across the entry's primary name and aliases.
///
/// Every candidate name competes twice: once on Jaro-Winkler and once
/// on scaled token overlap; the overall maximum wins.
pub fn name_similarity(input_name: &str, entry: &WatchlistEntry) -> f64 {
    let input_tokens = tokenize(input_name);
    let mut best = 0.0f64;
    for candidate in std::iter::once(&entry.name).chain(entry.aliases.iter()) {
        best = best.max(jaro_winkler(input_name, candidate));
        best = best.max(NAME_JACCARD_SCALE * jaccard(&input_tokens, &tokenize(candidate)));
    }
    best
}

/// Blended address similarity: character-level and token-level.
pub fn address_similarity(input_address: &str, entry_address: &str) -> f64 {
    let jw = jaro_winkler(input_address, entry_address);
    let overlap = jaccard(&tokenize(input_address), &tokenize(entry_address));
    ADDRESS_JW_WEIGHT * jw + ADDRESS_JACCARD_WEIGHT * overlap
}

/// Exact calendar match on `YYYY-MM-DD` dates, or nothing.
///
/// Absent or unparsable dates silently score zero; a malformed dob is
/// a data-quality issue, not a screening failure.
pub fn dob_similarity(input_dob: Option<&str>, entry_dob: Option<&str>) -> f64 {
    match (input_dob, entry_dob) {
        (Some(a), Some(b)) => match (parse_dob(a), parse_dob(b)) {
            (Some(d1), Some(d2)) if d1 == d2 => 1.0,
            _ => 0.0,
        },
        _ => 0.0,
    }
}

fn parse_dob(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Flat bonus when both declared countries are present and equal after
/// narrow normalization.
///
/// The alias table is deliberately not consulted here: the bonus
/// rewards an exactly declared country, while sanction detection
/// separately catches the known misspellings.
pub fn country_bonus(input_country: &str, entry_country: &str) -> f64 {
    if input_country.is_empty() || entry_country.is_empty() {
        return 0.0;
    }
    if normalize_country(input_country) == normalize_country(entry_country) {
        COUNTRY_BONUS
    } else {
        0.0
    }
}

/// Score one party against one watchlist entry.
///
/// Returns the clamped composite score plus the full breakdown. The
/// sanction-detector fields describe the input party only, so they
/// repeat across entries for a given party.
pub fn score_party(
    party: &Party,
    entry: &WatchlistEntry,
    screener: &SanctionScreener,
) -> (f64, ScoreBreakdown) {
    let name = name_similarity(&party.name, entry);
    let address = address_similarity(&party.address, &entry.address);
    let dob = dob_similarity(party.dob.as_deref(), entry.dob.as_deref());
    let bonus = country_bonus(&party.country, &entry.country);

    let total =
        (NAME_WEIGHT * name + ADDRESS_WEIGHT * address + DOB_WEIGHT * dob + bonus).min(1.0);

    let (party_country_sanctioned, party_country_name) =
        screener.is_sanctioned_country(&party.country);
    let (address_sanction_hit, address_sanction_match) =
        screener.address_mentions_sanctioned_country(&party.address);

    let breakdown = ScoreBreakdown {
        name,
        address,
        dob,
        country_bonus: bonus,
        party_country_sanctioned,
        party_country_name,
        address_sanction_hit,
        address_sanction_match,
    };

    (total, breakdown)
}
