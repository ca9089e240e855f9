//! String and token-set similarity metrics
//!
//! Jaro and Jaro-Winkler over characters, Jaccard over token sets.
//! The Jaro matcher uses a greedy windowed scan: the first unclaimed
//! equal character within the window wins, not an optimal alignment.
//! Escalation thresholds are calibrated against the greedy numbers, so
//! the scan order is part of the contract here.

use crate::normalize::normalize;
use std::collections::HashSet;

/// Winkler prefix scaling factor.
const PREFIX_WEIGHT: f64 = 0.1;
/// Longest common prefix that earns the Winkler boost.
const MAX_PREFIX: usize = 4;

/// Jaro similarity between two raw strings, in `[0, 1]`.
///
/// Equal strings short-circuit to `1.0` before the empty check, so two
/// empty strings are a perfect match; one empty side scores `0.0`.
pub fn jaro(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let len_a = a_chars.len();
    let len_b = b_chars.len();

    // Matching window: floor(max_len / 2) - 1, floored at zero.
    let window = (len_a.max(len_b) / 2).saturating_sub(1);

    let mut a_matched = vec![false; len_a];
    let mut b_matched = vec![false; len_b];
    let mut matches = 0usize;

    for i in 0..len_a {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(len_b);
        for j in start..end {
            if b_matched[j] || a_chars[i] != b_chars[j] {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let mut transposed = 0usize;
    let mut k = 0usize;
    for i in 0..len_a {
        if !a_matched[i] {
            continue;
        }
        while !b_matched[k] {
            k += 1;
        }
        if a_chars[i] != b_chars[k] {
            transposed += 1;
        }
        k += 1;
    }
    let transpositions = (transposed / 2) as f64;

    let m = matches as f64;
    (m / len_a as f64 + m / len_b as f64 + (m - transpositions) / m) / 3.0
}

/// Jaro-Winkler similarity between two raw strings, in `[0, 1]`.
///
/// Both inputs are normalized first, so formatting variants of the
/// same text ("St" vs "Street") compare as perfect matches. A shared
/// prefix of up to four characters boosts the base score toward `1.0`.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    let a_norm = normalize(a);
    let b_norm = normalize(b);
    let base = jaro(&a_norm, &b_norm);

    let prefix = a_norm
        .chars()
        .zip(b_norm.chars())
        .take(MAX_PREFIX)
        .take_while(|(x, y)| x == y)
        .count();

    base + prefix as f64 * PREFIX_WEIGHT * (1.0 - base)
}

/// Jaccard similarity over two token lists, deduplicated into sets.
///
/// Two empty sets are vacuously identical (`1.0`); one empty set
/// against a non-empty one scores `0.0`.
pub fn jaccard(a_tokens: &[String], b_tokens: &[String]) -> f64 {
    let a: HashSet<&str> = a_tokens.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b_tokens.iter().map(String::as_str).collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(&b).count() as f64;
    let union = a.union(&b).count() as f64;
    intersection / union
}
