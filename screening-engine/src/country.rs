//! Country canonicalization and sanctioned-country detection
//!
//! Country fields get a narrower normalization than free text: case,
//! punctuation and spacing only, no street abbreviations. Canonical
//! names then pass through the alias table so known misspellings
//! ("Ukraise") land on the real country before any lookup.

use crate::config::ScreeningConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

static COUNTRY_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\.\,;:\-\(\)\[\]/\\]+").unwrap());

/// Narrow normalizer for country references.
pub fn normalize_country(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let lowered = s.trim().to_lowercase();
    let cleaned = COUNTRY_PUNCT.replace_all(&lowered, " ");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sanctioned-country lookup, built once at engine construction
///
/// The configured country list is canonicalized and deduplicated up
/// front, and each canonical name gets a precompiled whole-word
/// pattern so "iran" can never fire inside an unrelated longer word.
/// Detection iterates in configured order, so the reported match is
/// deterministic within a run.
pub struct SanctionScreener {
    aliases: HashMap<String, String>,
    sanctioned: Vec<(String, Regex)>,
}

impl SanctionScreener {
    pub fn new(config: &ScreeningConfig) -> Self {
        let aliases: HashMap<String, String> = config
            .country_aliases
            .iter()
            .map(|(k, v)| (normalize_country(k), normalize_country(v)))
            .collect();

        let mut sanctioned: Vec<(String, Regex)> = Vec::new();
        for raw in &config.sanctioned_countries {
            let canonical = resolve_with(&aliases, raw);
            if canonical.is_empty() || sanctioned.iter().any(|(name, _)| name == &canonical) {
                continue;
            }
            let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&canonical))).unwrap();
            sanctioned.push((canonical, pattern));
        }

        Self { aliases, sanctioned }
    }

    /// Canonical form of a country reference: normalized, then
    /// alias-resolved. Empty input stays empty.
    pub fn canonical_country(&self, s: &str) -> String {
        resolve_with(&self.aliases, s)
    }

    /// Test whether a declared country field names a sanctioned
    /// jurisdiction, returning the canonical name on a hit.
    pub fn is_sanctioned_country(&self, country_field: &str) -> (bool, Option<String>) {
        let canonical = self.canonical_country(country_field);
        if self.sanctioned.iter().any(|(name, _)| name == &canonical) {
            (true, Some(canonical))
        } else {
            (false, None)
        }
    }

    /// First sanctioned country mentioned as a whole word or phrase in
    /// the address text, if any.
    pub fn address_mentions_sanctioned_country(&self, address: &str) -> (bool, Option<String>) {
        let text = normalize_country(address);
        for (name, pattern) in &self.sanctioned {
            if pattern.is_match(&text) {
                debug!("Sanctioned country '{}' mentioned in address", name);
                return (true, Some(name.clone()));
            }
        }
        (false, None)
    }

    /// Canonical sanctioned-country names, in configured order.
    pub fn sanctioned_names(&self) -> Vec<&str> {
        self.sanctioned.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sanctioned.is_empty()
    }
}

fn resolve_with(aliases: &HashMap<String, String>, raw: &str) -> String {
    let normalized = normalize_country(raw);
    match aliases.get(&normalized) {
        Some(canonical) => canonical.clone(),
        None => normalized,
    }
}
