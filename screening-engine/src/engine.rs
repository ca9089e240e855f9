//! Screening decision engine
//!
//! Scores both transaction parties against every watchlist entry,
//! aggregates country-level sanction hits, and renders the final
//! RELEASE or ESCALATE verdict with the full ranked candidate list.

use crate::config::ScreeningConfig;
use crate::country::SanctionScreener;
use crate::scorer::score_party;
use crate::types::{
    Candidate, Decision, DecisionReason, PartyRole, ScreeningResult, Transaction,
};
use crate::watchlist::Watchlist;
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Watchlist screening engine
///
/// Construction canonicalizes the sanction tables once; afterwards the
/// engine is immutable and `screen` is a pure function of its input,
/// safe to share across threads.
pub struct ScreeningEngine {
    watchlist: Watchlist,
    screener: SanctionScreener,
    escalation_threshold: f64,
}

impl ScreeningEngine {
    /// Build an engine over an injected configuration and watchlist.
    pub fn new(config: ScreeningConfig, watchlist: Watchlist) -> Self {
        let screener = SanctionScreener::new(&config);
        info!(
            "Screening engine ready: {} watchlist entries, threshold {}",
            watchlist.len(),
            config.escalation_threshold
        );
        Self {
            watchlist,
            screener,
            escalation_threshold: config.escalation_threshold,
        }
    }

    /// Screen one transaction against the whole watchlist.
    pub fn screen(&self, txn: &Transaction) -> ScreeningResult {
        let screening_id = Uuid::new_v4();
        let payer = txn.payer();
        let beneficiary = txn.beneficiary();

        let mut candidates = Vec::with_capacity(2 * self.watchlist.len());
        let mut sanction_flag = false;
        let mut sanction_reasons = Vec::new();

        for entry in self.watchlist.entries() {
            let (payer_score, payer_breakdown) = score_party(&payer, entry, &self.screener);
            let (benef_score, benef_breakdown) = score_party(&beneficiary, entry, &self.screener);

            // One reason line per triggering (role, entry) pair; the
            // audit trail keeps the repeats.
            for (role, breakdown) in [
                (PartyRole::Payer, &payer_breakdown),
                (PartyRole::Beneficiary, &benef_breakdown),
            ] {
                if breakdown.party_country_sanctioned {
                    sanction_flag = true;
                    if let Some(country) = &breakdown.party_country_name {
                        sanction_reasons
                            .push(format!("{} country in sanctioned list: {}", role, country));
                    }
                }
                if breakdown.address_sanction_hit {
                    sanction_flag = true;
                    if let Some(country) = &breakdown.address_sanction_match {
                        sanction_reasons.push(format!(
                            "{} address mentions sanctioned country: {}",
                            role, country
                        ));
                    }
                }
            }

            candidates.push(Candidate {
                role: PartyRole::Payer,
                entry: entry.clone(),
                score: payer_score,
                breakdown: payer_breakdown,
            });
            candidates.push(Candidate {
                role: PartyRole::Beneficiary,
                entry: entry.clone(),
                score: benef_score,
                breakdown: benef_breakdown,
            });
        }

        // Stable descending sort keeps generation order among ties, so
        // the head of the list is also the first-generated maximum.
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        let best = candidates.first().cloned();
        let best_score = best.as_ref().map(|c| c.score).unwrap_or(0.0);

        let (decision, reason) = decide(sanction_flag, best_score, self.escalation_threshold);

        if decision == Decision::Escalate {
            warn!(
                "Screening ESCALATE for {} -> {} ({}, best score {:.3}, id: {})",
                txn.payer_name, txn.benef_name, reason, best_score, screening_id
            );
        } else {
            debug!(
                "Screening RELEASE for {} -> {} (best score {:.3}, id: {})",
                txn.payer_name, txn.benef_name, best_score, screening_id
            );
        }

        ScreeningResult {
            screening_id,
            screened_at: Utc::now(),
            decision,
            reason,
            best,
            best_score,
            sanction_flag,
            sanction_reasons,
            candidates,
        }
    }

    /// The watchlist this engine screens against.
    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    /// The canonicalized sanctioned-country table.
    pub fn sanction_screener(&self) -> &SanctionScreener {
        &self.screener
    }

    /// The configured escalation threshold.
    pub fn escalation_threshold(&self) -> f64 {
        self.escalation_threshold
    }
}

impl Default for ScreeningEngine {
    fn default() -> Self {
        Self::new(ScreeningConfig::default(), Watchlist::seed())
    }
}

/// Decision rule: a sanction hit overrides everything; otherwise the
/// best composite score is compared against the escalation threshold.
pub fn decide(sanction_flag: bool, best_score: f64, threshold: f64) -> (Decision, DecisionReason) {
    if sanction_flag {
        (Decision::Escalate, DecisionReason::SanctionedCountry)
    } else if best_score >= threshold {
        (Decision::Escalate, DecisionReason::ScoreThreshold)
    } else {
        (Decision::Release, DecisionReason::BelowThreshold)
    }
}
