use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Side of the transaction a screened party is on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartyRole {
    Payer,
    Beneficiary,
}

impl PartyRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyRole::Payer => "PAYER",
            PartyRole::Beneficiary => "BENEFICIARY",
        }
    }
}

impl fmt::Display for PartyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final screening verdict
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Release,
    Escalate,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Release => "RELEASE",
            Decision::Escalate => "ESCALATE",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the verdict was reached
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DecisionReason {
    #[serde(rename = "Sanctioned Country")]
    SanctionedCountry,
    #[serde(rename = "Score Threshold")]
    ScoreThreshold,
    #[serde(rename = "Below Threshold")]
    BelowThreshold,
}

impl DecisionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionReason::SanctionedCountry => "Sanctioned Country",
            DecisionReason::ScoreThreshold => "Score Threshold",
            DecisionReason::BelowThreshold => "Below Threshold",
        }
    }
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A watchlist record screened transactions are compared against
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistEntry {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub address: String,
    pub country: String,
    #[serde(default)]
    pub dob: Option<String>, // YYYY-MM-DD; absent for organizations
    pub source_list: String,
    pub category: String,
}

/// One side of a transaction, as submitted for screening
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub address: String,
    pub country: String,
    #[serde(default)]
    pub dob: Option<String>,
}

/// Screening payload: payer, beneficiary and payment details
///
/// Core party fields are required; a payload missing one fails
/// deserialization instead of silently screening a blank. Amount,
/// currency and reference are carried through for the audit trail
/// only and never affect the decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub payer_name: String,
    pub payer_address: String,
    pub payer_country: String,
    #[serde(default)]
    pub payer_dob: Option<String>,
    pub benef_name: String,
    pub benef_address: String,
    pub benef_country: String,
    #[serde(default)]
    pub benef_dob: Option<String>,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub reference: String,
}

impl Transaction {
    /// Payer side as a party record
    pub fn payer(&self) -> Party {
        Party {
            name: self.payer_name.clone(),
            address: self.payer_address.clone(),
            country: self.payer_country.clone(),
            dob: self.payer_dob.clone(),
        }
    }

    /// Beneficiary side as a party record
    pub fn beneficiary(&self) -> Party {
        Party {
            name: self.benef_name.clone(),
            address: self.benef_address.clone(),
            country: self.benef_country.clone(),
            dob: self.benef_dob.clone(),
        }
    }
}

/// Per-field similarity breakdown for one (party, entry) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub name: f64,          // best across primary name and aliases
    pub address: f64,       // blended character/token similarity
    pub dob: f64,           // exact date match or nothing
    pub country_bonus: f64, // 0.0 or the flat bonus
    pub party_country_sanctioned: bool,
    pub party_country_name: Option<String>,
    pub address_sanction_hit: bool,
    pub address_sanction_match: Option<String>,
}

impl ScoreBreakdown {
    /// True when either country-level rule fired for this party
    pub fn sanction_hit(&self) -> bool {
        self.party_country_sanctioned || self.address_sanction_hit
    }
}

/// One scored (role, watchlist entry) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub role: PartyRole,
    pub entry: WatchlistEntry,
    pub score: f64, // 0.0-1.0
    pub breakdown: ScoreBreakdown,
}

/// Outcome of screening one transaction against the watchlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub screening_id: Uuid,
    pub screened_at: DateTime<Utc>,
    pub decision: Decision,
    pub reason: DecisionReason,
    pub best: Option<Candidate>, // None only for an empty watchlist
    pub best_score: f64,
    pub sanction_flag: bool,
    /// Sanction reasons in detection order; repeats across entries are
    /// kept so the audit trail records every triggering pair
    pub sanction_reasons: Vec<String>,
    /// Every (role, entry) candidate, sorted by descending score
    pub candidates: Vec<Candidate>,
}

impl ScreeningResult {
    /// Screening allows straight-through processing
    pub fn released(&self) -> bool {
        self.decision == Decision::Release
    }
}
