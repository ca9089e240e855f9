//! PayShield Screening Engine
//!
//! Screens payment transactions against a sanctions watchlist by fuzzy
//! matching party names, addresses, countries and dates of birth, then
//! renders a RELEASE or ESCALATE decision with a full audit breakdown.
//!
//! # Invariants
//!
//! - Every similarity score stays within [0, 1]; composites clamp at 1.0
//! - Exactly two candidates per watchlist entry (payer, beneficiary)
//! - The reported best match is the head of the ranked candidate list
//! - A sanctioned-country hit escalates regardless of fuzzy scores

#![forbid(unsafe_code)]

pub mod config;
pub mod country;
pub mod engine;
pub mod error;
pub mod report;
pub mod scorer;
pub mod types;
pub mod watchlist;

// Re-exports
pub use config::ScreeningConfig;
pub use country::{normalize_country, SanctionScreener};
pub use engine::{decide, ScreeningEngine};
pub use error::{Error, Result};
pub use report::{audit_note_json, audit_note_json_string, render_audit_note};
pub use types::{
    Candidate, Decision, DecisionReason, Party, PartyRole, ScoreBreakdown, ScreeningResult,
    Transaction, WatchlistEntry,
};
pub use watchlist::Watchlist;
