//! Audit note rendering
//!
//! Turns a structured screening result into the fixed-format audit
//! note used for case files, as plain text and as JSON. Scores are
//! always rendered at three decimals, so two runs over the same input
//! produce identical artifacts apart from id and timestamp.

use crate::error::Error;
use crate::types::{Decision, ScreeningResult};
use serde_json::{json, Value};

const NOTE_TITLE: &str = "Payment Screening Audit Note";

const ESCALATE_ACTIONS: &[&str] = &[
    "Place payment on hold and route to Level-2 review.",
    "Verify identity against authoritative KYC/KYB sources and documentary evidence.",
    "Re-screen name, address and country with up-to-date lists and adverse media.",
    "If sanctions flags are confirmed, follow blocking/reporting procedures.",
];

const RELEASE_ACTIONS: &[&str] = &[
    "Proceed with payment per standard STP rules.",
    "Retain screening logs, scores, and evidence for audit.",
    "Monitor for list updates; re-screen if new alerts occur.",
];

/// Render the plain-text audit note for one screening result.
pub fn render_audit_note(result: &ScreeningResult) -> String {
    let mut out = String::new();
    out.push_str(NOTE_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(NOTE_TITLE.len()));
    out.push('\n');
    out.push_str(&format!(" • {}\n", summary_line(result)));

    out.push_str("\nWatchlist Context\n-----------------\n");
    match watchlist_context(result) {
        Some(context) => out.push_str(&format!("{}\n", context)),
        None => out.push_str("No watchlist match available.\n"),
    }

    out.push_str("\nKey Drivers\n-----------\n");
    let drivers = key_drivers(result);
    if drivers.is_empty() {
        out.push_str("- No driver details available.\n");
    } else {
        for driver in &drivers {
            out.push_str(&format!("- {}\n", driver));
        }
    }

    out.push_str("\nSanctions\n---------\n");
    if result.sanction_flag {
        out.push_str("Sanctions hit detected.\n");
        for reason in &result.sanction_reasons {
            out.push_str(&format!("- {}\n", reason));
        }
    } else {
        out.push_str("No sanctions hit detected.\n");
    }

    out.push_str("\nRecommended Actions\n-------------------\n");
    for action in recommended_actions(result.decision) {
        out.push_str(&format!("- {}\n", action));
    }

    out
}

/// The audit note as a JSON document.
pub fn audit_note_json(result: &ScreeningResult) -> Value {
    json!({
        "title": NOTE_TITLE,
        "screening_id": result.screening_id,
        "screened_at": result.screened_at,
        "summary": summary_line(result),
        "watchlist_context": watchlist_context(result),
        "key_drivers": key_drivers(result),
        "sanctions": {
            "hit": result.sanction_flag,
            "reasons": result.sanction_reasons,
        },
        "recommended_actions": recommended_actions(result.decision),
    })
}

/// Pretty-printed JSON audit note.
pub fn audit_note_json_string(result: &ScreeningResult) -> crate::Result<String> {
    serde_json::to_string_pretty(&audit_note_json(result))
        .map_err(|e| Error::Serialization(e.to_string()))
}

fn summary_line(result: &ScreeningResult) -> String {
    format!(
        "Decision: {} | Reason: {} | Best match score: {:.3}",
        result.decision, result.reason, result.best_score
    )
}

/// Sub-scores of the best candidate, highest first; ties keep the
/// name, address, dob, country order.
fn key_drivers(result: &ScreeningResult) -> Vec<String> {
    let best = match &result.best {
        Some(candidate) => candidate,
        None => return Vec::new(),
    };
    let b = &best.breakdown;
    let mut drivers = vec![
        ("Name", b.name),
        ("Address", b.address),
        ("Dob", b.dob),
        ("Country", b.country_bonus),
    ];
    drivers.sort_by(|a, b| b.1.total_cmp(&a.1));
    drivers
        .into_iter()
        .take(4)
        .map(|(label, value)| format!("{}: {:.3}", label, value))
        .collect()
}

fn watchlist_context(result: &ScreeningResult) -> Option<String> {
    result.best.as_ref().map(|best| {
        format!(
            "Best match ({}): {} (List: {}; Category: {}; Country: {}; DOB: {})",
            best.role,
            best.entry.name,
            best.entry.source_list,
            best.entry.category,
            best.entry.country,
            best.entry.dob.as_deref().unwrap_or("—"),
        )
    })
}

fn recommended_actions(decision: Decision) -> &'static [&'static str] {
    match decision {
        Decision::Escalate => ESCALATE_ACTIONS,
        Decision::Release => RELEASE_ACTIONS,
    }
}
