// SPDX-License-Identifier: MIT

//! Heuristic triage: classify a report description when the authoritative
//! backend cannot.
//!
//! This is the degraded mode that keeps the product usable offline. The
//! classification is deliberately simple and explainable: keyword lists,
//! fabrication beating hazard, fixed point awards.

use crate::models::ReportStatus;

/// Points deducted for a report that looks fabricated.
pub const FABRICATION_PENALTY: i32 = -25;
/// Points awarded for a validated high-risk hazard.
pub const HAZARD_AWARD: i32 = 20;
/// Points awarded for an ordinary report pending review.
pub const DEFAULT_AWARD: i32 = 10;

/// Keywords indicating a joke or test submission.
const FABRICATION_KEYWORDS: &[&str] = &["prank", "lol", "fake", "just testing"];

/// Keywords indicating structural, utility, or environmental danger.
/// Substring match, so "electri" covers electric/electrical/electricity.
const HAZARD_KEYWORDS: &[&str] = &[
    "flood", "bridge", "collapse", "electri", "fire", "gas", "sinkhole",
];

/// Result of a heuristic classification: a status and its point award,
/// always assigned together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triage {
    pub status: ReportStatus,
    pub points: i32,
}

/// Classify a report description.
///
/// Deterministic and pure: lowercases the text, checks fabrication
/// keywords first (they take precedence over hazard keywords), then
/// hazard keywords, and falls back to `In Review`.
pub fn classify(description: &str) -> Triage {
    let text = description.to_lowercase();

    if contains_any(&text, FABRICATION_KEYWORDS) {
        return Triage {
            status: ReportStatus::Rejected,
            points: FABRICATION_PENALTY,
        };
    }

    if contains_any(&text, HAZARD_KEYWORDS) {
        return Triage {
            status: ReportStatus::Validated,
            points: HAZARD_AWARD,
        };
    }

    Triage {
        status: ReportStatus::InReview,
        points: DEFAULT_AWARD,
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}
