// SPDX-License-Identifier: MIT

//! Report model, submission drafts, and triage status.

use serde::{Deserialize, Serialize};

/// Triage status of a report.
///
/// The `*Offline` variants mark reports that were classified locally after
/// a backend failure; their wire strings carry an " (offline)" suffix so
/// the feed can show that the result was never server-validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    Submitted,
    #[serde(rename = "In Review")]
    InReview,
    Validated,
    Rejected,
    #[serde(rename = "Submitted (offline)")]
    SubmittedOffline,
    #[serde(rename = "In Review (offline)")]
    InReviewOffline,
    #[serde(rename = "Validated (offline)")]
    ValidatedOffline,
    #[serde(rename = "Rejected (offline)")]
    RejectedOffline,
}

impl ReportStatus {
    /// Map a status to its offline-tagged twin. Offline variants map to
    /// themselves.
    pub fn offline(self) -> Self {
        match self {
            ReportStatus::Submitted => ReportStatus::SubmittedOffline,
            ReportStatus::InReview => ReportStatus::InReviewOffline,
            ReportStatus::Validated => ReportStatus::ValidatedOffline,
            ReportStatus::Rejected => ReportStatus::RejectedOffline,
            other => other,
        }
    }

    /// True for statuses produced by local fallback classification.
    pub fn is_offline(self) -> bool {
        matches!(
            self,
            ReportStatus::SubmittedOffline
                | ReportStatus::InReviewOffline
                | ReportStatus::ValidatedOffline
                | ReportStatus::RejectedOffline
        )
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReportStatus::Submitted => "Submitted",
            ReportStatus::InReview => "In Review",
            ReportStatus::Validated => "Validated",
            ReportStatus::Rejected => "Rejected",
            ReportStatus::SubmittedOffline => "Submitted (offline)",
            ReportStatus::InReviewOffline => "In Review (offline)",
            ReportStatus::ValidatedOffline => "Validated (offline)",
            ReportStatus::RejectedOffline => "Rejected (offline)",
        };
        f.write_str(s)
    }
}

/// Optional geolocation attached to a report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Nearest address or landmark
    #[serde(default)]
    pub address: Option<String>,
}

/// A citizen-submitted incident report.
///
/// Field names on the wire follow the backend schema (`pointsAwarded`,
/// `imageUrl`; the rest are snake_case or bare).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Server-assigned id, or a locally-generated UUID for offline reports
    pub id: String,
    /// Submitter display name (leaderboard defaults missing names to "Citizen")
    #[serde(default)]
    pub name: Option<String>,
    /// Submitter email
    #[serde(default)]
    pub user_email: Option<String>,
    /// Free-text description of the incident
    pub description: String,
    /// Incident category
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
    /// Triage status; always set together with `points_awarded`
    pub status: ReportStatus,
    /// Creation time, epoch milliseconds
    #[serde(default)]
    pub timestamp: i64,
    /// Points awarded by whichever authority triaged the report; may be negative
    #[serde(default, rename = "pointsAwarded")]
    pub points_awarded: i32,
}

/// What the report form submits: everything except the fields an
/// authority (server or local triage) assigns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
}

impl Report {
    /// Build a local report from a draft with a fresh UUID and the given
    /// status/points pair.
    pub fn from_draft_local(draft: ReportDraft, status: ReportStatus, points: i32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name,
            user_email: draft.user_email,
            description: draft.description,
            category: draft.category,
            location: draft.location,
            image_url: draft.image_url,
            status,
            timestamp: chrono::Utc::now().timestamp_millis(),
            points_awarded: points,
        }
    }
}
