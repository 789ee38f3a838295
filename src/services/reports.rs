// SPDX-License-Identifier: MIT

//! Report collection: the in-memory list of reports plus the backend
//! mutations that keep it in sync.
//!
//! Every backend mutation is applied remotely first; local state only
//! changes after the backend accepted it, so the UI and the server never
//! silently disagree. The leaderboard is a memoized view over the
//! collection, invalidated by any mutation.

use crate::error::Result;
use crate::models::{leaderboard, LeaderboardEntry, Report, ReportStatus};
use crate::services::BackendClient;

/// Owns the in-memory report collection, newest first.
#[derive(Default)]
pub struct ReportStore {
    reports: Vec<Report>,
    leaderboard_cache: Option<Vec<LeaderboardEntry>>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current reports, newest first.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Prepend a freshly-submitted report. The report is complete before
    /// it enters the list, so observers never see a partial entry.
    pub fn prepend(&mut self, report: Report) {
        self.reports.insert(0, report);
        self.leaderboard_cache = None;
    }

    /// Fetch the authoritative list and replace the whole collection.
    ///
    /// Any failure (unreachable backend, non-2xx, malformed body) leaves
    /// the current collection untouched; the failure only shows up in the
    /// log.
    pub async fn refresh(&mut self, backend: &BackendClient) {
        match backend.list_reports().await {
            Ok(reports) => {
                tracing::debug!(count = reports.len(), "Report list refreshed");
                self.reports = reports;
                self.leaderboard_cache = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Report refresh failed, keeping current list");
            }
        }
    }

    /// Update a report's triage status, backend first.
    ///
    /// On success the local report's status is replaced in place, points
    /// and all other fields untouched. On failure nothing changes locally
    /// and the error is returned.
    pub async fn update_status(
        &mut self,
        backend: &BackendClient,
        id: &str,
        status: ReportStatus,
    ) -> Result<()> {
        backend.update_status(id, status).await?;

        match self.reports.iter_mut().find(|r| r.id == id) {
            Some(report) => report.status = status,
            None => tracing::warn!(id, "Status updated on backend but report not held locally"),
        }
        self.leaderboard_cache = None;
        Ok(())
    }

    /// Delete a report, backend first. On failure nothing changes locally.
    pub async fn remove(&mut self, backend: &BackendClient, id: &str) -> Result<()> {
        backend.delete_report(id).await?;

        self.reports.retain(|r| r.id != id);
        self.leaderboard_cache = None;
        Ok(())
    }

    /// The leaderboard derived from the current collection.
    ///
    /// Memoized: recomputed only after the collection changed since the
    /// last call.
    pub fn leaderboard(&mut self) -> &[LeaderboardEntry] {
        if self.leaderboard_cache.is_none() {
            self.leaderboard_cache = Some(leaderboard::aggregate(&self.reports));
        }
        self.leaderboard_cache.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportStatus;

    fn make_report(id: &str, name: Option<&str>, points: i32) -> Report {
        Report {
            id: id.to_string(),
            name: name.map(String::from),
            user_email: None,
            description: "test".to_string(),
            category: None,
            location: None,
            image_url: None,
            status: ReportStatus::InReview,
            timestamp: 0,
            points_awarded: points,
        }
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut store = ReportStore::new();
        store.prepend(make_report("a", None, 10));
        store.prepend(make_report("b", None, 20));

        assert_eq!(store.reports()[0].id, "b");
        assert_eq!(store.reports()[1].id, "a");
    }

    #[test]
    fn test_leaderboard_memo_invalidated_by_prepend() {
        let mut store = ReportStore::new();
        store.prepend(make_report("a", Some("Asha"), 10));

        assert_eq!(store.leaderboard()[0].total_points, 10);

        store.prepend(make_report("b", Some("Asha"), 20));
        assert_eq!(store.leaderboard()[0].total_points, 30);
    }
}
