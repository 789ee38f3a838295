// SPDX-License-Identifier: MIT

//! Application orchestration.
//!
//! `App` wires the session store, report collection, backend client, and
//! view router together, and implements the submission coordinator: POST
//! when a backend is configured, fall back to local heuristic triage when
//! the POST fails, stay fully local when no backend exists at all.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{LoginPayload, Report, ReportDraft, ReportStatus};
use crate::services::{classify, BackendClient, ReportStore, RestoreOutcome, SessionStore};
use crate::views::{View, ViewRouter};

/// The client core. Owned and driven by a single task; all async
/// operations suspend only at I/O boundaries.
pub struct App {
    pub config: Config,
    backend: Option<BackendClient>,
    pub session: SessionStore,
    pub reports: ReportStore,
    pub router: ViewRouter,
}

impl App {
    /// Build the application from configuration. No I/O happens here;
    /// call [`restore`](App::restore) next.
    pub fn new(config: Config) -> Self {
        let backend = config.backend_url.as_deref().map(BackendClient::new);
        let session = SessionStore::new(config.session_path.clone());

        Self {
            config,
            backend,
            session,
            reports: ReportStore::new(),
            router: ViewRouter::default(),
        }
    }

    /// The configured backend client, if any.
    pub fn backend(&self) -> Option<&BackendClient> {
        self.backend.as_ref()
    }

    /// Restore the persisted session (revalidating it when a backend is
    /// configured).
    pub async fn restore(&mut self) -> RestoreOutcome {
        self.session.restore(self.backend.as_ref()).await
    }

    /// Log in with a payload and immediately revalidate the new token, so
    /// a fresh login goes through the same confirmation path as a
    /// restored session.
    pub async fn login(&mut self, payload: LoginPayload) -> Result<RestoreOutcome> {
        self.session.login(payload)?;

        match &self.backend {
            Some(backend) => Ok(self.session.revalidate(backend).await),
            None => Ok(RestoreOutcome::CachedOffline),
        }
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// Refresh the report collection from the backend. A missing or
    /// failing backend leaves the current list untouched.
    pub async fn refresh_reports(&mut self) {
        if let Some(backend) = &self.backend {
            self.reports.refresh(backend).await;
        }
    }

    /// Submit a report draft.
    ///
    /// Always yields exactly one new report at the head of the collection
    /// and switches the view to the feed; no failure escapes to the
    /// caller.
    ///
    /// - No backend configured: the report stays local with status
    ///   `Submitted` and no points; classification only runs on the
    ///   fallback path below.
    /// - Backend configured: authenticated POST; a 2xx response is taken
    ///   verbatim. Any failure falls back to heuristic triage, with the
    ///   classified status tagged as offline.
    pub async fn submit(&mut self, draft: ReportDraft) -> &Report {
        let report = match &self.backend {
            None => Report::from_draft_local(draft, ReportStatus::Submitted, 0),
            Some(backend) => {
                let token = self.session.token();
                match backend.create_report(&draft, token).await {
                    Ok(report) => report,
                    Err(e) => {
                        tracing::warn!(error = %e, "Submission failed, classifying locally");
                        let triage = classify(&draft.description);
                        Report::from_draft_local(draft, triage.status.offline(), triage.points)
                    }
                }
            }
        };

        self.reports.prepend(report);
        self.router.navigate(View::Feed);
        &self.reports.reports()[0]
    }

    /// Update a report's status from the municipal dashboard.
    pub async fn update_report_status(&mut self, id: &str, status: ReportStatus) -> Result<()> {
        self.require_municipal()?;
        let backend = self.require_backend()?;
        self.reports.update_status(&backend, id, status).await
    }

    /// Delete a report from the municipal dashboard.
    pub async fn delete_report(&mut self, id: &str) -> Result<()> {
        self.require_municipal()?;
        let backend = self.require_backend()?;
        self.reports.remove(&backend, id).await
    }

    /// Dashboard actions require a live municipal session.
    fn require_municipal(&self) -> Result<()> {
        match self.session.session() {
            Some(session) if session.is_municipal() => Ok(()),
            _ => Err(AppError::Unauthorized),
        }
    }

    fn require_backend(&self) -> Result<BackendClient> {
        self.backend
            .clone()
            .ok_or_else(|| AppError::Connectivity("no backend configured".into()))
    }
}
