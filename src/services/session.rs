// SPDX-License-Identifier: MIT

//! Session store: the single process-wide authenticated-user slot.
//!
//! The session is persisted as a JSON file so it survives restarts.
//! Restore is two-phase: the cached session is shown optimistically
//! (`Pending`) while a revalidation round-trip against `/me` decides
//! whether it is `Confirmed` or invalidated. A connectivity failure keeps
//! the cached session; only an explicit rejection logs the user out.

use crate::error::{AppError, Result};
use crate::models::{LoginPayload, Session};
use crate::services::BackendClient;
use std::fs;
use std::path::PathBuf;

/// Where the live session stands relative to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No live session.
    SignedOut,
    /// Session restored from disk or set by login, not yet revalidated.
    Pending,
    /// Backend confirmed the token since the session was loaded.
    Confirmed,
}

/// Outcome of a restore/revalidate pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Nothing persisted (or the blob was corrupt and got purged).
    NoSession,
    /// Cached session kept; the backend could not be reached (or none is
    /// configured).
    CachedOffline,
    /// Backend accepted the token; profile fields were merged.
    Confirmed,
    /// Backend rejected the token; session and storage were purged.
    Invalidated,
}

/// Owns the authenticated-user value and keeps it in sync with the
/// persisted session file.
pub struct SessionStore {
    path: PathBuf,
    session: Option<Session>,
    phase: SessionPhase,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            session: None,
            phase: SessionPhase::SignedOut,
        }
    }

    /// The live session, if any. Consumers only read it.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Bearer token of the live session.
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Restore the session at startup.
    ///
    /// Reads the persisted blob; absence means no session, a corrupt blob
    /// is purged and also means no session. A parsed session is set
    /// optimistically, then revalidated against the backend when one is
    /// configured. Never fails: a broken session file is not a startup
    /// error.
    pub async fn restore(&mut self, backend: Option<&BackendClient>) -> RestoreOutcome {
        if !self.load_cached() {
            return RestoreOutcome::NoSession;
        }

        match backend {
            Some(backend) => self.revalidate(backend).await,
            None => {
                tracing::debug!("No backend configured, keeping cached session");
                RestoreOutcome::CachedOffline
            }
        }
    }

    /// Revalidate the live session's token against `/me`.
    ///
    /// On success the returned profile fields (name, email, role, points)
    /// are merged into the session, preserving the token, and the merge is
    /// persisted. An authorization rejection purges everything; a
    /// connectivity or parse failure keeps the cached session untouched.
    pub async fn revalidate(&mut self, backend: &BackendClient) -> RestoreOutcome {
        let Some(session) = self.session.clone() else {
            return RestoreOutcome::NoSession;
        };

        match backend.identity(&session.token).await {
            Ok(profile) => {
                let merged = Session {
                    name: profile.name.or(session.name),
                    email: profile.email.or(session.email),
                    role: profile.role,
                    points: profile.points,
                    token: session.token,
                };
                self.session = Some(merged);
                self.phase = SessionPhase::Confirmed;
                if let Err(e) = self.persist() {
                    tracing::warn!(error = %e, "Failed to persist revalidated session");
                }
                tracing::info!("Session revalidated");
                RestoreOutcome::Confirmed
            }
            Err(e) if e.is_connectivity() || matches!(e, AppError::Malformed(_)) => {
                // Transient failure: keep the cached session, no forced logout
                tracing::warn!(error = %e, "Revalidation unreachable, keeping cached session");
                self.phase = SessionPhase::Pending;
                RestoreOutcome::CachedOffline
            }
            Err(e) => {
                tracing::info!(error = %e, "Token rejected, clearing session");
                self.clear();
                RestoreOutcome::Invalidated
            }
        }
    }

    /// Store a login payload as the new session and persist it.
    ///
    /// The payload must carry a token and at least one of name/email.
    /// The caller is expected to follow up with [`revalidate`] so the new
    /// token goes through the same confirmation path as a restored one.
    ///
    /// [`revalidate`]: SessionStore::revalidate
    pub fn login(&mut self, payload: LoginPayload) -> Result<()> {
        if payload.token.trim().is_empty() {
            return Err(AppError::BadRequest("login payload missing token".into()));
        }
        if payload.name.is_none() && payload.email.is_none() {
            return Err(AppError::BadRequest(
                "login payload needs a name or email".into(),
            ));
        }

        self.session = Some(Session {
            name: payload.name,
            email: payload.email,
            role: payload.role,
            points: payload.points.unwrap_or(0),
            token: payload.token,
        });
        self.phase = SessionPhase::Pending;

        if let Err(e) = self.persist() {
            tracing::warn!(error = %e, "Failed to persist session after login");
        }
        Ok(())
    }

    /// Clear the session and purge persisted storage. Synchronous, no
    /// network call.
    pub fn logout(&mut self) {
        self.clear();
        tracing::info!("Logged out");
    }

    /// Read and parse the persisted blob into the live slot.
    ///
    /// Returns `true` when a session was loaded. A corrupt blob is deleted
    /// so the next start is clean.
    fn load_cached(&mut self) -> bool {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => {
                self.session = None;
                self.phase = SessionPhase::SignedOut;
                return false;
            }
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => {
                self.session = Some(session);
                self.phase = SessionPhase::Pending;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Corrupt session blob, purging");
                self.clear();
                false
            }
        }
    }

    fn clear(&mut self) {
        self.session = None;
        self.phase = SessionPhase::SignedOut;
        self.purge();
    }

    /// Write the live session to disk.
    fn persist(&self) -> Result<()> {
        let Some(session) = &self.session else {
            return Ok(());
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| AppError::Storage(e.to_string()))?;
            }
        }

        let json = serde_json::to_string(session).map_err(|e| AppError::Storage(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| AppError::Storage(e.to_string()))
    }

    /// Remove the persisted blob; a missing file is fine.
    fn purge(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(error = %e, "Failed to purge session file");
            }
        }
    }
}
