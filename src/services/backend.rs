// SPDX-License-Identifier: MIT

//! HTTP client for the civic backend.
//!
//! Handles:
//! - Report listing, creation, status updates, and deletion
//! - Identity revalidation against `/me`
//! - Mapping transport vs rejection failures into the error taxonomy

use crate::error::AppError;
use crate::models::{IdentityProfile, Report, ReportDraft, ReportStatus};
use serde::Deserialize;

/// Civic backend API client.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the given base URL (trailing slash trimmed).
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /reports: the authoritative report list.
    pub async fn list_reports(&self) -> Result<Vec<Report>, AppError> {
        let url = format!("{}/reports", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Connectivity(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// POST /reports: submit a draft, attaching the bearer token when a
    /// session is live. Returns the server's authoritative Report.
    pub async fn create_report(
        &self,
        draft: &ReportDraft,
        token: Option<&str>,
    ) -> Result<Report, AppError> {
        let url = format!("{}/reports", self.base_url);

        let mut request = self.http.post(&url).json(draft);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Connectivity(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// PATCH /reports/{id}: update a report's triage status.
    pub async fn update_status(&self, id: &str, status: ReportStatus) -> Result<(), AppError> {
        let url = format!("{}/reports/{}", self.base_url, id);

        let body = serde_json::json!({ "status": status });

        let response = self
            .http
            .patch(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Connectivity(e.to_string()))?;

        self.check_response(response).await
    }

    /// DELETE /reports/{id}
    pub async fn delete_report(&self, id: &str) -> Result<(), AppError> {
        let url = format!("{}/reports/{}", self.base_url, id);

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| AppError::Connectivity(e.to_string()))?;

        self.check_response(response).await
    }

    /// GET /me: revalidate a bearer token and fetch the current profile.
    pub async fn identity(&self, token: &str) -> Result<IdentityProfile, AppError> {
        let url = format!("{}/me", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::Connectivity(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response status and return error if not successful.
    async fn check_response(&self, response: reqwest::Response) -> Result<(), AppError> {
        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(AppError::Unauthorized);
        }

        Err(AppError::Backend {
            status: status.as_u16(),
            body,
        })
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(AppError::Unauthorized);
            }

            return Err(AppError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Malformed(format!("JSON parse error: {}", e)))
    }
}
