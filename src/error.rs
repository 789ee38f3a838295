// SPDX-License-Identifier: MIT

//! Application error types.
//!
//! The taxonomy matters for control flow: connectivity failures trigger
//! offline fallback, authorization failures invalidate the session, and
//! everything else is surfaced or logged depending on the operation.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Backend unreachable: {0}")]
    Connectivity(String),

    #[error("Authentication required or token rejected")]
    Unauthorized,

    #[error("Backend error: HTTP {status}: {body}")]
    Backend { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True when the failure means "could not reach the backend at all",
    /// as opposed to the backend rejecting the request. Connectivity
    /// failures keep cached state; rejections invalidate it.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, AppError::Connectivity(_))
    }
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, AppError>;
