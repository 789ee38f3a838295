// SPDX-License-Identifier: MIT

//! Session model: the authenticated identity of the current user.

use serde::{Deserialize, Serialize};

/// Account role. The backend historically used `"user"` for citizens;
/// the alias keeps old persisted sessions readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    #[serde(alias = "user")]
    Citizen,
    Municipal,
}

/// The authenticated session, persisted across restarts.
///
/// Exactly one session is live at a time, owned by the
/// [`SessionStore`](crate::services::SessionStore); everything else only
/// reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub points: i64,
    /// Opaque bearer credential
    pub token: String,
}

impl Session {
    pub fn is_municipal(&self) -> bool {
        self.role == Role::Municipal
    }
}

/// Payload produced by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub points: Option<i64>,
    pub token: String,
}

/// Response of the `GET /me` identity endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub points: i64,
}
