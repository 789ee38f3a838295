// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod leaderboard;
pub mod report;
pub mod session;

pub use leaderboard::LeaderboardEntry;
pub use report::{Location, Report, ReportDraft, ReportStatus};
pub use session::{IdentityProfile, LoginPayload, Role, Session};
