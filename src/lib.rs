// SPDX-License-Identifier: MIT

//! Civic-Sense: citizen incident reporting client core.
//!
//! This crate provides the state and reconciliation layer behind the
//! Civic-Sense client: a persisted authenticated session, report
//! submission with offline heuristic-triage fallback, the report
//! collection with its backend mutations, and the derived leaderboard.

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod views;

pub use app::App;
pub use error::{AppError, Result};
