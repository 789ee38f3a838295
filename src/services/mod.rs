// SPDX-License-Identifier: MIT

//! Core services: backend client, heuristic triage, session store, and
//! the report collection.

pub mod backend;
pub mod reports;
pub mod session;
pub mod triage;

pub use backend::BackendClient;
pub use reports::ReportStore;
pub use session::{RestoreOutcome, SessionPhase, SessionStore};
pub use triage::{classify, Triage};
