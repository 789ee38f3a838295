// SPDX-License-Identifier: MIT

//! Minimal view routing: which screen is currently visible.

/// The application's screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Submission form plus feed and leaderboard
    #[default]
    Report,
    /// Community feed
    Feed,
    /// Points leaderboard
    Leaderboard,
    /// Municipal triage dashboard (role-gated)
    Municipal,
}

/// Holds the active view.
#[derive(Debug, Default)]
pub struct ViewRouter {
    active: View,
}

impl ViewRouter {
    pub fn active(&self) -> View {
        self.active
    }

    pub fn navigate(&mut self, view: View) {
        self.active = view;
    }
}
