// SPDX-License-Identifier: MIT

//! Leaderboard aggregation: per-submitter point totals derived from the
//! report collection.
//!
//! Entries are never stored; they are recomputed from the current reports
//! whenever the collection changes.

use crate::models::Report;

/// Display name used when a report carries no submitter name.
pub const ANONYMOUS_SUBMITTER: &str = "Citizen";

/// Derived per-submitter totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub total_points: i64,
    pub report_count: u32,
}

/// Fold the report collection into leaderboard entries.
///
/// Groups by submitter name (defaulting to [`ANONYMOUS_SUBMITTER`]), sums
/// points and counts reports per group. Entries come back in first-seen
/// submitter order, so the result is deterministic for a given input
/// sequence. Pure: no I/O, no hidden state.
pub fn aggregate(reports: &[Report]) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = Vec::new();

    for report in reports {
        let name = report.name.as_deref().unwrap_or(ANONYMOUS_SUBMITTER);

        match entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.total_points += i64::from(report.points_awarded);
                entry.report_count += 1;
            }
            None => entries.push(LeaderboardEntry {
                name: name.to_string(),
                total_points: i64::from(report.points_awarded),
                report_count: 1,
            }),
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Report, ReportStatus};

    fn make_report(name: Option<&str>, points: i32) -> Report {
        Report {
            id: format!("r-{}", points),
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
    fn test_groups_and_sums_by_submitter() {
        let reports = vec![
            make_report(Some("Asha"), 20),
            make_report(Some("Ben"), 10),
            make_report(Some("Asha"), -25),
        ];

        let entries = aggregate(&reports);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Asha");
        assert_eq!(entries[0].total_points, -5);
        assert_eq!(entries[0].report_count, 2);
        assert_eq!(entries[1].name, "Ben");
        assert_eq!(entries[1].total_points, 10);
    }

    #[test]
    fn test_missing_name_defaults_to_citizen() {
        let reports = vec![make_report(None, 10), make_report(None, 20)];

        let entries = aggregate(&reports);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, ANONYMOUS_SUBMITTER);
        assert_eq!(entries[0].total_points, 30);
        assert_eq!(entries[0].report_count, 2);
    }

    #[test]
    fn test_first_seen_order_is_stable() {
        let reports = vec![
            make_report(Some("Zoe"), 10),
            make_report(Some("Asha"), 10),
            make_report(Some("Zoe"), 10),
        ];

        let entries = aggregate(&reports);

        // Order follows first appearance, not alphabetical or point order
        assert_eq!(entries[0].name, "Zoe");
        assert_eq!(entries[1].name, "Asha");
    }

    #[test]
    fn test_per_submitter_total_is_permutation_invariant() {
        let a = vec![
            make_report(Some("Asha"), 20),
            make_report(Some("Ben"), 10),
            make_report(Some("Asha"), 10),
            make_report(Some("Asha"), -25),
        ];
        let mut b = a.clone();
        b.reverse();

        let total = |entries: &[LeaderboardEntry], name: &str| {
            entries
                .iter()
                .find(|e| e.name == name)
                .map(|e| e.total_points)
        };

        let ea = aggregate(&a);
        let eb = aggregate(&b);
        assert_eq!(total(&ea, "Asha"), total(&eb, "Asha"));
        assert_eq!(total(&ea, "Ben"), total(&eb, "Ben"));
    }

    #[test]
    fn test_empty_collection() {
        assert!(aggregate(&[]).is_empty());
    }
}
