// SPDX-License-Identifier: MIT

//! Civic-Sense CLI
//!
//! A minimal front-end over the client core: submit reports, read the
//! feed and leaderboard, and triage from the municipal dashboard. All of
//! the interesting behavior lives in the library; this binary is the view
//! glue.

use anyhow::{bail, Context};
use civic_sense::config::Config;
use civic_sense::models::{LoginPayload, ReportDraft, ReportStatus, Role};
use civic_sense::services::RestoreOutcome;
use civic_sense::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(
        backend = config.backend_url.as_deref().unwrap_or("(offline)"),
        "Starting Civic-Sense client"
    );

    let mut app = App::new(config);

    let outcome = app.restore().await;
    if outcome == RestoreOutcome::Invalidated {
        eprintln!("Stored session was rejected by the backend; please log in again.");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("feed") => {
            app.refresh_reports().await;
            for report in app.reports.reports() {
                println!(
                    "[{}] {} — {} ({:+})",
                    report.status,
                    report.name.as_deref().unwrap_or("Citizen"),
                    report.description,
                    report.points_awarded,
                );
            }
        }
        Some("leaderboard") => {
            app.refresh_reports().await;
            for entry in app.reports.leaderboard() {
                println!(
                    "{:>6}  {} ({} reports)",
                    entry.total_points, entry.name, entry.report_count
                );
            }
        }
        Some("submit") => {
            let Some(description) = args.get(1).cloned() else {
                bail!("usage: submit <description>");
            };
            let draft = ReportDraft {
                name: app.session.session().and_then(|s| s.name.clone()),
                user_email: app.session.session().and_then(|s| s.email.clone()),
                description,
                ..Default::default()
            };
            let report = app.submit(draft).await;
            println!(
                "Submitted: [{}] {} ({:+} points)",
                report.status, report.description, report.points_awarded
            );
        }
        Some("login") => {
            let (Some(token), Some(name)) = (args.get(1).cloned(), args.get(2).cloned()) else {
                bail!("usage: login <token> <name> [--municipal]");
            };
            let role = if args.iter().any(|a| a == "--municipal") {
                Role::Municipal
            } else {
                Role::Citizen
            };
            let payload = LoginPayload {
                name: Some(name),
                email: None,
                role,
                points: None,
                token,
            };
            match app.login(payload).await? {
                RestoreOutcome::Confirmed => println!("Logged in and confirmed."),
                RestoreOutcome::Invalidated => println!("Token rejected by backend."),
                _ => println!("Logged in (not yet confirmed by backend)."),
            }
        }
        Some("logout") => {
            app.logout();
            println!("Logged out.");
        }
        Some("whoami") => match app.session.session() {
            Some(s) => println!(
                "{} <{}> role={:?} points={}",
                s.name.as_deref().unwrap_or("?"),
                s.email.as_deref().unwrap_or("?"),
                s.role,
                s.points
            ),
            None => println!("Not logged in."),
        },
        Some("set-status") => {
            let (Some(id), Some(status)) = (args.get(1).cloned(), args.get(2).cloned()) else {
                bail!("usage: set-status <id> <status>");
            };
            let status: ReportStatus = serde_json::from_value(serde_json::Value::String(status))
                .context("Unknown status")?;
            app.refresh_reports().await;
            app.update_report_status(&id, status).await?;
            println!("Status updated.");
        }
        Some("delete") => {
            let Some(id) = args.get(1).cloned() else {
                bail!("usage: delete <id>");
            };
            app.refresh_reports().await;
            app.delete_report(&id).await?;
            println!("Report deleted.");
        }
        _ => {
            bail!(
                "usage: civic-sense <feed|leaderboard|submit|login|logout|whoami|set-status|delete> ..."
            );
        }
    }

    Ok(())
}

/// Initialize logging with an env-filterable subscriber.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("civic_sense=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
