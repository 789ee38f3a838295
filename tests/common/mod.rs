// SPDX-License-Identifier: MIT

use civic_sense::config::Config;
use civic_sense::App;
use std::path::Path;

/// Build an app with no backend, session file inside `dir`.
#[allow(dead_code)]
pub fn offline_app(dir: &Path) -> App {
    App::new(Config {
        backend_url: None,
        session_path: dir.join("session.json"),
    })
}

/// Build an app pointed at a (mock) backend, session file inside `dir`.
#[allow(dead_code)]
pub fn app_with_backend(backend_url: &str, dir: &Path) -> App {
    App::new(Config {
        backend_url: Some(backend_url.to_string()),
        session_path: dir.join("session.json"),
    })
}

/// JSON body of a server-side report, in the backend's wire shape.
#[allow(dead_code)]
pub fn report_json(id: &str, name: &str, description: &str, status: &str, points: i32) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "description": description,
        "status": status,
        "timestamp": 1700000000000i64,
        "pointsAwarded": points,
    })
}

/// JSON blob of a persisted session.
#[allow(dead_code)]
pub fn session_json(name: &str, role: &str, token: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "role": role,
        "points": 5,
        "token": token,
    })
}
