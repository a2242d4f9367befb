#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use anyhow::{Context, Result};
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

pub struct StubApi {
    pub port: u16,
    pub base_url: String,
}

/// Serve `body` at GET /api/menus. With `token` set, requests without the
/// matching bearer header get a 401.
pub async fn spawn_menu_api(body: Value, token: Option<&str>) -> Result<StubApi> {
    // Pick an unused port for isolation
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .context("failed to bind stub api")?;

    let expected = token.map(|t| format!("Bearer {}", t));
    let app = Router::new().route(
        "/api/menus",
        get(move |headers: HeaderMap| {
            let body = body.clone();
            let expected = expected.clone();
            async move {
                if let Some(expected) = expected {
                    let auth = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
                    if auth != Some(expected.as_str()) {
                        return (StatusCode::UNAUTHORIZED, Json(json!({ "success": false, "error": "unauthorized" })));
                    }
                }
                (StatusCode::OK, Json(body))
            }
        }),
    );

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(StubApi {
        port,
        base_url: format!("http://127.0.0.1:{}", port),
    })
}

/// Run the `menu` binary with an isolated CLI config dir and a quiet,
/// default environment
pub fn menu(config_dir: &Path, args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_menu"))
        .args(args)
        .env("MENU_CLI_CONFIG_DIR", config_dir)
        .env("RUST_LOG", "off")
        .env_remove("MENU_ENV")
        .env_remove("MENU_RENDER_FORMAT")
        .env_remove("MENU_RENDER_INDENT")
        .env_remove("MENU_HTML_CLASS_PREFIX")
        .env_remove("MENU_ICON_GLYPHS")
        .env_remove("MENU_API_URL")
        .env_remove("MENU_API_TOKEN")
        .output()
        .context("failed to run menu binary")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Project menu as served by the API: one malformed entry and unsorted
/// siblings
pub fn project_menu() -> Value {
    json!([
        { "id": "projects", "name": "Projects", "url": "/projects", "icon": "fa-folder", "order": 2 },
        { "id": "dashboard", "name": "Dashboard", "url": "/", "icon": "fa-home" },
        { "id": "admin", "name": "Admin", "order": 5, "requiredPrivilege": "ADMIN", "children": [
            { "id": "users", "name": "Users", "url": "/admin/users", "parentId": "admin", "order": 1 },
            { "id": "roles", "name": "Roles", "url": "/admin/roles", "parentId": "admin" },
            { "name": "Nameless but no id" }
        ]},
        { "id": "tasks", "name": "Tasks", "url": "/tasks", "order": 1 }
    ])
}
