#![allow(dead_code)]

use chrono::FixedOffset;
use mockito::{Matcher, Mock, ServerGuard};
use planka_due_bot::model::Config;
use serde_json::{json, Value};

pub const TOKEN: &str = "planka-token";
pub const BOT_TOKEN: &str = "bot-token";
pub const ALLOWED_USER: i64 = 42;

pub fn config(server: &ServerGuard, utc_offset_hours: i32) -> Config {
    Config {
        planka_url: format!("{}/api", server.url()),
        username: "bot".to_string(),
        password: "secret".to_string(),
        telegram_token: BOT_TOKEN.to_string(),
        telegram_api_url: server.url(),
        allowed_users: vec![ALLOWED_USER],
        board_ids: vec!["b1".to_string()],
        timezone: FixedOffset::east_opt(utc_offset_hours * 3600).unwrap(),
    }
}

async fn get(server: &mut ServerGuard, path: &str, body: Value, hits: usize) -> Mock {
    server
        .mock("GET", path)
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .expect(hits)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

pub async fn mock_token(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/api/access-tokens")
        .match_body(Matcher::Json(json!({
            "emailOrUsername": "bot",
            "password": "secret"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "item": TOKEN }).to_string())
        .create_async()
        .await
}

pub async fn mock_token_refused(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/api/access-tokens")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code": "E_UNAUTHORIZED"}"#)
        .create_async()
        .await
}

/// Project "Ops" with the allow-listed board "Sprint" (b1) and the
/// non-listed board "Hidden" (b2).
pub async fn mock_projects(server: &mut ServerGuard) -> Vec<Mock> {
    vec![
        get(
            server,
            "/api/projects",
            json!({ "items": [{ "id": "p1", "name": "Ops" }], "included": {} }),
            1,
        )
        .await,
        get(
            server,
            "/api/projects/p1",
            json!({
                "item": { "id": "p1", "name": "Ops" },
                "included": {
                    "boards": [
                        { "id": "b1", "name": "Sprint", "projectId": "p1" },
                        { "id": "b2", "name": "Hidden", "projectId": "p1" }
                    ]
                }
            }),
            1,
        )
        .await,
    ]
}

pub async fn mock_board(
    server: &mut ServerGuard,
    board_id: &str,
    cards: Value,
    hits: usize,
) -> Mock {
    get(
        server,
        &format!("/api/boards/{board_id}"),
        json!({
            "item": { "id": board_id },
            "included": {
                "lists": [{ "id": "l1" }, { "id": "l2" }],
                "cards": cards
            }
        }),
        hits,
    )
    .await
}

pub async fn mock_actions(
    server: &mut ServerGuard,
    card_id: &str,
    actions: Value,
    hits: usize,
) -> Mock {
    get(
        server,
        &format!("/api/cards/{card_id}/actions"),
        json!({ "items": actions }),
        hits,
    )
    .await
}

pub fn card(id: &str, name: &str, due_date: Option<&str>, completed: bool, list_id: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "dueDate": due_date,
        "isDueDateCompleted": completed,
        "listId": list_id
    })
}

pub fn comment(text: &str, created_at: &str) -> Value {
    json!({
        "type": "commentCard",
        "data": { "text": text },
        "createdAt": created_at
    })
}
