//! Resource services and the request helper against a stub API.

mod common;

use common::{Reply, StubServer, anonymous, logged_in, plan_json};
use chrono::{NaiveDate, TimeZone, Utc};
use cp_client::services::{children, journal, messages, plans, visits};
use cp_client::{ApiError, RequestOptions};
use cp_core::payloads::{
    CreateChildPayload, CreateJournalPayload, CreateVisitPayload, SendMessagePayload,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn bearer_token_is_attached_when_logged_in() {
    let server = StubServer::start(|_| Reply::json(200, &json!({"children": []})));
    let client = server.client(logged_in("u-1", "dana@example.com"));

    children::list(&client).await.expect("list");

    let req = &server.requests()[0];
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/children");
    assert_eq!(req.authorization.as_deref(), Some("Bearer token-u-1"));
    assert_eq!(req.content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn no_authorization_header_without_a_session() {
    let server = StubServer::start(|_| Reply::json(200, &json!({"plans": []})));
    let client = server.client(anonymous());

    let plans = plans::list(&client).await.expect("list");

    assert!(plans.is_empty());
    assert_eq!(server.requests()[0].authorization, None);
}

#[tokio::test]
async fn error_body_text_becomes_the_message() {
    let server = StubServer::start(|_| Reply::text(403, "You are not a member of this plan"));
    let client = server.client(logged_in("u-1", "dana@example.com"));

    let err = visits::list_by_plan(&client, "p-1").await.expect_err("forbidden");

    assert_eq!(err.to_string(), "You are not a member of this plan");
    assert_eq!(err.status(), Some(403));
}

#[tokio::test]
async fn empty_error_body_falls_back_to_status_text() {
    let server = StubServer::start(|_| Reply::text(404, ""));
    let client = server.client(logged_in("u-1", "dana@example.com"));

    let err = messages::list_by_plan(&client, "p-404").await.expect_err("missing");

    assert_eq!(err.to_string(), "Not Found");
}

#[tokio::test]
async fn missing_envelope_field_is_an_error() {
    let server = StubServer::start(|_| Reply::json(200, &json!({"items": []})));
    let client = server.client(logged_in("u-1", "dana@example.com"));

    let err = children::list(&client).await.expect_err("wrong envelope");

    assert!(matches!(err, ApiError::MissingField { field: "children", .. }));
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_error() {
    let server = StubServer::start(|_| Reply::text(200, "<html>proxy page</html>"));
    let client = server.client(logged_in("u-1", "dana@example.com"));

    let err = plans::list(&client).await.expect_err("html body");

    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let client = cp_client::ApiClient::new("http://127.0.0.1:9/api", anonymous());
    let err = children::list(&client).await.expect_err("nothing listening");
    assert!(matches!(err, ApiError::Transport { .. }));
}

#[tokio::test]
async fn path_ids_are_percent_encoded() {
    let server = StubServer::start(|_| Reply::json(200, &json!({"entries": []})));
    let client = server.client(logged_in("u-1", "dana@example.com"));

    journal::list_by_child(&client, "child 1/2").await.expect("list");

    assert_eq!(server.requests()[0].path, "/journal/child/child%201%2F2");
}

#[tokio::test]
async fn create_child_posts_payload_and_unwraps_child() {
    let server = StubServer::start(|req| {
        let body = req.json();
        Reply::json(
            201,
            &json!({"child": {
                "id": "c-1",
                "first_name": body["first_name"],
                "birth_date": body["birth_date"],
                "parent_id": body["parent_id"],
            }}),
        )
    });
    let client = server.client(logged_in("u-1", "dana@example.com"));

    let child = children::create(
        &client,
        &CreateChildPayload {
            first_name: "Milo".into(),
            birth_date: NaiveDate::from_ymd_opt(2019, 4, 12).unwrap(),
            parent_id: "u-1".into(),
        },
    )
    .await
    .expect("create");

    assert_eq!(child.id, "c-1");
    assert_eq!(child.first_name, "Milo");
    let req = &server.requests()[0];
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/children");
    assert_eq!(req.json()["birth_date"], "2019-04-12");
}

#[tokio::test]
async fn create_visit_and_list_by_plan() {
    let visit = json!({
        "id": "v-1", "plan_id": "p-1", "child_id": "c-1", "parent_id": "u-1",
        "start_time": "2025-03-14T16:00:00Z", "end_time": "2025-03-16T18:00:00Z",
        "location": "Grandma's", "notes": "Bring the bike", "created_at": "2025-03-01T08:00:00Z"
    });
    let server = {
        let visit = visit.clone();
        StubServer::start(move |req| match (req.method.as_str(), req.path.as_str()) {
            ("POST", "/visits") => Reply::json(201, &json!({"visit": visit})),
            ("GET", "/visits/plan/p-1") => Reply::json(200, &json!({"visits": [visit]})),
            _ => Reply::text(404, ""),
        })
    };
    let client = server.client(logged_in("u-1", "dana@example.com"));

    let created = visits::create(
        &client,
        &CreateVisitPayload {
            plan_id: "p-1".into(),
            child_id: "c-1".into(),
            parent_id: "u-1".into(),
            start_time: Utc.with_ymd_and_hms(2025, 3, 14, 16, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2025, 3, 16, 18, 0, 0).unwrap(),
            location: "Grandma's".into(),
            notes: Some("Bring the bike".into()),
        },
    )
    .await
    .expect("create");
    let listed = visits::list_by_plan(&client, "p-1").await.expect("list");

    assert_eq!(listed, vec![created]);
    assert_eq!(server.requests()[0].json()["start_time"], "2025-03-14T16:00:00Z");
}

#[tokio::test]
async fn send_message_unwraps_message() {
    let server = StubServer::start(|req| {
        let body = req.json();
        Reply::json(
            201,
            &json!({"message": {
                "id": "m-1",
                "sender_id": body["sender_id"],
                "receiver_id": body["receiver_id"],
                "plan_id": body["plan_id"],
                "content": body["content"],
                "created_at": "2025-03-14T15:55:00Z",
                "is_flagged": false,
                "is_deleted": false
            }}),
        )
    });
    let client = server.client(logged_in("u-1", "dana@example.com"));

    let msg = messages::send(
        &client,
        &SendMessagePayload {
            sender_id: "u-1".into(),
            receiver_id: "u-2".into(),
            plan_id: "p-1".into(),
            content: "Running late".into(),
        },
    )
    .await
    .expect("send");

    assert_eq!(msg.content, "Running late");
    assert_eq!(server.requests()[0].path, "/messages");
}

#[tokio::test]
async fn create_journal_entry_omits_absent_plan() {
    let server = StubServer::start(|_| {
        Reply::json(
            201,
            &json!({"entry": {
                "id": "j-1", "child_id": "c-1", "author_id": "u-1",
                "entry_date": "2025-03-14", "content": "First bike ride",
                "created_at": "2025-03-14T20:00:00Z"
            }}),
        )
    });
    let client = server.client(logged_in("u-1", "dana@example.com"));

    let entry = journal::create(
        &client,
        &CreateJournalPayload {
            child_id: "c-1".into(),
            author_id: "u-1".into(),
            content: "First bike ride".into(),
            entry_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            plan_id: None,
        },
    )
    .await
    .expect("create");

    assert_eq!(entry.content.as_deref(), Some("First bike ride"));
    assert!(server.requests()[0].json().get("plan_id").is_none());
}

#[tokio::test]
async fn custom_headers_are_forwarded_but_token_wins() {
    let server = StubServer::start(|_| Reply::json(200, &json!({"plans": [plan_json("p-1", "A")]})));
    let client = server.client(logged_in("u-1", "dana@example.com"));

    let options = RequestOptions::get().with_header("Authorization", "Basic ignored");
    let plans: Vec<cp_core::entities::ParentingPlan> = client
        .request_field("/plans", options, "plans")
        .await
        .expect("plans");

    assert_eq!(plans.len(), 1);
    assert_eq!(
        server.requests()[0].authorization.as_deref(),
        Some("Bearer token-u-1")
    );
}
