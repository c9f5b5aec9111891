//! Decoding tests for API payloads as the server sends them.

use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use cp_core::entities::*;
use cp_core::enums::*;
use cp_core::responses::AuthResponse;

#[test]
fn auth_response_decodes_user_and_token() {
    let body = r#"{
        "user": {"id": "u-1", "full_name": "Dana Brooks", "email": "dana@example.com", "role": "parent"},
        "token": "eyJhbGciOi.payload.sig"
    }"#;
    let resp: AuthResponse = serde_json::from_str(body).expect("auth response");
    assert_eq!(resp.user.role, Role::Parent);
    assert_eq!(resp.token, "eyJhbGciOi.payload.sig");
}

#[test]
fn user_with_unknown_role_is_rejected() {
    let body = r#"{"id": "u-1", "full_name": "X", "email": "x@example.com", "role": "owner"}"#;
    assert!(serde_json::from_str::<User>(body).is_err());
}

#[test]
fn child_accepts_either_field_spelling() {
    let canonical: Child = serde_json::from_str(
        r#"{"id": "c-1", "first_name": "Milo", "birth_date": "2019-04-12", "parent_id": "u-1"}"#,
    )
    .expect("canonical child");
    let legacy: Child = serde_json::from_str(
        r#"{"id": "c-1", "full_name": "Milo", "date_of_birth": "2019-04-12T00:00:00.000Z", "parent_id": "u-1"}"#,
    )
    .expect("legacy child");
    assert_eq!(canonical, legacy);
    assert_eq!(canonical.birth_date, NaiveDate::from_ymd_opt(2019, 4, 12).unwrap());
}

#[test]
fn plan_decodes_nested_invites_and_children() {
    let body = r#"{
        "id": "p-1",
        "title": "School year",
        "description": null,
        "start_date": "2025-09-01",
        "end_date": null,
        "status": "active",
        "created_by": "u-1",
        "created_at": "2025-08-20T10:00:00.000Z",
        "invites": [
            {"id": "i-1", "plan_id": "p-1", "email": "sam@example.com", "status": "pending", "created_at": "2025-08-21T10:00:00Z"},
            {"id": "i-2", "plan_id": "p-1", "email": "kim@example.com", "status": "accepted", "created_at": "2025-08-22T10:00:00Z"}
        ],
        "children": [
            {"id": "c-1", "first_name": "Milo", "birth_date": "2019-04-12", "parent_id": "u-1"}
        ]
    }"#;
    let plan: ParentingPlan = serde_json::from_str(body).expect("plan");
    assert_eq!(plan.status, PlanStatus::Active);
    assert_eq!(plan.description, None);
    assert_eq!(plan.end_date, None);
    assert_eq!(plan.invites().len(), 2);
    assert_eq!(plan.pending_invites().count(), 1);
    assert_eq!(plan.find_invite("i-2").map(|i| i.status), Some(InviteStatus::Accepted));
    assert_eq!(plan.children.as_ref().map(Vec::len), Some(1));
}

#[test]
fn plan_without_invites_field_has_none() {
    let body = r#"{"id": "p-2", "title": "Holidays", "status": "draft", "created_by": "u-1", "created_at": "2025-08-20T10:00:00Z"}"#;
    let plan: ParentingPlan = serde_json::from_str(body).expect("plan");
    assert!(plan.invites.is_none());
    assert!(plan.invites().is_empty());
}

#[test]
fn visit_decodes_timestamps() {
    let body = r#"{
        "id": "v-1", "plan_id": "p-1", "child_id": "c-1", "parent_id": "u-2",
        "start_time": "2025-03-14T16:00:00.000Z", "end_time": "2025-03-16T18:00:00.000Z",
        "location": "Grandma's", "created_at": "2025-03-01T08:00:00Z"
    }"#;
    let visit: Visit = serde_json::from_str(body).expect("visit");
    assert_eq!(visit.start_time, Utc.with_ymd_and_hms(2025, 3, 14, 16, 0, 0).unwrap());
    assert_eq!(visit.notes, None);
}

#[test]
fn message_flags_default_to_false() {
    let body = r#"{
        "id": "m-1", "sender_id": "u-1", "receiver_id": "u-2", "plan_id": "p-1",
        "content": "Running late", "created_at": "2025-03-14T15:55:00Z"
    }"#;
    let msg: Message = serde_json::from_str(body).expect("message");
    assert!(!msg.is_flagged);
    assert!(!msg.is_deleted);
    assert!(msg.is_unread());
}

#[test]
fn journal_entry_content_is_optional() {
    let body = r#"{
        "id": "j-1", "child_id": "c-1", "plan_id": null, "author_id": "u-1",
        "entry_date": "2025-03-14", "created_at": "2025-03-14T20:00:00Z"
    }"#;
    let entry: JournalEntry = serde_json::from_str(body).expect("entry");
    assert_eq!(entry.content, None);
    assert_eq!(entry.plan_id, None);
}

#[test]
fn child_with_both_spellings_prefers_first_name_and_birth_date() {
    let child: Child = serde_json::from_str(
        r#"{
            "id": "c-1",
            "first_name": "Milo",
            "full_name": "Milo Brooks",
            "birth_date": "2019-04-12",
            "date_of_birth": "2019-04-13T00:00:00.000Z",
            "parent_id": "u-1"
        }"#,
    )
    .expect("child with both spellings");
    assert_eq!(child.first_name, "Milo");
    assert_eq!(child.birth_date, NaiveDate::from_ymd_opt(2019, 4, 12).unwrap());
}

#[test]
fn child_without_any_name_is_rejected() {
    let result = serde_json::from_str::<Child>(
        r#"{"id": "c-1", "birth_date": "2019-04-12", "parent_id": "u-1"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn children_list_survives_mixed_spellings() {
    let children: Vec<Child> = serde_json::from_str(
        r#"[
            {"id": "c-1", "first_name": "Milo", "birth_date": "2019-04-12", "parent_id": "u-1"},
            {"id": "c-2", "first_name": "Ada", "full_name": "Ada Brooks", "date_of_birth": "2021-01-05", "parent_id": "u-1"}
        ]"#,
    )
    .expect("mixed list");
    assert_eq!(children.len(), 2);
    assert_eq!(children[1].first_name, "Ada");
}
