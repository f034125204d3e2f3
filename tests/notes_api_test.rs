//! Notes API integration tests
//!
//! Exercises the bearer-gated note endpoints: create-or-update, owner-scoped
//! listing, and ownership-checked deletion.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use uuid::Uuid;

use notewell::auth::tokens::{TokenCodec, TokenType};

use common::{
    auth_header, create_test_server, create_test_server_with_validity, register_and_login,
    TestTokens,
};

/// Create a note and return its body.
async fn create_note(server: &TestServer, token: &str, title: &str) -> serde_json::Value {
    let response = server
        .post("/notes")
        .add_header("Authorization", auth_header(token))
        .json(&json!({
            "title": title,
            "content": "the body",
            "color": 3
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

/// List the caller's notes.
async fn list_notes(server: &TestServer, token: &str) -> Vec<serde_json::Value> {
    let response = server
        .get("/notes")
        .add_header("Authorization", auth_header(token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}

#[tokio::test]
async fn create_note_generates_id_and_created_at() {
    let server = create_test_server();
    let tokens = register_and_login(&server, "ana@example.com", "Sufficient1Pw").await;

    let note = create_note(&server, &tokens.access_token, "T").await;

    assert!(note["id"].as_str().is_some());
    assert!(note["createdAt"].as_str().is_some());
    assert_eq!(note["title"], "T");
    assert_eq!(note["content"], "the body");
    assert_eq!(note["color"], 3);
    // The owner never leaves the server.
    assert!(note.get("ownerId").is_none());
}

#[tokio::test]
async fn notes_require_a_token() {
    let server = create_test_server();

    let create = server
        .post("/notes")
        .json(&json!({ "title": "T", "content": "c", "color": 1 }))
        .await;
    assert_eq!(create.status_code(), StatusCode::UNAUTHORIZED);

    let list = server.get("/notes").await;
    assert_eq!(list.status_code(), StatusCode::UNAUTHORIZED);

    let delete = server
        .delete("/notes/00000000-0000-0000-0000-000000000000")
        .await;
    assert_eq!(delete.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn notes_reject_a_malformed_bearer_header() {
    let server = create_test_server();
    register_and_login(&server, "ana@example.com", "Sufficient1Pw").await;

    let response = server
        .get("/notes")
        .add_header("Authorization", "Token abcdef")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn notes_reject_an_expired_access_token() {
    let server = create_test_server_with_validity(0, 120_000);
    let tokens = register_and_login(&server, "ana@example.com", "Sufficient1Pw").await;

    let response = server
        .get("/notes")
        .add_header("Authorization", auth_header(&tokens.access_token))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn notes_reject_an_access_token_for_an_unknown_subject() {
    let server = create_test_server();
    let tokens = register_and_login(&server, "ana@example.com", "Sufficient1Pw").await;

    // Same signing configuration as the server, proven against a token the
    // server itself issued.
    let codec = TokenCodec::new(b"integration-test-signing-secret", 60_000, 120_000);
    codec
        .verify(&tokens.access_token, TokenType::Access)
        .expect("codec should accept the server's own tokens");

    // A well-formed access token whose subject was never registered: the
    // gate's user lookup must refuse it.
    let ghost = codec.issue(Uuid::new_v4(), TokenType::Access).unwrap();
    let response = server
        .get("/notes")
        .add_header("Authorization", auth_header(&ghost.token))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_note_validates_payload_per_field() {
    let server = create_test_server();
    let tokens = register_and_login(&server, "ana@example.com", "Sufficient1Pw").await;

    let response = server
        .post("/notes")
        .add_header("Authorization", auth_header(&tokens.access_token))
        .json(&json!({ "title": "   " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    let fields: Vec<&str> = body["details"]
        .as_array()
        .expect("details array")
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["title", "content", "color"]);
}

#[tokio::test]
async fn list_returns_only_the_callers_notes() {
    let server = create_test_server();
    let ana = register_and_login(&server, "ana@example.com", "Sufficient1Pw").await;
    let ben = register_and_login(&server, "ben@example.com", "Sufficient1Pw").await;

    create_note(&server, &ana.access_token, "ana one").await;
    create_note(&server, &ana.access_token, "ana two").await;
    create_note(&server, &ben.access_token, "ben one").await;

    let ana_notes = list_notes(&server, &ana.access_token).await;
    assert_eq!(ana_notes.len(), 2);
    // Store-native order: compare as a set.
    let mut titles: Vec<&str> = ana_notes
        .iter()
        .map(|n| n["title"].as_str().unwrap())
        .collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["ana one", "ana two"]);

    let ben_notes = list_notes(&server, &ben.access_token).await;
    assert_eq!(ben_notes.len(), 1);
    assert_eq!(ben_notes[0]["title"], "ben one");
}

#[tokio::test]
async fn list_is_empty_for_a_fresh_user() {
    let server = create_test_server();
    let tokens = register_and_login(&server, "ana@example.com", "Sufficient1Pw").await;

    let notes = list_notes(&server, &tokens.access_token).await;
    assert!(notes.is_empty());
}

#[tokio::test]
async fn saving_with_an_existing_id_overwrites_the_note() {
    let server = create_test_server();
    let tokens = register_and_login(&server, "ana@example.com", "Sufficient1Pw").await;
    let note = create_note(&server, &tokens.access_token, "first draft").await;
    let id = note["id"].as_str().unwrap();

    let response = server
        .post("/notes")
        .add_header("Authorization", auth_header(&tokens.access_token))
        .json(&json!({
            "id": id,
            "title": "second draft",
            "content": "rewritten",
            "color": 5
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let updated: serde_json::Value = response.json();
    assert_eq!(updated["id"].as_str().unwrap(), id);
    assert_eq!(updated["title"], "second draft");

    let notes = list_notes(&server, &tokens.access_token).await;
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], "second draft");
}

#[tokio::test]
async fn update_with_foreign_id_commandeers_note() {
    // Saving under an id you do not own reassigns the note: the overwrite
    // path deliberately skips the ownership check the delete path makes.
    let server = create_test_server();
    let ana = register_and_login(&server, "ana@example.com", "Sufficient1Pw").await;
    let ben = register_and_login(&server, "ben@example.com", "Sufficient1Pw").await;

    let note = create_note(&server, &ana.access_token, "ana's note").await;
    let id = note["id"].as_str().unwrap();

    let response = server
        .post("/notes")
        .add_header("Authorization", auth_header(&ben.access_token))
        .json(&json!({
            "id": id,
            "title": "now ben's",
            "content": "taken over",
            "color": 1
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    assert!(list_notes(&server, &ana.access_token).await.is_empty());
    let ben_notes = list_notes(&server, &ben.access_token).await;
    assert_eq!(ben_notes.len(), 1);
    assert_eq!(ben_notes[0]["id"].as_str().unwrap(), id);
}

#[tokio::test]
async fn delete_by_owner_removes_the_note() {
    let server = create_test_server();
    let tokens = register_and_login(&server, "ana@example.com", "Sufficient1Pw").await;
    let note = create_note(&server, &tokens.access_token, "disposable").await;
    let id = note["id"].as_str().unwrap();

    let response = server
        .delete(&format!("/notes/{}", id))
        .add_header("Authorization", auth_header(&tokens.access_token))
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    assert!(list_notes(&server, &tokens.access_token).await.is_empty());

    // Gone means gone.
    let again = server
        .delete(&format!("/notes/{}", id))
        .add_header("Authorization", auth_header(&tokens.access_token))
        .await;
    assert_eq!(again.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_foreign_note_is_forbidden_and_leaves_it_intact() {
    let server = create_test_server();
    let ana = register_and_login(&server, "ana@example.com", "Sufficient1Pw").await;
    let ben = register_and_login(&server, "ben@example.com", "Sufficient1Pw").await;

    let note = create_note(&server, &ana.access_token, "ana's note").await;
    let id = note["id"].as_str().unwrap();

    let response = server
        .delete(&format!("/notes/{}", id))
        .add_header("Authorization", auth_header(&ben.access_token))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    // Ana still sees it.
    let ana_notes = list_notes(&server, &ana.access_token).await;
    assert_eq!(ana_notes.len(), 1);
    assert_eq!(ana_notes[0]["id"].as_str().unwrap(), id);
}

#[tokio::test]
async fn delete_missing_note_is_not_found() {
    let server = create_test_server();
    let tokens = register_and_login(&server, "ana@example.com", "Sufficient1Pw").await;

    let response = server
        .delete("/notes/3f1d9a30-1111-4222-8333-444455556666")
        .add_header("Authorization", auth_header(&tokens.access_token))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn note_lifecycle_scenario() {
    let server = create_test_server();
    let owner: TestTokens = register_and_login(&server, "owner@x.com", "Passw0rd1").await;
    let other: TestTokens = register_and_login(&server, "other@x.com", "Passw0rd1").await;

    // Create with no id: the server generates one and stamps createdAt.
    let note = create_note(&server, &owner.access_token, "T").await;
    let id = note["id"].as_str().unwrap().to_string();
    assert!(note["createdAt"].as_str().is_some());

    // It shows up in the owner's list.
    let listed = list_notes(&server, &owner.access_token).await;
    assert!(listed.iter().any(|n| n["id"].as_str() == Some(&id)));

    // A different authenticated user may not delete it.
    let foreign_delete = server
        .delete(&format!("/notes/{}", id))
        .add_header("Authorization", auth_header(&other.access_token))
        .await;
    assert_eq!(foreign_delete.status_code(), StatusCode::FORBIDDEN);

    // The owner may.
    let owner_delete = server
        .delete(&format!("/notes/{}", id))
        .add_header("Authorization", auth_header(&owner.access_token))
        .await;
    assert_eq!(owner_delete.status_code(), StatusCode::NO_CONTENT);

    let listed = list_notes(&server, &owner.access_token).await;
    assert!(!listed.iter().any(|n| n["id"].as_str() == Some(&id)));
}
