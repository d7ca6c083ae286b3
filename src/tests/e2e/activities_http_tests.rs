use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::activities::adapters::outbound::registry_in_memory::InMemoryActivityRegistry;
use crate::modules::activities::core::seed::SEED_ACTIVITY_NAMES;
use crate::shell::http::router;
use crate::shell::state::AppState;

fn app() -> Router {
    router(
        AppState::new(Arc::new(InMemoryActivityRegistry::seeded())),
        "static",
    )
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Request::post(uri).body(Body::empty()).unwrap()).await
}

#[tokio::test]
async fn lists_every_activity_with_all_fields() {
    let app = app();

    let (status, json) = get(&app, "/activities").await;

    assert_eq!(status, StatusCode::OK);
    for name in SEED_ACTIVITY_NAMES {
        let activity = json.get(name).unwrap_or_else(|| panic!("missing {name}"));
        for field in ["description", "schedule", "max_participants", "participants"] {
            assert!(activity.get(field).is_some(), "{name} missing {field}");
        }
    }
}

#[tokio::test]
async fn signs_up_a_participant() {
    let app = app();

    let (status, json) = post(&app, "/activities/Tennis%20Club/signup?email=test@example.com").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["message"].as_str().unwrap().contains("test@example.com"));
}

#[tokio::test]
async fn rejects_sign_up_for_an_unknown_activity() {
    let app = app();

    let (status, json) = post(&app, "/activities/NonExistent/signup?email=test@example.com").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Activity not found");
}

#[tokio::test]
async fn rejects_a_duplicate_sign_up() {
    let app = app();
    let uri = "/activities/Tennis%20Club/signup?email=duplicate@example.com";

    let (first, _) = post(&app, uri).await;
    let (second, json) = post(&app, uri).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert!(json["detail"].as_str().unwrap().contains("already signed up"));
}

#[tokio::test]
async fn signs_up_then_unregisters_a_participant() {
    let app = app();
    let (_, before) = get(&app, "/activities").await;

    let (signed_up, _) = post(
        &app,
        "/activities/Basketball%20Team/signup?email=unregister@example.com",
    )
    .await;
    let (status, json) = post(
        &app,
        "/activities/Basketball%20Team/unregister?email=unregister@example.com",
    )
    .await;
    let (_, after) = get(&app, "/activities").await;

    assert_eq!(signed_up, StatusCode::OK);
    assert_eq!(status, StatusCode::OK);
    assert!(json["message"].as_str().unwrap().contains("unregister@example.com"));
    assert_eq!(
        after["Basketball Team"]["participants"],
        before["Basketball Team"]["participants"]
    );
}

#[tokio::test]
async fn rejects_unregistering_from_an_unknown_activity() {
    let app = app();

    let (status, json) = post(&app, "/activities/NonExistent/unregister?email=test@example.com").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Activity not found");
}

#[tokio::test]
async fn rejects_unregistering_someone_who_never_signed_up() {
    let app = app();

    let (status, json) = post(
        &app,
        "/activities/Tennis%20Club/unregister?email=notaparticipant@example.com",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Participant not found");
}

#[tokio::test]
async fn shows_new_participants_in_the_listing_in_signup_order() {
    let app = app();

    for email in ["first@example.com", "second@example.com"] {
        let (status, _) = post(&app, &format!("/activities/Debate%20Team/signup?email={email}")).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (_, json) = get(&app, "/activities").await;

    assert_eq!(
        json["Debate Team"]["participants"],
        serde_json::json!(["ava@mergington.edu", "first@example.com", "second@example.com"])
    );
}

#[tokio::test]
async fn keeps_signing_up_past_max_participants() {
    let app = app();
    let (_, json) = get(&app, "/activities").await;
    let max = json["Debate Team"]["max_participants"].as_u64().unwrap();

    for i in 0..max {
        let (status, _) = post(&app, &format!("/activities/Debate%20Team/signup?email=s{i}@example.com")).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (_, json) = get(&app, "/activities").await;

    let roster = json["Debate Team"]["participants"].as_array().unwrap();
    assert_eq!(roster.len() as u64, max + 1);
}

#[tokio::test]
async fn does_not_share_state_between_router_instances() {
    let (status, _) = post(&app(), "/activities/Chess%20Club/signup?email=isolated@example.com").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = post(&app(), "/activities/Chess%20Club/signup?email=isolated@example.com").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn records_every_concurrent_sign_up() {
    let app = app();

    let requests = (0..20).map(|i| {
        let app = app.clone();
        async move {
            post(&app, &format!("/activities/Programming%20Class/signup?email=p{i}@example.com")).await
        }
    });
    let results = spawn_all(requests).await;
    let (_, json) = get(&app, "/activities").await;

    assert!(results.iter().all(|(status, _)| *status == StatusCode::OK));
    assert_eq!(
        json["Programming Class"]["participants"].as_array().unwrap().len(),
        22
    );
}

async fn spawn_all<F>(futures: impl Iterator<Item = F>) -> Vec<F::Output>
where
    F: std::future::Future + Send + 'static,
    F::Output: Send + 'static,
{
    let handles: Vec<_> = futures.map(tokio::spawn).collect();
    let mut outputs = Vec::with_capacity(handles.len());
    for handle in handles {
        outputs.push(handle.await.unwrap());
    }
    outputs
}
