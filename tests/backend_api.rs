//! Integration tests for the session and event store clients against a
//! mock backend.
//!
//! The client functions are blocking and spin up their own runtime, so
//! each test drives the mock server from a separately created runtime
//! and calls the clients directly on the test thread.

use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use evorg::app::config::Config;
use evorg::app::feed::parse_snapshot_line;
use evorg::app::store::{self, FetchOutcome};
use evorg::app::{session, AuthResponse};
use evorg::shared::config::AppConfig;
use evorg::shared::event::EventPayload;

fn test_config(server_url: String) -> Config {
    Config::with_builder(AppConfig::builder().server_url(server_url)).unwrap()
}

fn authed_config(server_url: String) -> Config {
    let mut config = test_config(server_url);
    config.set_token(Some("test-token".to_string()));
    config
}

#[test]
fn sign_in_returns_token_and_user() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/auth/signin"))
            .and(body_partial_json(json!({"email": "a@b.com"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "tok-1",
                "user": {"id": "u1", "email": "a@b.com"}
            })))
            .mount(&server),
    );

    let config = test_config(server.uri());
    let response: AuthResponse =
        session::sign_in(&config, "a@b.com".to_string(), "secret".to_string()).unwrap();

    assert_eq!(response.token, "tok-1");
    assert_eq!(response.user.email, "a@b.com");
}

#[test]
fn sign_in_surfaces_rejection() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/auth/signin"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid credentials"))
            .mount(&server),
    );

    let config = test_config(server.uri());
    let result = session::sign_in(&config, "a@b.com".to_string(), "wrong".to_string());

    let error = result.unwrap_err();
    assert!(error.contains("Sign in failed"), "got: {}", error);
    assert!(error.contains("invalid credentials"), "got: {}", error);
}

#[test]
fn sign_up_refuses_registered_email_without_calling_signup() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/auth/methods"))
            .and(query_param("email", "taken@b.com"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"methods": ["password"]})),
            )
            .mount(&server),
    );
    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/auth/signup"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server),
    );

    let config = test_config(server.uri());
    let result = session::sign_up(&config, "taken@b.com".to_string(), "secret".to_string());

    assert_eq!(result.unwrap_err(), "Email is already in use.");
    rt.block_on(server.verify());
}

#[test]
fn sign_up_creates_account_for_new_email() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/auth/methods"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"methods": []})))
            .mount(&server),
    );
    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/auth/signup"))
            .and(body_partial_json(json!({"email": "new@b.com"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "tok-2",
                "user": {"id": "u2", "email": "new@b.com"}
            })))
            .expect(1)
            .mount(&server),
    );

    let config = test_config(server.uri());
    let response =
        session::sign_up(&config, "new@b.com".to_string(), "secret".to_string()).unwrap();

    assert_eq!(response.user.id, "u2");
    rt.block_on(server.verify());
}

#[test]
fn restore_sends_bearer_token() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "u1", "email": "a@b.com"})),
            )
            .mount(&server),
    );

    let config = authed_config(server.uri());
    let user = session::restore(&config).unwrap();

    assert_eq!(user.id, "u1");
}

#[test]
fn restore_fails_on_expired_token() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server),
    );

    let config = authed_config(server.uri());
    assert!(session::restore(&config).is_err());
}

#[test]
fn get_event_decodes_document() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/events/ev-1"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "ev-1",
                "title": "Launch Party",
                "description": "Release celebration",
                "location": "HQ",
                "eventType": "Celebration",
                "date": 1717200000000i64,
                "time": 1717225200000i64,
                "ownerId": "u1",
                "createdAt": 1717000000000i64
            })))
            .mount(&server),
    );

    let config = authed_config(server.uri());
    let outcome = store::get_event(&config, "ev-1").unwrap();

    let FetchOutcome::Found(event) = outcome else {
        panic!("expected Found, got NotFound");
    };
    assert_eq!(event.id, "ev-1");
    assert_eq!(event.title, "Launch Party");
    assert_eq!(event.event_type, "Celebration");
    assert!(event.date.is_some());
    assert!(event.time.is_some());
}

#[test]
fn get_event_maps_404_to_not_found() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/api/events/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server),
    );

    let config = authed_config(server.uri());
    let outcome = store::get_event(&config, "gone").unwrap();

    assert_eq!(outcome, FetchOutcome::NotFound);
}

#[test]
fn get_event_requires_a_session() {
    let config = test_config("http://127.0.0.1:1".to_string());
    let result = store::get_event(&config, "ev-1");
    assert_eq!(result, Err("Not authenticated".to_string()));
}

#[test]
fn add_event_posts_payload_and_returns_id() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/api/events"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_partial_json(json!({
                "title": "Launch Party",
                "eventType": "Hackathon",
                "ownerId": "u1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "ev-9"})))
            .expect(1)
            .mount(&server),
    );

    let config = authed_config(server.uri());
    let payload = EventPayload {
        title: "Launch Party".to_string(),
        description: "Kickoff with a custom type".to_string(),
        location: "HQ".to_string(),
        event_type: "Hackathon".to_string(),
        date: 1717200000000,
        time: 1717225200000,
        owner_id: "u1".to_string(),
    };
    let id = store::add_event(&config, &payload).unwrap();

    assert_eq!(id, "ev-9");
    rt.block_on(server.verify());
}

#[test]
fn update_event_puts_to_the_document_path() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("PUT"))
            .and(path("/api/events/ev-1"))
            .and(body_partial_json(json!({"title": "Hackathon (moved)"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server),
    );

    let config = authed_config(server.uri());
    let payload = EventPayload {
        title: "Hackathon (moved)".to_string(),
        description: "48h of building".to_string(),
        location: "Lab 2".to_string(),
        event_type: "Workshop".to_string(),
        date: 1717200000000,
        time: 1717225200000,
        owner_id: "u1".to_string(),
    };
    store::update_event(&config, "ev-1", &payload).unwrap();

    rt.block_on(server.verify());
}

#[test]
fn delete_event_hits_the_document_path() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("DELETE"))
            .and(path("/api/events/ev-1"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server),
    );

    let config = authed_config(server.uri());
    store::delete_event(&config, "ev-1").unwrap();

    rt.block_on(server.verify());
}

#[test]
fn snapshot_line_drops_undecodable_documents() {
    let line = json!({
        "events": [
            {
                "id": "ok",
                "title": "Meetup",
                "description": "d",
                "location": "l",
                "eventType": "Meetup",
                "date": 1717200000000i64,
                "time": 1717225200000i64,
                "ownerId": "u1",
                "createdAt": 1717000000000i64
            },
            {"id": "broken"}
        ]
    })
    .to_string();

    let events = parse_snapshot_line(&line).unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "ok");
}
