//! Roster loading against a mock user service.

mod common;

use assert_matches::assert_matches;
use common::{profile, RecordingCue};
use murmur::app::chat::ChatSession;
use murmur::app::config::Config;
use murmur::app::relay::RelayConnection;
use murmur::app::roster::RosterClient;
use murmur::shared::config::AppConfig;
use murmur::shared::error::ClientError;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    Config::with_builder(AppConfig::builder().server_url(server.uri()))
        .unwrap()
        .with_identity("u1", "Alice")
}

#[tokio::test]
async fn fetch_maps_users() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": [
                { "id": "u1", "display_name": "Alice" },
                { "id": "u2", "display_name": "Bob", "avatar_url": "http://cdn/bob.png" },
            ]
        })))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let users = tokio::task::spawn_blocking(move || RosterClient::new(config).fetch_users())
        .await
        .expect("join")
        .expect("fetch");

    assert_eq!(users.len(), 2);
    assert_eq!(users[1].id, "u2");
    assert_eq!(users[1].avatar_url.as_deref(), Some("http://cdn/bob.png"));
}

#[tokio::test]
async fn fetch_reports_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let err = tokio::task::spawn_blocking(move || RosterClient::new(config).fetch_users())
        .await
        .expect("join")
        .unwrap_err();

    assert_matches!(err, ClientError::Http { status: 500, .. });
}

#[tokio::test]
async fn session_loads_roster_and_excludes_self() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": [
                { "id": "u1", "display_name": "Alice" },
                { "id": "u2", "display_name": "Bob" },
            ]
        })))
        .mount(&server)
        .await;

    let config = config_for(&server);
    tokio::task::spawn_blocking(move || {
        let (relay, _peer) = RelayConnection::detached();
        let mut session =
            ChatSession::new(relay, profile("u1", "Alice"), Box::new(RecordingCue::new()));
        session.load_roster(&config);

        for _ in 0..500 {
            session.pump();
            if !session.state.is_loading_roster {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        assert!(!session.state.is_loading_roster, "fetch never settled");
        assert_eq!(session.state.roster.len(), 1);
        assert_eq!(session.state.roster[0].id, "u2");
        assert!(session.state.ui_error.is_none());
    })
    .await
    .expect("join");
}

#[tokio::test]
async fn session_surfaces_roster_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&server)
        .await;

    let config = config_for(&server);
    tokio::task::spawn_blocking(move || {
        let (relay, _peer) = RelayConnection::detached();
        let mut session =
            ChatSession::new(relay, profile("u1", "Alice"), Box::new(RecordingCue::new()));
        session.load_roster(&config);

        for _ in 0..500 {
            session.pump();
            if !session.state.is_loading_roster {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        assert!(session.state.roster.is_empty());
        assert!(session.state.ui_error.is_some());
    })
    .await
    .expect("join");
}
