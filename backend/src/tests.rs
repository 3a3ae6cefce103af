//! Tests for the application bootstrap, covering readiness signalling.

use std::io::Write;

use super::server::{AppSettings, ServerConfig, create_server};
use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use reviewhub::inbound::http::health::HealthState;
use rstest::{fixture, rstest};
use tempfile::NamedTempFile;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

fn settings(events_path: Option<std::path::PathBuf>) -> AppSettings {
    AppSettings {
        host: Some("127.0.0.1".to_owned()),
        port: 0,
        events_path,
        http_timeout_secs: 1,
        contact: None,
        user_agent: None,
        public_origin: None,
        users: Vec::new(),
    }
}

fn config(settings: &AppSettings) -> ServerConfig {
    ServerConfig::new(Key::generate(), false, SameSite::Lax, settings)
        .expect("settings should validate")
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(health_state: web::Data<HealthState>) {
    assert!(!health_state.is_ready(), "state should start unready");

    let _server = create_server(health_state.clone(), config(&settings(None)))
        .expect("server should build");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}

#[rstest]
#[actix_rt::test]
async fn create_server_loads_the_event_seed(health_state: web::Data<HealthState>) {
    let mut seed = NamedTempFile::new().expect("temp file");
    seed.write_all(b"[]").expect("write seed");

    let result = create_server(
        health_state.clone(),
        config(&settings(Some(seed.path().to_owned()))),
    );

    assert!(result.is_ok(), "an empty seed should load");
}

#[rstest]
#[actix_rt::test]
async fn create_server_rejects_a_broken_seed(health_state: web::Data<HealthState>) {
    let mut seed = NamedTempFile::new().expect("temp file");
    seed.write_all(b"{not json").expect("write seed");

    let result = create_server(
        health_state.clone(),
        config(&settings(Some(seed.path().to_owned()))),
    );

    assert!(result.is_err(), "a malformed seed should abort start-up");
    assert!(!health_state.is_ready(), "failed start-up stays unready");
}
