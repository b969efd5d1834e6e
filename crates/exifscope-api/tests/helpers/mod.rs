//! Test helpers: build the router and a test server for integration tests.
//!
//! Run from workspace root: `cargo test -p exifscope-api --test analyze_test`.

pub mod fixtures;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use exifscope_api::setup::routes;
use exifscope_api::state::AppState;
use exifscope_core::Config;
use std::sync::Arc;

/// Configuration with defaults only; the process environment is ignored.
pub fn test_config() -> Config {
    Config::from_lookup(|_| None).expect("default configuration must be valid")
}

pub fn setup_test_server_with(config: Config) -> TestServer {
    let state = Arc::new(AppState::new(config.clone()));
    let app = routes::setup_routes(&config, state).expect("Failed to setup routes");
    TestServer::new(app.into_make_service()).expect("Failed to create test server")
}

pub fn setup_test_server() -> TestServer {
    setup_test_server_with(test_config())
}

/// Multipart form with a single `file` part.
pub fn file_form(data: Vec<u8>, file_name: &str, mime_type: &str) -> MultipartForm {
    let part = Part::bytes(bytes::Bytes::from(data))
        .file_name(file_name.to_string())
        .mime_type(mime_type.to_string());
    MultipartForm::new().add_part("file", part)
}
