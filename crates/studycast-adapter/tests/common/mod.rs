/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for studycast-adapter tests

use serde_json::{json, Value};
use studycast_adapter::{ClientConfig, StudycastClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at the mock server
pub fn mock_client(server: &MockServer) -> StudycastClient {
    StudycastClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// A representative successful generation payload
pub fn generation_result_json(task_id: &str) -> Value {
    json!({
        "summary": "- The lecture covers ownership.",
        "script": "HOST A: Today we talk about ownership.\nHOST B: Right!",
        "flashcards": [
            {"question": "What enforces memory safety?", "answer": "The borrow checker."},
        ],
        "audioUrl": "/static/audio/podcast.mp3",
        "taskId": task_id,
    })
}
