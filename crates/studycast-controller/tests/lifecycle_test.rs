/*
[INPUT]:  Full generation lifecycle test scenarios
[OUTPUT]: End-to-end controller behavior against a mock backend
[POS]:    Integration test layer - submission through terminal event
[UPDATE]: When adding new lifecycle scenarios
*/

use std::time::Duration;
use studycast_adapter::ClientConfig;
use studycast_controller::{
    ProcessRequest, Stage, StepState, StudycastClient, TaskController, TaskEvent,
};
use tokio::time::{sleep, timeout};
use tokio_test::assert_ok;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_INTERVAL: Duration = Duration::from_millis(20);
const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

fn test_controller(
    server: &MockServer,
) -> (
    TaskController,
    tokio::sync::mpsc::UnboundedReceiver<TaskEvent>,
) {
    let client = StudycastClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init");
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let controller = TaskController::new(client, tx).with_poll_interval(TEST_INTERVAL);
    (controller, rx)
}

fn text_request() -> ProcessRequest {
    ProcessRequest {
        text: "The borrow checker enforces aliasing rules at compile time.".to_string(),
        ..ProcessRequest::default()
    }
}

fn status_body(stage: &str, queue_position: Option<i64>) -> serde_json::Value {
    serde_json::json!({
        "taskId": "server-side-id",
        "stage": stage,
        "queuePosition": queue_position,
    })
}

/// Mount one status response per pipeline stage, consumed in order; the
/// last stage keeps answering until the job ends.
async fn mount_stage_progression(server: &MockServer) {
    for stage in ["queued", "extracting", "summary", "flashcards", "script"] {
        Mock::given(method("GET"))
            .and(path_regex(r"^/api/task_status/.+$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_body(stage, None)))
            .up_to_n_times(1)
            .mount(server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path_regex(r"^/api/task_status/.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body("audio", None)))
        .mount(server)
        .await;
}

async fn recv_event(rx: &mut tokio::sync::mpsc::UnboundedReceiver<TaskEvent>) -> TaskEvent {
    timeout(EVENT_TIMEOUT, rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("event channel closed")
}

/// Integration test: the full success path, from submission through the
/// staged progression to the final payload.
#[tokio::test]
async fn test_full_generation_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/process"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({
                    "summary": "- Aliasing XOR mutation.",
                    "script": "HOST A: Let's talk about borrows.",
                    "flashcards": [
                        {"question": "What rules does the borrow checker enforce?",
                         "answer": "Aliasing XOR mutation."},
                    ],
                    "audioUrl": "/static/audio/podcast.mp3",
                    "taskId": "server-side-id",
                }))
                .set_delay(Duration::from_millis(400)),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_stage_progression(&server).await;

    let (controller, mut rx) = test_controller(&server);
    let task_id = assert_ok!(controller.submit(text_request()).await);

    // Walk the event stream until the terminal event, recording each stage
    // change as it is applied.
    let mut observed = Vec::new();
    let completed = loop {
        match recv_event(&mut rx).await {
            TaskEvent::Progress { stage, .. } => {
                if observed.last() != Some(&stage) {
                    observed.push(stage);
                }
            }
            TaskEvent::Completed {
                task_id: done_id,
                result,
                plan,
            } => {
                assert_eq!(done_id, task_id);
                assert!(plan.steps.iter().all(|s| s.state == StepState::Done));
                break result;
            }
            other => panic!("unexpected event {other:?}"),
        }
    };

    // The optimistic projection fires first; polling then replays the
    // server's own progression on top of it.
    assert_eq!(
        observed,
        vec![
            Stage::Extracting,
            Stage::Queued,
            Stage::Extracting,
            Stage::Summary,
            Stage::Flashcards,
            Stage::Script,
            Stage::Audio,
        ]
    );

    assert_eq!(completed.summary, "- Aliasing XOR mutation.");
    assert_eq!(completed.script, "HOST A: Let's talk about borrows.");
    assert_eq!(completed.flashcards.len(), 1);
    assert_eq!(
        completed.audio_url.as_deref(),
        Some("/static/audio/podcast.mp3")
    );

    assert!(controller.is_idle().await);
}

/// Integration test: the controller is reusable after a terminal event;
/// a new submission is accepted once the previous job has unwound.
#[tokio::test]
async fn test_controller_accepts_new_job_after_completion() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/process"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "summary": "s",
            "script": "sc",
            "flashcards": [],
            "audioUrl": null,
            "taskId": "server-side-id",
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/api/task_status/.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body("summary", None)))
        .mount(&server)
        .await;

    let (controller, mut rx) = test_controller(&server);

    for _ in 0..2 {
        let task_id = assert_ok!(controller.submit(text_request()).await);
        loop {
            match recv_event(&mut rx).await {
                TaskEvent::Progress { .. } => continue,
                TaskEvent::Completed { task_id: done_id, .. } => {
                    assert_eq!(done_id, task_id);
                    break;
                }
                other => panic!("unexpected event {other:?}"),
            }
        }
        assert!(controller.is_idle().await);
    }
}

/// Integration test: cancelling mid-flight delivers exactly one terminal
/// event, renders every step cancelled, and silences the poller.
#[tokio::test]
async fn test_cancel_mid_flight_delivers_single_terminal_event() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/process"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({
                    "summary": "s", "script": "sc", "flashcards": [],
                    "audioUrl": null, "taskId": "server-side-id",
                }))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/api/task_status/.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body("summary", None)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/api/tasks/.+/cancel$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (controller, mut rx) = test_controller(&server);
    let task_id = assert_ok!(controller.submit(text_request()).await);

    sleep(TEST_INTERVAL * 3).await;
    controller.cancel().await;
    // A second cancel finds the gate already released and does nothing.
    controller.cancel().await;

    let cancelled = loop {
        match recv_event(&mut rx).await {
            TaskEvent::Progress { .. } => continue,
            TaskEvent::Cancelled {
                task_id: cancelled_id,
                plan,
            } => {
                assert_eq!(cancelled_id, task_id);
                break plan;
            }
            other => panic!("unexpected event {other:?}"),
        }
    };
    assert!(cancelled.steps.iter().all(|s| s.state == StepState::Cancelled));

    sleep(TEST_INTERVAL * 5).await;
    assert!(rx.try_recv().is_err());
    assert!(controller.is_idle().await);
}
