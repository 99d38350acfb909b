/*
[INPUT]:  Generation requests, user cancellation, adapter client
[OUTPUT]: One submission per request, progress/terminal events, teardown
[POS]:    Task domain logic - lifecycle orchestration for the active job
[UPDATE]: When submission, teardown, or duplicate-job guarantees change
*/

use crate::gate::CancellationGate;
use crate::poller::{StatusPoller, DEFAULT_POLL_INTERVAL};
use crate::stepper::{RenderPlan, StageModel, PIPELINE};
use std::sync::Arc;
use std::time::Duration;
use studycast_adapter::{GenerationResult, ProcessRequest, Stage, StudycastClient};
use thiserror::Error;
use tokio::sync::{mpsc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

/// Synchronous rejections from `submit`. Neither issues a network call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("a generation job is already running")]
    AlreadyRunning,
    #[error("Provide a document or text first.")]
    EmptyInput,
}

/// Everything the rendering collaborator receives.
///
/// Exactly one of `Completed` / `Failed` / `Cancelled` is delivered per
/// job. `Failed` deliberately carries no plan: the stepper stays at its
/// last-known state while the error message is shown.
#[derive(Debug, Clone)]
pub enum TaskEvent {
    Progress {
        task_id: Uuid,
        stage: Stage,
        queue_position: Option<u32>,
        plan: RenderPlan,
    },
    Completed {
        task_id: Uuid,
        result: GenerationResult,
        plan: RenderPlan,
    },
    Failed {
        task_id: Uuid,
        message: String,
    },
    Cancelled {
        task_id: Uuid,
        plan: RenderPlan,
    },
}

/// The one piece of shared mutable state: which job is active, and its
/// abort handle. Owned jointly by the controller, the driver task it
/// spawns, and the poller (read-only id check).
#[derive(Debug, Default)]
pub struct JobSlot {
    pub(crate) active: Option<Uuid>,
    pub(crate) gate: CancellationGate,
}

impl JobSlot {
    pub fn is_current(&self, task_id: Uuid) -> bool {
        self.active == Some(task_id)
    }
}

/// Drives one generation job at a time from submission to teardown.
///
/// `submit` spawns a driver task that races the submission call against
/// the job's abort handle; whichever way it resolves, the driver stops
/// the poller, releases the gate, clears the slot, and emits exactly one
/// terminal event. Cheap to clone; clones share the same job slot.
#[derive(Debug, Clone)]
pub struct TaskController {
    client: Arc<StudycastClient>,
    events: mpsc::UnboundedSender<TaskEvent>,
    slot: Arc<Mutex<JobSlot>>,
    poll_interval: Duration,
}

impl TaskController {
    pub fn new(client: StudycastClient, events: mpsc::UnboundedSender<TaskEvent>) -> Self {
        Self {
            client: Arc::new(client),
            events,
            slot: Arc::new(Mutex::new(JobSlot::default())),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the status poll cadence. Tests use this to drive the
    /// lifecycle against wiremock without waiting out real seconds.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub async fn is_idle(&self) -> bool {
        self.slot.lock().await.active.is_none()
    }

    /// Submit a new generation job.
    ///
    /// Rejected synchronously when the request has no source material or
    /// another job is still active; no network traffic happens in either
    /// case. On acceptance the returned id identifies the job in all
    /// subsequent events.
    pub async fn submit(&self, request: ProcessRequest) -> Result<Uuid, ControllerError> {
        if !request.has_source() {
            return Err(ControllerError::EmptyInput);
        }

        let task_id = Uuid::new_v4();
        let token = {
            let mut slot = self.slot.lock().await;
            if slot.active.is_some() {
                return Err(ControllerError::AlreadyRunning);
            }
            let token = slot
                .gate
                .begin()
                .map_err(|_| ControllerError::AlreadyRunning)?;
            slot.active = Some(task_id);
            token
        };

        info!(%task_id, "submitting generation job");

        // Optimistic projection: show the first pipeline stage as active
        // before the server has reported anything.
        let first = PIPELINE[0];
        let _ = self.events.send(TaskEvent::Progress {
            task_id,
            stage: first,
            queue_position: None,
            plan: StageModel::apply(first),
        });

        let poller = StatusPoller::spawn(
            self.client.clone(),
            task_id,
            self.slot.clone(),
            self.events.clone(),
            self.poll_interval,
        );

        let client = self.client.clone();
        let slot = self.slot.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            // Dropping the submission future on abort discards whatever
            // response might still arrive for it.
            let outcome = tokio::select! {
                result = client.process(task_id, &request) => Some(result),
                _ = token.cancelled() => None,
            };

            poller.stop();
            let mut slot = slot.lock().await;
            slot.active = None;

            match outcome {
                Some(Ok(result)) => {
                    slot.gate.complete();
                    info!(%task_id, "generation completed");
                    let _ = events.send(TaskEvent::Completed {
                        task_id,
                        result,
                        plan: StageModel::complete(),
                    });
                }
                Some(Err(err)) => {
                    slot.gate.complete();
                    warn!(%task_id, error = %err, "generation failed");
                    let _ = events.send(TaskEvent::Failed {
                        task_id,
                        message: err.user_message(),
                    });
                }
                None => {
                    // The gate already released the handle inside cancel().
                    info!(%task_id, "generation cancelled");
                    let _ = events.send(TaskEvent::Cancelled {
                        task_id,
                        plan: StageModel::cancel(),
                    });
                }
            }
        });

        Ok(task_id)
    }

    /// Cancel the active job, if any.
    ///
    /// Best-effort remote notify, then local abort; the driver task then
    /// finishes teardown and emits the `Cancelled` event.
    pub async fn cancel(&self) {
        let mut slot = self.slot.lock().await;
        let Some(task_id) = slot.active else {
            return;
        };
        info!(%task_id, "cancelling generation job");
        slot.gate.cancel(&self.client, task_id).await;
    }
}
