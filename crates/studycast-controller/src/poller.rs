/*
[INPUT]:  Active job id, shared job slot, adapter client, poll interval
[OUTPUT]: Progress events per observed stage until the job ends
[POS]:    Task domain logic - repeating status probe for the active job
[UPDATE]: When poll cadence or stale-response guarding changes
*/

use crate::controller::{JobSlot, TaskEvent};
use crate::stepper::StageModel;
use std::sync::Arc;
use std::time::Duration;
use studycast_adapter::{Stage, StudycastClient};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Repeating status probe for one job.
///
/// A side-channel progress indicator only: poll failures are skipped and
/// never become job failures, and the loop exits on its own once the job
/// id is no longer current or the server reports a terminal stage.
#[derive(Debug)]
pub struct StatusPoller {
    stop: CancellationToken,
    handle: JoinHandle<()>,
}

impl StatusPoller {
    /// Start polling `task_id` every `interval`.
    ///
    /// Each tick re-checks that `task_id` is still the slot's active job,
    /// both before querying and after the round trip, so a delayed
    /// response can never repaint a finished or cancelled job.
    pub fn spawn(
        client: Arc<StudycastClient>,
        task_id: Uuid,
        slot: Arc<Mutex<JobSlot>>,
        events: mpsc::UnboundedSender<TaskEvent>,
        interval: Duration,
    ) -> Self {
        let stop = CancellationToken::new();
        let stop_signal = stop.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    biased;
                    _ = stop_signal.cancelled() => break,
                    _ = ticker.tick() => {}
                }

                if !slot.lock().await.is_current(task_id) {
                    break;
                }

                let status = match client.task_status(task_id).await {
                    Ok(status) => status,
                    Err(err) => {
                        debug!(%task_id, error = %err, "status poll failed; retrying next tick");
                        continue;
                    }
                };

                if status.stage == Stage::Unknown {
                    debug!(%task_id, "unrecognized stage reported; skipping tick");
                    continue;
                }

                // The submission call is the authoritative terminal signal;
                // a terminal stage here only means polling can stop.
                if status.stage.is_terminal() {
                    debug!(%task_id, stage = ?status.stage, "terminal stage observed; poller exiting");
                    break;
                }

                // Re-check after the round trip: the job may have ended
                // while this response was in flight. The send happens under
                // the same lock the driver holds while emitting its terminal
                // event, so a stale tick can never land after it.
                let guard = slot.lock().await;
                if !guard.is_current(task_id) {
                    break;
                }
                let event = TaskEvent::Progress {
                    task_id,
                    stage: status.stage,
                    queue_position: status.queue_slot(),
                    plan: StageModel::apply(status.stage),
                };
                let delivered = events.send(event).is_ok();
                drop(guard);
                if !delivered {
                    break;
                }
            }
        });

        Self { stop, handle }
    }

    /// Stop polling. Idempotent; safe to call after the loop has already
    /// exited on its own.
    pub fn stop(&self) {
        self.stop.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
