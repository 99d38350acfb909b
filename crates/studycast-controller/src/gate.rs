/*
[INPUT]:  Job ids and the adapter client for best-effort remote notify
[OUTPUT]: Single-owner abort handle with clear-once release semantics
[POS]:    Task domain logic - cancellation ownership for the active job
[UPDATE]: When cancellation ordering or release guarantees change
*/

use studycast_adapter::StudycastClient;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use uuid::Uuid;

/// Errors from acquiring the cancellation handle
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("a cancellation handle is already active")]
    AlreadyActive,
}

/// Holds the abort handle for the one in-flight job.
///
/// Exactly one of `cancel` / `complete` has an effect per job: whichever
/// runs second finds the handle already released and does nothing. That
/// keeps a late network response from resurrecting a cancelled job.
#[derive(Debug, Default)]
pub struct CancellationGate {
    handle: Option<CancellationToken>,
}

impl CancellationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Acquire the handle for a new job.
    pub fn begin(&mut self) -> Result<CancellationToken, GateError> {
        if self.handle.is_some() {
            return Err(GateError::AlreadyActive);
        }
        let token = CancellationToken::new();
        self.handle = Some(token.clone());
        Ok(token)
    }

    /// Cancel the active job: notify the backend, then abort locally.
    ///
    /// The remote notification is best-effort; a failure is logged and the
    /// local abort proceeds regardless. No-op when no handle is held.
    pub async fn cancel(&mut self, client: &StudycastClient, task_id: Uuid) {
        let Some(token) = self.handle.take() else {
            return;
        };

        if let Err(err) = client.cancel_task(task_id).await {
            warn!(%task_id, error = %err, "cancel notification failed; aborting locally anyway");
        }

        token.cancel();
        debug!(%task_id, "local abort signalled");
    }

    /// Release the handle without signalling, on normal completion or
    /// failure of the submission call. No-op when already released.
    pub fn complete(&mut self) {
        self.handle.take();
    }
}
