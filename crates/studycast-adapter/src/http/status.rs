/*
[INPUT]:  Client task ids
[OUTPUT]: Task status snapshots and cancellation acknowledgements
[POS]:    HTTP layer - task status and cancel endpoints
[UPDATE]: When status payload fields or cancel semantics change
*/

use crate::http::{Result, StudycastClient};
use crate::types::{CancelAck, TaskStatus};
use reqwest::Method;
use uuid::Uuid;

impl StudycastClient {
    /// Query the current stage and queue position of a task
    ///
    /// GET /api/task_status/{task_id}
    pub async fn task_status(&self, task_id: Uuid) -> Result<TaskStatus> {
        let endpoint = format!("/api/task_status/{task_id}");
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Ask the backend to stop a running task.
    ///
    /// POST /api/tasks/{task_id}/cancel
    ///
    /// Fire-and-forget from the caller's point of view; local abort must
    /// not depend on this call succeeding.
    pub async fn cancel_task(&self, task_id: Uuid) -> Result<CancelAck> {
        let endpoint = format!("/api/tasks/{task_id}/cancel");
        let builder = self.request(Method::POST, &endpoint)?;
        self.send_json(builder).await
    }
}
