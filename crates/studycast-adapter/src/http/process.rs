/*
[INPUT]:  Source material, generation preferences, and a client task id
[OUTPUT]: Generation result payload (summary, script, flashcards, audio)
[POS]:    HTTP layer - multipart job submission endpoint
[UPDATE]: When submission form fields or the result payload change
*/

use crate::http::{Result, StudycastClient};
use crate::types::{GenerationResult, ProcessRequest};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

/// Render an optional provider enum to its wire value, blank when unset.
fn form_value<T: Serialize>(value: Option<&T>) -> Result<String> {
    let Some(value) = value else {
        return Ok(String::new());
    };
    Ok(serde_json::to_string(value)?.trim_matches('"').to_string())
}

impl StudycastClient {
    /// Submit one generation job and wait for the final payload.
    ///
    /// POST /api/process (multipart)
    ///
    /// The call stays open for the whole pipeline run; progress arrives
    /// separately via `task_status`. Dropping the returned future aborts
    /// the request mid-flight.
    pub async fn process(&self, task_id: Uuid, request: &ProcessRequest) -> Result<GenerationResult> {
        let mut form = Form::new();

        if let Some(document) = &request.document {
            let part = Part::bytes(document.bytes.clone()).file_name(document.file_name.clone());
            form = form.part("file", part);
        }

        form = form
            .text("text", request.text.clone())
            .text("duration", request.duration_minutes.to_string())
            .text("style", request.style.clone())
            .text("llm_provider", form_value(request.llm_provider.as_ref())?)
            .text("llm_model", request.llm_model.clone().unwrap_or_default())
            .text("tts_provider", form_value(request.tts_provider.as_ref())?)
            .text("task_id", task_id.to_string());

        let builder = self.request(Method::POST, "/api/process")?.multipart(form);
        self.send_json(builder).await
    }
}
