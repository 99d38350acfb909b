/*
[INPUT]:  Backend schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{LlmProvider, Stage, TtsProvider};
use super::models::Flashcard;

/// Final payload returned by a successful `POST /api/process`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub script: String,
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
    #[serde(rename = "audioUrl", default)]
    pub audio_url: Option<String>,
    #[serde(rename = "taskId", default)]
    pub task_id: String,
}

/// One polled status snapshot for a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStatus {
    #[serde(rename = "taskId")]
    pub task_id: String,
    pub stage: Stage,
    #[serde(default)]
    pub cancelled: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "queuePosition", default)]
    pub queue_position: Option<i64>,
}

impl TaskStatus {
    /// Normalized 0-based queue slot.
    ///
    /// The backend reports null for unknown/finished tasks; anything
    /// negative also means "no queue information".
    pub fn queue_slot(&self) -> Option<u32> {
        match self.queue_position {
            Some(position) if position >= 0 => Some(position as u32),
            _ => None,
        }
    }
}

/// Acknowledgement for `POST /api/tasks/{task_id}/cancel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelAck {
    pub status: String,
}

/// Liveness payload from `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Error payload the backend attaches to non-success responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
}

/// `GET /api/config` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub llm: LlmConfig,
    pub tts: TtsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmConfig {
    pub default_provider: LlmProvider,
    #[serde(default)]
    pub providers: Vec<String>,
    #[serde(default)]
    pub openai_model: String,
    #[serde(default)]
    pub default_ollama_model: String,
    #[serde(default)]
    pub ollama_models: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtsConfig {
    pub default_provider: TtsProvider,
    #[serde(default)]
    pub providers: Vec<String>,
    #[serde(default)]
    pub openai_model: String,
    #[serde(default)]
    pub openai_voice: String,
}
