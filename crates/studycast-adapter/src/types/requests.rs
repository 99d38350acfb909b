/*
[INPUT]:  User-supplied source material and generation preferences
[OUTPUT]: Typed Rust request structs for job submission
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When submission form fields change
*/

use super::enums::{LlmProvider, TtsProvider};

pub const DEFAULT_DURATION_MINUTES: u32 = 5;
pub const DEFAULT_STYLE: &str = "dynamic_duo";

/// An uploaded source document, sent as the multipart `file` part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Everything the backend needs to run one generation job.
///
/// Providers left as `None` are sent as blank form fields so the backend
/// falls back to its configured defaults.
#[derive(Debug, Clone)]
pub struct ProcessRequest {
    pub document: Option<DocumentSource>,
    pub text: String,
    pub duration_minutes: u32,
    pub style: String,
    pub llm_provider: Option<LlmProvider>,
    pub llm_model: Option<String>,
    pub tts_provider: Option<TtsProvider>,
}

impl Default for ProcessRequest {
    fn default() -> Self {
        Self {
            document: None,
            text: String::new(),
            duration_minutes: DEFAULT_DURATION_MINUTES,
            style: DEFAULT_STYLE.to_string(),
            llm_provider: None,
            llm_model: None,
            tts_provider: None,
        }
    }
}

impl ProcessRequest {
    /// Whether the request carries any source material at all.
    pub fn has_source(&self) -> bool {
        self.document.is_some() || !self.text.trim().is_empty()
    }
}
