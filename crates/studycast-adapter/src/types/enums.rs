/*
[INPUT]:  Backend schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the backend stage vocabulary or provider lists change
*/

use serde::{Deserialize, Serialize};

/// Processing stage reported by `GET /api/task_status/{task_id}`.
///
/// The backend walks the five pipeline stages in order; `queued`, `done`,
/// `cancelled` and `error` sit outside the ordering. Stage strings the
/// client does not know about deserialize to `Unknown` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Stage {
    Queued,
    Extracting,
    Summary,
    Flashcards,
    Script,
    Audio,
    Done,
    Cancelled,
    Error,
    Unknown,
}

impl From<String> for Stage {
    fn from(value: String) -> Self {
        match value.as_str() {
            "queued" => Stage::Queued,
            "extracting" => Stage::Extracting,
            "summary" => Stage::Summary,
            "flashcards" => Stage::Flashcards,
            "script" => Stage::Script,
            "audio" => Stage::Audio,
            "done" => Stage::Done,
            "cancelled" | "canceled" => Stage::Cancelled,
            "error" => Stage::Error,
            _ => Stage::Unknown,
        }
    }
}

impl Stage {
    /// Human-readable status label shown while this stage is active.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Queued => "Queued…",
            Stage::Extracting => "Extracting content…",
            Stage::Summary => "Generating summary…",
            Stage::Flashcards => "Generating flashcards…",
            Stage::Script => "Creating podcast script…",
            Stage::Audio => "Generating audio…",
            Stage::Done => "Completed!",
            Stage::Cancelled => "Cancelled.",
            Stage::Error => "Error.",
            Stage::Unknown => "Processing…",
        }
    }

    /// Terminal stages end the job; no further transitions are reported.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Done | Stage::Cancelled | Stage::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Openai,
    Ollama,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TtsProvider {
    #[serde(rename = "openai")]
    Openai,
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "none")]
    Disabled,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("\"queued\"", Stage::Queued)]
    #[case("\"extracting\"", Stage::Extracting)]
    #[case("\"summary\"", Stage::Summary)]
    #[case("\"flashcards\"", Stage::Flashcards)]
    #[case("\"script\"", Stage::Script)]
    #[case("\"audio\"", Stage::Audio)]
    #[case("\"done\"", Stage::Done)]
    #[case("\"cancelled\"", Stage::Cancelled)]
    #[case("\"canceled\"", Stage::Cancelled)]
    #[case("\"error\"", Stage::Error)]
    fn stage_deserializes_known_values(#[case] raw: &str, #[case] expected: Stage) {
        let stage: Stage = serde_json::from_str(raw).expect("stage should parse");
        assert_eq!(stage, expected);
    }

    #[test]
    fn stage_tolerates_unrecognized_values() {
        let stage: Stage = serde_json::from_str("\"transcoding\"").expect("fallback should parse");
        assert_eq!(stage, Stage::Unknown);
    }

    #[test]
    fn terminal_stages() {
        assert!(Stage::Done.is_terminal());
        assert!(Stage::Cancelled.is_terminal());
        assert!(Stage::Error.is_terminal());
        assert!(!Stage::Queued.is_terminal());
        assert!(!Stage::Audio.is_terminal());
        assert!(!Stage::Unknown.is_terminal());
    }

    #[test]
    fn provider_wire_names() {
        assert_eq!(
            serde_json::to_string(&LlmProvider::Ollama).expect("serialize"),
            "\"ollama\""
        );
        assert_eq!(
            serde_json::to_string(&TtsProvider::Disabled).expect("serialize"),
            "\"none\""
        );
    }
}
