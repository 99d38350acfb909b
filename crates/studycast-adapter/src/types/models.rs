/*
[INPUT]:  Backend schema definitions and serde requirements
[OUTPUT]: Typed Rust domain models with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the generation payload schema changes
*/

use serde::{Deserialize, Serialize};

/// One question/answer pair from the flashcard generator.
///
/// The backend may emit partial cards; missing fields default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}
