/*
[INPUT]:  Backend API schema
[OUTPUT]: Typed request/response/domain models
[POS]:    Data layer - module wiring
[UPDATE]: When type modules are added or removed
*/

pub mod enums;
pub mod models;
pub mod requests;
pub mod responses;

pub use enums::{LlmProvider, Stage, TtsProvider};
pub use models::Flashcard;
pub use requests::{DocumentSource, ProcessRequest, DEFAULT_DURATION_MINUTES, DEFAULT_STYLE};
pub use responses::{
    BackendConfig, CancelAck, ErrorBody, GenerationResult, HealthStatus, LlmConfig, TaskStatus,
    TtsConfig,
};
