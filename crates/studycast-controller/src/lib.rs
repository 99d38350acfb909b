/*
[INPUT]:  Public API exports for the studycast-controller crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod controller;
pub mod gate;
pub mod poller;
pub mod stepper;

// Re-export main types for convenience
pub use controller::{ControllerError, TaskController, TaskEvent};
pub use gate::{CancellationGate, GateError};
pub use poller::{StatusPoller, DEFAULT_POLL_INTERVAL};
pub use stepper::{status_line, RenderPlan, StageModel, Step, StepState, PIPELINE};

// Adapter types that appear in this crate's public API
pub use studycast_adapter::{
    DocumentSource, Flashcard, GenerationResult, ProcessRequest, Stage, StudycastClient,
};
