/*
[INPUT]:  Observed stage from status polling
[OUTPUT]: Render plans for the five-step progress stepper
[POS]:    Task domain logic - pure stage-to-display projection
[UPDATE]: When the pipeline order or display states change
*/

use serde::{Deserialize, Serialize};
use studycast_adapter::Stage;

/// The backend pipeline in execution order. Sentinel stages (`queued`,
/// `done`, `cancelled`, `error`) sit outside this sequence.
pub const PIPELINE: [Stage; 5] = [
    Stage::Extracting,
    Stage::Summary,
    Stage::Flashcards,
    Stage::Script,
    Stage::Audio,
];

/// Display state of a single stepper entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Pending,
    Active,
    Done,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub stage: Stage,
    pub state: StepState,
}

/// One full stepper rendering: a state per pipeline stage, plus a flag
/// marking that the observed stage was not part of the ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub steps: [Step; PIPELINE.len()],
    pub unknown_stage: bool,
}

impl RenderPlan {
    fn uniform(state: StepState, unknown_stage: bool) -> Self {
        Self {
            steps: PIPELINE.map(|stage| Step { stage, state }),
            unknown_stage,
        }
    }
}

/// Pure projection from observed stages to stepper display state.
///
/// No hidden state: applying the same stage twice yields the same plan,
/// and nothing here touches the network or any UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct StageModel;

impl StageModel {
    /// Project an observed stage onto the ordered pipeline.
    ///
    /// Stages before the observed one render done, the observed one
    /// active, the rest pending. A stage outside the ordered sequence
    /// (sentinels, unrecognized values) renders everything pending and
    /// sets `unknown_stage`.
    pub fn apply(stage: Stage) -> RenderPlan {
        let Some(index) = PIPELINE.iter().position(|s| *s == stage) else {
            return RenderPlan::uniform(StepState::Pending, true);
        };

        let steps = std::array::from_fn(|i| {
            let state = if i < index {
                StepState::Done
            } else if i == index {
                StepState::Active
            } else {
                StepState::Pending
            };
            Step {
                stage: PIPELINE[i],
                state,
            }
        });

        RenderPlan {
            steps,
            unknown_stage: false,
        }
    }

    /// Every step cancelled, unconditionally.
    pub fn cancel() -> RenderPlan {
        RenderPlan::uniform(StepState::Cancelled, false)
    }

    /// Every step done, used when the submission resolves successfully.
    pub fn complete() -> RenderPlan {
        RenderPlan::uniform(StepState::Done, false)
    }

    /// Clear all annotations back to pending.
    pub fn reset() -> RenderPlan {
        RenderPlan::uniform(StepState::Pending, false)
    }
}

/// Status line for a stage observation, with the 1-based queue position
/// appended when the task is actually waiting behind another one.
pub fn status_line(stage: Stage, queue_position: Option<u32>) -> String {
    let base = stage.label();
    match queue_position {
        Some(position) if position > 0 => {
            format!("{base} (position in queue: {})", position + 1)
        }
        _ => base.to_string(),
    }
}
