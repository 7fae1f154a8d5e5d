use uuid::Uuid;

use crate::catalog::LengthChoice;
use crate::generation::LanguageDescription;
use crate::ui::mvi::UiState;

/// Lifecycle of the generation workflow.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GenerationState {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// One request in flight.
    Loading {
        request_id: Uuid,
        /// Languages selected at submit time; sizes the placeholders.
        languages: Vec<String>,
        /// Length selected at submit time.
        length: LengthChoice,
        animation_tick: u8,
    },

    /// Last request succeeded.
    Success {
        /// Languages of the request, used to order results.
        languages: Vec<String>,
        results: Vec<LanguageDescription>,
    },

    /// Last request failed. Submitting again retries.
    Failed { message: String },
}

impl UiState for GenerationState {}

impl GenerationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Id of the in-flight request, if any.
    pub fn request_id(&self) -> Option<Uuid> {
        match self {
            Self::Loading { request_id, .. } => Some(*request_id),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn animation_tick(&self) -> u8 {
        match self {
            Self::Loading { animation_tick, .. } => *animation_tick,
            _ => 0,
        }
    }
}
