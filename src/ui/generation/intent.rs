use uuid::Uuid;

use crate::catalog::LengthChoice;
use crate::generation::LanguageDescription;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum GenerationIntent {
    /// An eligible submit was issued. Carries the snapshot used for placeholders.
    Submit {
        request_id: Uuid,
        languages: Vec<String>,
        length: LengthChoice,
    },

    /// UI tick (spinner animation).
    AnimationTick,

    /// Backend returned descriptions for `request_id`.
    Completed {
        request_id: Uuid,
        results: Vec<LanguageDescription>,
    },

    /// Request `request_id` failed.
    Failed { request_id: Uuid, message: String },

    /// User acknowledged a failure.
    Dismiss,
}

impl Intent for GenerationIntent {}
