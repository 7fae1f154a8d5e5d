use crate::ui::mvi::Reducer;

use super::intent::GenerationIntent;
use super::state::GenerationState;

/// Generation lifecycle transitions.
///
/// Worker results are matched against the in-flight `request_id`; results
/// for any other request are stale and dropped.
pub struct GenerationReducer;

impl Reducer for GenerationReducer {
    type State = GenerationState;
    type Intent = GenerationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GenerationIntent::Submit {
                request_id,
                languages,
                length,
            } => match state {
                loading @ GenerationState::Loading { .. } => loading,
                _ => GenerationState::Loading {
                    request_id,
                    languages,
                    length,
                    animation_tick: 0,
                },
            },

            GenerationIntent::AnimationTick => match state {
                GenerationState::Loading {
                    request_id,
                    languages,
                    length,
                    animation_tick,
                } => GenerationState::Loading {
                    request_id,
                    languages,
                    length,
                    animation_tick: animation_tick.wrapping_add(1),
                },
                other => other,
            },

            GenerationIntent::Completed {
                request_id,
                results,
            } => match state {
                GenerationState::Loading {
                    request_id: current,
                    languages,
                    ..
                } if current == request_id => GenerationState::Success { languages, results },
                other => other,
            },

            GenerationIntent::Failed {
                request_id,
                message,
            } => match state {
                GenerationState::Loading {
                    request_id: current,
                    ..
                } if current == request_id => GenerationState::Failed { message },
                other => other,
            },

            GenerationIntent::Dismiss => match state {
                GenerationState::Failed { .. } => GenerationState::Idle,
                other => other,
            },
        }
    }
}
