use crate::ui::mvi::Reducer;

use super::intent::UploadIntent;
use super::state::UploadState;

pub struct UploadReducer;

impl Reducer for UploadReducer {
    type State = UploadState;
    type Intent = UploadIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UploadIntent::Start { path } => match state {
                uploading @ UploadState::Uploading { .. } => uploading,
                _ => UploadState::Uploading { path },
            },
            UploadIntent::Finished { path } => match state {
                UploadState::Uploading { path: current } if current == path => UploadState::Idle,
                other => other,
            },
            UploadIntent::Failed { path, message } => match state {
                UploadState::Uploading { path: current } if current == path => {
                    UploadState::Failed { path, message }
                }
                other => other,
            },
            UploadIntent::Dismiss => match state {
                UploadState::Failed { .. } => UploadState::Idle,
                other => other,
            },
        }
    }
}
