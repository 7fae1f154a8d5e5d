use crate::catalog::find_language;
use crate::ui::mvi::Reducer;

use super::intent::SelectionIntent;
use super::state::SelectionState;

pub struct SelectionReducer;

impl Reducer for SelectionReducer {
    type State = SelectionState;
    type Intent = SelectionIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SelectionIntent::SetImage { url } => {
                state.image = url;
            }
            SelectionIntent::ToggleLanguage { code } => {
                if let Some(pos) = state.languages.iter().position(|c| *c == code) {
                    state.languages.remove(pos);
                } else if !state.is_full() && find_language(&code).is_some() {
                    state.languages.push(code);
                }
            }
            SelectionIntent::SetModel(model) => {
                state.model = model;
            }
            SelectionIntent::SetLength(length) => {
                state.length = length;
            }
        }
        state
    }
}
