use crate::catalog::{LengthChoice, ModelChoice};
use crate::ui::mvi::UiState;

/// Maximum number of languages per generation.
pub const MAX_LANGUAGES: usize = 3;

/// The user's current choices.
///
/// Fields are only written by [`super::SelectionReducer`], which keeps
/// `languages` unique, catalog-only and at most [`MAX_LANGUAGES`] long.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionState {
    pub(super) image: Option<String>,
    /// Language codes in the order they were selected.
    pub(super) languages: Vec<String>,
    pub(super) model: ModelChoice,
    pub(super) length: LengthChoice,
}

impl UiState for SelectionState {}

impl SelectionState {
    /// Empty selection with the given starting model and length.
    pub fn new(model: ModelChoice, length: LengthChoice) -> Self {
        Self {
            image: None,
            languages: Vec::new(),
            model,
            length,
        }
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn model(&self) -> ModelChoice {
        self.model
    }

    pub fn length(&self) -> LengthChoice {
        self.length
    }

    pub fn is_selected(&self, code: &str) -> bool {
        self.languages.iter().any(|selected| selected == code)
    }

    pub fn is_full(&self) -> bool {
        self.languages.len() >= MAX_LANGUAGES
    }

    /// False for unselected languages once the cap is reached.
    pub fn can_toggle(&self, code: &str) -> bool {
        self.is_selected(code) || !self.is_full()
    }
}
