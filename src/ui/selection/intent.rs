use crate::catalog::{LengthChoice, ModelChoice};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SelectionIntent {
    /// Set or clear the image reference. Not validated.
    SetImage { url: Option<String> },
    /// Add the language if absent and below the cap, remove it if present.
    ToggleLanguage { code: String },
    SetModel(ModelChoice),
    SetLength(LengthChoice),
}

impl Intent for SelectionIntent {}
