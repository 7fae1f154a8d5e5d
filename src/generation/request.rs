use serde::Serialize;

use crate::catalog::{LengthChoice, ModelChoice};
use crate::ui::generation::GenerationState;
use crate::ui::selection::SelectionState;

/// Why a submit is not allowed right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ineligible {
    NoImage,
    NoLanguages,
    AlreadyLoading,
}

/// Submission is allowed iff an image is set, at least one language is
/// selected and no request is in flight.
pub fn check_eligibility(
    selection: &SelectionState,
    generation: &GenerationState,
) -> Result<(), Ineligible> {
    if generation.is_loading() {
        return Err(Ineligible::AlreadyLoading);
    }
    if selection.image().is_none() {
        return Err(Ineligible::NoImage);
    }
    if selection.languages().is_empty() {
        return Err(Ineligible::NoLanguages);
    }
    Ok(())
}

/// Wire payload for the generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Language codes in selection order.
    pub languages: Vec<String>,
    pub image_url: String,
    pub model: ModelChoice,
    pub length: LengthChoice,
}

impl GenerationRequest {
    /// Build the payload from the current selection if submission is eligible.
    ///
    /// Model and length are trusted as-is; the selection model keeps them
    /// inside their catalogs.
    pub fn build(
        selection: &SelectionState,
        generation: &GenerationState,
    ) -> Result<Self, Ineligible> {
        check_eligibility(selection, generation)?;
        let image_url = selection.image().ok_or(Ineligible::NoImage)?;

        Ok(Self {
            languages: selection.languages().to_vec(),
            image_url: image_url.to_string(),
            model: selection.model(),
            length: selection.length(),
        })
    }
}
