//! Result panel contents, derived from the generation lifecycle.
//!
//! The lifecycle is checked first: while a request is loading only
//! placeholders are shown, whatever results a previous request left behind.

use crate::catalog::{language_label, LengthChoice};
use crate::generation::LanguageDescription;
use crate::ui::generation::GenerationState;

pub const EMPTY_MESSAGE: &str = "See your generated descriptions here";

/// Height class of a loading placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderSize {
    Small,
    Medium,
    Large,
}

impl PlaceholderSize {
    pub fn for_length(length: LengthChoice) -> Self {
        match length {
            LengthChoice::Short => PlaceholderSize::Small,
            LengthChoice::Medium => PlaceholderSize::Medium,
            LengthChoice::Long => PlaceholderSize::Large,
        }
    }

    /// Body height in terminal rows.
    pub fn rows(self) -> u16 {
        match self {
            PlaceholderSize::Small => 3,
            PlaceholderSize::Medium => 5,
            PlaceholderSize::Large => 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub language: String,
    pub size: PlaceholderSize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionBlock {
    pub language: String,
    /// Catalog display name, or the raw code when the code is unknown.
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Empty { message: &'static str },
    Loading { placeholders: Vec<Placeholder> },
    Descriptions { blocks: Vec<DescriptionBlock> },
    Failed { message: String },
}

pub fn present(state: &GenerationState) -> ResultView {
    match state {
        GenerationState::Idle => ResultView::Empty {
            message: EMPTY_MESSAGE,
        },
        GenerationState::Loading {
            languages, length, ..
        } => {
            let size = PlaceholderSize::for_length(*length);
            ResultView::Loading {
                placeholders: languages
                    .iter()
                    .map(|language| Placeholder {
                        language: language.clone(),
                        size,
                    })
                    .collect(),
            }
        }
        GenerationState::Success { languages, results } => ResultView::Descriptions {
            blocks: order_by_request(languages, results)
                .into_iter()
                .map(|entry| DescriptionBlock {
                    language: entry.language.clone(),
                    label: language_label(&entry.language).to_string(),
                    description: entry.description.clone(),
                })
                .collect(),
        },
        GenerationState::Failed { message } => ResultView::Failed {
            message: message.clone(),
        },
    }
}

/// Match results to requested languages by code, keeping request order.
/// Entries for codes that were not requested follow in response order.
fn order_by_request<'a>(
    languages: &[String],
    results: &'a [LanguageDescription],
) -> Vec<&'a LanguageDescription> {
    let mut used = vec![false; results.len()];
    let mut ordered = Vec::with_capacity(results.len());

    for code in languages {
        if let Some(idx) = results
            .iter()
            .enumerate()
            .position(|(i, entry)| !used[i] && entry.language == *code)
        {
            used[idx] = true;
            ordered.push(&results[idx]);
        }
    }

    ordered.extend(
        results
            .iter()
            .zip(used)
            .filter(|(_, used)| !used)
            .map(|(entry, _)| entry),
    );
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn success(languages: &[&str], results: &[(&str, &str)]) -> GenerationState {
        GenerationState::Success {
            languages: languages.iter().map(|c| c.to_string()).collect(),
            results: results
                .iter()
                .map(|(l, d)| LanguageDescription::new(*l, *d))
                .collect(),
        }
    }

    #[test]
    fn idle_shows_empty_message() {
        assert_eq!(
            present(&GenerationState::Idle),
            ResultView::Empty {
                message: EMPTY_MESSAGE
            }
        );
    }

    #[test]
    fn single_spanish_result() {
        let view = present(&success(&["es"], &[("es", "Hola")]));
        assert_eq!(
            view,
            ResultView::Descriptions {
                blocks: vec![DescriptionBlock {
                    language: "es".into(),
                    label: "Spanish".into(),
                    description: "Hola".into(),
                }]
            }
        );
    }

    #[test]
    fn loading_emits_one_placeholder_per_snapshot_language() {
        let state = GenerationState::Loading {
            request_id: Uuid::new_v4(),
            languages: vec!["en".into(), "fr".into()],
            length: LengthChoice::Long,
            animation_tick: 3,
        };
        let ResultView::Loading { placeholders } = present(&state) else {
            panic!("Expected Loading view");
        };
        assert_eq!(placeholders.len(), 2);
        assert!(placeholders.iter().all(|p| p.size == PlaceholderSize::Large));
    }

    #[test]
    fn sizes_are_distinct_per_length() {
        let rows: Vec<u16> = LengthChoice::ALL
            .iter()
            .map(|l| PlaceholderSize::for_length(*l).rows())
            .collect();
        assert!(rows[0] < rows[1] && rows[1] < rows[2]);
    }

    #[test]
    fn results_follow_request_order() {
        let view = present(&success(
            &["fr", "en"],
            &[("en", "Hello"), ("fr", "Bonjour")],
        ));
        let ResultView::Descriptions { blocks } = view else {
            panic!("Expected Descriptions view");
        };
        let labels: Vec<_> = blocks.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["French", "English"]);
    }

    #[test]
    fn unknown_code_uses_raw_code_and_goes_last() {
        let view = present(&success(&["en"], &[("xx", "???"), ("en", "Hello")]));
        let ResultView::Descriptions { blocks } = view else {
            panic!("Expected Descriptions view");
        };
        assert_eq!(blocks[0].label, "English");
        assert_eq!(blocks[1].label, "xx");
        assert_eq!(blocks[1].description, "???");
    }

    #[test]
    fn failed_shows_message() {
        let view = present(&GenerationState::Failed {
            message: "Could not reach the generation service. Try again.".into(),
        });
        assert!(matches!(view, ResultView::Failed { message } if message.contains("Try again")));
    }
}
