//! Fixed catalogs: languages, vision models and description lengths.
//!
//! Identifiers here are part of the wire contract with the generation
//! backend and must not change.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A language a description can be generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub display_name: &'static str,
}

/// Supported languages, in display order.
pub const LANGUAGES: &[Language] = &[
    Language {
        code: "en",
        display_name: "English",
    },
    Language {
        code: "es",
        display_name: "Spanish",
    },
    Language {
        code: "fr",
        display_name: "French",
    },
    Language {
        code: "de",
        display_name: "German",
    },
    Language {
        code: "it",
        display_name: "Italian",
    },
    Language {
        code: "ja",
        display_name: "Japanese",
    },
    Language {
        code: "ko",
        display_name: "Korean",
    },
    Language {
        code: "zh",
        display_name: "Chinese",
    },
    Language {
        code: "pt",
        display_name: "Portuguese",
    },
];

/// Look up a catalog language by its code.
pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|language| language.code == code)
}

/// Display name for a language code, falling back to the raw code.
pub fn language_label(code: &str) -> &str {
    find_language(code).map_or(code, |language| language.display_name)
}

/// Vision-language model variant used for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum ModelChoice {
    #[default]
    #[serde(rename = "meta-llama/Llama-3.2-11B-Vision-Instruct-Turbo")]
    #[value(name = "llama-3.2-11b")]
    Llama32Vision11B,
    #[serde(rename = "meta-llama/Llama-3.2-90B-Vision-Instruct-Turbo")]
    #[value(name = "llama-3.2-90b")]
    Llama32Vision90B,
}

impl ModelChoice {
    pub const ALL: [ModelChoice; 2] = [
        ModelChoice::Llama32Vision11B,
        ModelChoice::Llama32Vision90B,
    ];

    /// Identifier sent to the generation backend.
    pub fn id(self) -> &'static str {
        match self {
            ModelChoice::Llama32Vision11B => "meta-llama/Llama-3.2-11B-Vision-Instruct-Turbo",
            ModelChoice::Llama32Vision90B => "meta-llama/Llama-3.2-90B-Vision-Instruct-Turbo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModelChoice::Llama32Vision11B => "Llama 3.2 11B",
            ModelChoice::Llama32Vision90B => "Llama 3.2 90B",
        }
    }
}

/// Requested description length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LengthChoice {
    #[default]
    Short,
    Medium,
    Long,
}

impl LengthChoice {
    pub const ALL: [LengthChoice; 3] = [
        LengthChoice::Short,
        LengthChoice::Medium,
        LengthChoice::Long,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LengthChoice::Short => "short",
            LengthChoice::Medium => "medium",
            LengthChoice::Long => "long",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LengthChoice::Short => "Short",
            LengthChoice::Medium => "Medium",
            LengthChoice::Long => "Long",
        }
    }
}
