//! Language registry: Single source of truth for all target languages.
//!
//! The set is closed. It is built once on first access through a `OnceLock`
//! and never changes afterwards.

use crate::i18n::phrases::{self, PhraseTable};
use std::sync::OnceLock;

/// Configuration for a supported target language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "es", "fr")
    pub code: &'static str,

    /// English name of the language, as offered to the user (e.g., "Spanish")
    pub name: &'static str,

    /// Native name of the language (e.g., "Español")
    pub native_name: &'static str,

    /// Static phrase table, if this language has one
    pub phrases: Option<PhraseTable>,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its ISO 639-1 code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get a language configuration by its English name, ignoring ASCII case.
    pub fn get_by_name(&self, name: &str) -> Option<&LanguageConfig> {
        let name = name.trim();
        self.languages
            .iter()
            .find(|lang| lang.name.eq_ignore_ascii_case(name))
    }

    /// All languages, in the order they are offered to the user.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }
}

/// The ten target languages, in presentation order.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            phrases: Some(phrases::SPANISH),
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            phrases: Some(phrases::FRENCH),
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            phrases: Some(phrases::GERMAN),
        },
        LanguageConfig {
            code: "it",
            name: "Italian",
            native_name: "Italiano",
            phrases: Some(phrases::ITALIAN),
        },
        LanguageConfig {
            code: "pt",
            name: "Portuguese",
            native_name: "Português",
            phrases: Some(phrases::PORTUGUESE),
        },
        LanguageConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            phrases: None,
        },
        LanguageConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            phrases: None,
        },
        LanguageConfig {
            code: "ko",
            name: "Korean",
            native_name: "한국어",
            phrases: None,
        },
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            phrases: None,
        },
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            native_name: "हिन्दी",
            phrases: None,
        },
    ]
}
