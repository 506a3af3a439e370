//! Language type: validated handle into the language registry.

use crate::error::{TodoError, TodoResult};
use crate::i18n::{LanguageConfig, LanguageRegistry, PhraseTable};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A validated target language.
///
/// Only languages present in the registry can be constructed, so a task can
/// never hold a language outside the enumerated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "es", "fr")
    code: &'static str,
}

impl Language {
    pub const SPANISH: Language = Language { code: "es" };
    pub const FRENCH: Language = Language { code: "fr" };
    pub const GERMAN: Language = Language { code: "de" };
    pub const ITALIAN: Language = Language { code: "it" };
    pub const PORTUGUESE: Language = Language { code: "pt" };
    pub const CHINESE: Language = Language { code: "zh" };
    pub const JAPANESE: Language = Language { code: "ja" };
    pub const KOREAN: Language = Language { code: "ko" };
    pub const ARABIC: Language = Language { code: "ar" };
    pub const HINDI: Language = Language { code: "hi" };

    /// Create a Language from its English name (e.g., "Spanish").
    ///
    /// # Returns
    /// * `Ok(Language)` if the name is one of the enumerated languages
    /// * `Err(TodoError::InvalidLanguage)` otherwise
    pub fn from_name(name: &str) -> TodoResult<Language> {
        LanguageRegistry::get()
            .get_by_name(name)
            .map(|config| Language { code: config.code })
            .ok_or_else(|| TodoError::InvalidLanguage {
                name: name.to_string(),
            })
    }

    /// Create a Language from an ISO 639-1 code (e.g., "es").
    pub fn from_code(code: &str) -> TodoResult<Language> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| Language { code: config.code })
            .ok_or_else(|| TodoError::InvalidLanguage {
                name: code.to_string(),
            })
    }

    /// Every target language, in presentation order.
    pub fn all() -> impl Iterator<Item = Language> {
        LanguageRegistry::get()
            .list_all()
            .into_iter()
            .map(|config| Language { code: config.code })
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// Language built through the constructors or constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language (e.g., "Spanish").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "Español").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Static phrase table for this language, if one exists.
    pub fn phrases(&self) -> Option<PhraseTable> {
        self.config().phrases
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::SPANISH
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Language::from_name(&name).map_err(serde::de::Error::custom)
    }
}
