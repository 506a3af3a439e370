use crate::config::Config;
use crate::i18n::Language;
use crate::openai::{ChatRequest, CompletionClient, Message, OpenAiClient};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Output bound for generated translations
const MAX_TOKENS: u32 = 100;

/// Low temperature keeps translations close to deterministic
const TEMPERATURE: f32 = 0.3;

/// Result of resolving a task translation.
#[derive(Debug, Clone, PartialEq)]
pub enum Translation {
    /// The whole task text is a known phrase
    Predefined(String),
    /// The task text contains a known phrase
    PartialMatch {
        phrase: &'static str,
        translation: String,
    },
    /// Produced by the completion API
    Generated(String),
    /// The completion call failed; holds the error message
    Failed(String),
}

impl Translation {
    pub fn is_failure(&self) -> bool {
        matches!(self, Translation::Failed(_))
    }

    /// Short label for logs and the JSON API.
    pub fn kind(&self) -> &'static str {
        match self {
            Translation::Predefined(_) => "predefined",
            Translation::PartialMatch { .. } => "partial_match",
            Translation::Generated(_) => "generated",
            Translation::Failed(_) => "failed",
        }
    }
}

impl std::fmt::Display for Translation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Translation::Predefined(text) => write!(f, "📖 Predefined: {}", text),
            Translation::PartialMatch { translation, .. } => {
                write!(f, "🔍 Partial match: {}", translation)
            }
            Translation::Generated(text) => write!(f, "🤖 AI: {}", text),
            Translation::Failed(error) => write!(f, "❌ Translation failed: {}", error),
        }
    }
}

/// Look the task text up in the language's static phrase table.
///
/// An exact match on the whole normalized text wins. Otherwise the first key,
/// in table order, contained anywhere in the text is used.
pub fn lookup_phrase(text: &str, language: Language) -> Option<Translation> {
    let table = language.phrases()?;
    let normalized = text.trim().to_lowercase();

    if let Some((_, translation)) = table.iter().find(|(key, _)| *key == normalized) {
        return Some(Translation::Predefined(translation.to_string()));
    }

    table
        .iter()
        .find(|(key, _)| normalized.contains(key))
        .map(|(key, translation)| Translation::PartialMatch {
            phrase: *key,
            translation: translation.to_string(),
        })
}

/// Build the system prompt for translation
fn build_translation_system_prompt(target_language: &str) -> String {
    format!(
        "Translate the following text to {}. Only return the translation:",
        target_language
    )
}

/// Resolves task translations: phrase table first, completion API second.
pub struct TranslationResolver {
    client: Arc<dyn CompletionClient>,
    model: String,
}

impl TranslationResolver {
    pub fn new(client: Arc<dyn CompletionClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(OpenAiClient::from_config(config)),
            config.openai_model.clone(),
        )
    }

    fn build_request(&self, text: &str, language: Language) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message::system(build_translation_system_prompt(language.name())),
                Message::user(text),
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }

    /// Translate `text` into `language`.
    ///
    /// Never fails: an API error is returned as `Translation::Failed` and is
    /// not retried.
    pub async fn resolve(&self, text: &str, language: Language) -> Translation {
        if let Some(found) = lookup_phrase(text, language) {
            debug!(
                kind = found.kind(),
                language = language.name(),
                "Translation served from phrase table"
            );
            return found;
        }

        info!(language = language.name(), "Requesting translation from OpenAI");
        let request = self.build_request(text, language);

        match self.client.complete(&request).await {
            Ok(content) => Translation::Generated(content.trim().to_string()),
            Err(e) => {
                warn!("Translation to {} failed: {:#}", language.name(), e);
                Translation::Failed(format!("{:#}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use wiremock::{
        matchers::{body_partial_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    // ==================== Helper Functions ====================

    /// Records every request and answers with a canned result.
    struct FakeClient {
        reply: std::result::Result<String, String>,
        requests: Mutex<Vec<ChatRequest>>,
    }

    impl FakeClient {
        fn ok(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn failing(error: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(error.to_string()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionClient for FakeClient {
        async fn complete(&self, request: &ChatRequest) -> anyhow::Result<String> {
            self.requests.lock().unwrap().push(request.clone());
            self.reply.clone().map_err(|e| anyhow::anyhow!(e))
        }
    }

    fn resolver(client: Arc<FakeClient>) -> TranslationResolver {
        TranslationResolver::new(client, "gpt-4o-mini")
    }

    // ==================== lookup_phrase Tests ====================

    #[test]
    fn test_lookup_exact_match() {
        assert_eq!(
            lookup_phrase("buy groceries", Language::SPANISH),
            Some(Translation::Predefined("comprar comestibles".to_string()))
        );
    }

    #[test]
    fn test_lookup_exact_match_normalizes_case_and_whitespace() {
        assert_eq!(
            lookup_phrase("  Walk The Dog ", Language::FRENCH),
            Some(Translation::Predefined("promener le chien".to_string()))
        );
    }

    #[test]
    fn test_lookup_partial_match() {
        assert_eq!(
            lookup_phrase("please buy groceries today", Language::SPANISH),
            Some(Translation::PartialMatch {
                phrase: "buy groceries",
                translation: "comprar comestibles".to_string(),
            })
        );
    }

    #[test]
    fn test_lookup_partial_match_first_in_table_order_wins() {
        // "walk the dog" comes first in the text, "buy groceries" first in the table
        let found = lookup_phrase("walk the dog then buy groceries", Language::GERMAN);
        assert_eq!(
            found,
            Some(Translation::PartialMatch {
                phrase: "buy groceries",
                translation: "Lebensmittel einkaufen".to_string(),
            })
        );
    }

    #[test]
    fn test_lookup_no_match() {
        assert_eq!(
            lookup_phrase("schedule dentist appointment", Language::SPANISH),
            None
        );
    }

    #[test]
    fn test_lookup_language_without_table() {
        assert_eq!(lookup_phrase("buy groceries", Language::JAPANESE), None);
    }

    // ==================== Display Tests ====================

    #[test]
    fn test_display_markers() {
        assert_eq!(
            Translation::Predefined("x".to_string()).to_string(),
            "📖 Predefined: x"
        );
        assert_eq!(
            Translation::PartialMatch {
                phrase: "buy groceries",
                translation: "y".to_string()
            }
            .to_string(),
            "🔍 Partial match: y"
        );
        assert_eq!(Translation::Generated("z".to_string()).to_string(), "🤖 AI: z");
        assert_eq!(
            Translation::Failed("boom".to_string()).to_string(),
            "❌ Translation failed: boom"
        );
    }

    #[test]
    fn test_kind_and_failure_flag() {
        assert_eq!(Translation::Predefined(String::new()).kind(), "predefined");
        assert_eq!(Translation::Generated(String::new()).kind(), "generated");
        assert!(Translation::Failed(String::new()).is_failure());
        assert!(!Translation::Generated(String::new()).is_failure());
    }

    // ==================== Prompt Tests ====================

    #[test]
    fn test_build_translation_system_prompt() {
        let prompt = build_translation_system_prompt("Korean");
        assert_eq!(
            prompt,
            "Translate the following text to Korean. Only return the translation:"
        );
    }

    // ==================== resolve Tests ====================

    #[tokio::test]
    async fn test_resolve_exact_match_skips_api() {
        let client = FakeClient::ok("should not be used");
        let result = resolver(client.clone())
            .resolve("buy groceries", Language::SPANISH)
            .await;

        assert_eq!(
            result,
            Translation::Predefined("comprar comestibles".to_string())
        );
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_resolve_partial_match_skips_api() {
        let client = FakeClient::ok("should not be used");
        let result = resolver(client.clone())
            .resolve("please buy groceries today", Language::SPANISH)
            .await;

        assert_eq!(result.kind(), "partial_match");
        assert_eq!(result.to_string(), "🔍 Partial match: comprar comestibles");
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_resolve_generated_makes_exactly_one_call() {
        let client = FakeClient::ok("  programar cita con el dentista \n");
        let result = resolver(client.clone())
            .resolve("schedule dentist appointment", Language::SPANISH)
            .await;

        assert_eq!(
            result,
            Translation::Generated("programar cita con el dentista".to_string())
        );
        assert_eq!(client.calls(), 1);

        let requests = client.requests.lock().unwrap();
        let request = &requests[0];
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.max_tokens, 100);
        assert!((request.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert!(request.messages[0].content.contains("Spanish"));
        assert_eq!(
            request.messages[1],
            Message::user("schedule dentist appointment")
        );
    }

    #[tokio::test]
    async fn test_resolve_language_without_table_calls_api() {
        let client = FakeClient::ok("食料品を買う");
        let result = resolver(client.clone())
            .resolve("buy groceries", Language::JAPANESE)
            .await;

        assert_eq!(result, Translation::Generated("食料品を買う".to_string()));
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_resolve_failure_is_absorbed() {
        let client = FakeClient::failing("connection reset by peer");
        let result = resolver(client.clone())
            .resolve("schedule dentist appointment", Language::SPANISH)
            .await;

        assert!(result.is_failure());
        let rendered = result.to_string();
        assert!(rendered.contains("Translation failed"));
        assert!(rendered.contains("connection reset by peer"));
        // Not retried
        assert_eq!(client.calls(), 1);
    }

    // ==================== Integration Tests with Wiremock ====================

    #[tokio::test]
    async fn test_resolve_against_mock_openai() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "messages": [
                    {
                        "role": "system",
                        "content": "Translate the following text to French. Only return the translation:"
                    },
                    { "role": "user", "content": "schedule dentist appointment" }
                ],
                "max_tokens": 100
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "prendre rendez-vous chez le dentiste\n"}}
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = OpenAiClient::new(
            reqwest::Client::new(),
            format!("{}/v1/chat/completions", mock_server.uri()),
            "test-openai-key",
        );
        let resolver = TranslationResolver::new(Arc::new(client), "gpt-4o-mini");

        let result = resolver
            .resolve("schedule dentist appointment", Language::FRENCH)
            .await;
        assert_eq!(
            result,
            Translation::Generated("prendre rendez-vous chez le dentiste".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolve_against_failing_mock_openai() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = OpenAiClient::new(
            reqwest::Client::new(),
            format!("{}/v1/chat/completions", mock_server.uri()),
            "test-openai-key",
        );
        let resolver = TranslationResolver::new(Arc::new(client), "gpt-4o-mini");

        let result = resolver.resolve("fix the bike", Language::ITALIAN).await;
        assert!(result.is_failure());
        assert!(result.to_string().contains("500"));
    }
}
