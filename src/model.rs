//! The opaque completion-model interface and its OpenAI-compatible backend.
//!
//! Core pipelines depend only on [`CompletionModel`]: a blocking, function
//! shaped callable taking a prompt and a [`StopSet`] and returning a single
//! completion truncated at the first stop marker. Tests substitute closures;
//! production code uses [`OpenAiModel`].

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, Stop,
    },
    Client,
};
use tokio::runtime::Runtime;

use crate::error::Result;
use crate::types::ModelConfig;

/// Stop markers bounding a single generation call.
///
/// Markers are generation-termination points: the completion is cut at the
/// first occurrence of any marker, and the marker itself is excluded.
#[derive(Debug, Clone)]
pub struct StopSet(Vec<String>);

impl StopSet {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(markers.into_iter().map(Into::into).collect())
    }

    pub fn markers(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cut `text` at the first occurrence of any marker, exclusive.
    pub fn truncate<'a>(&self, text: &'a str) -> &'a str {
        let mut cut = text.len();
        for marker in &self.0 {
            if let Some(pos) = text.find(marker.as_str()) {
                cut = cut.min(pos);
            }
        }
        &text[..cut]
    }
}

/// A blocking completion model with stop-sequence-bounded generation.
///
/// Blanket-implemented for closures, so a deterministic stub is just
/// `|_prompt: &str, _stop: &StopSet| Ok("...".to_string())`.
pub trait CompletionModel {
    fn complete(&self, prompt: &str, stop: &StopSet) -> Result<String>;
}

impl<F> CompletionModel for F
where
    F: Fn(&str, &StopSet) -> Result<String>,
{
    fn complete(&self, prompt: &str, stop: &StopSet) -> Result<String> {
        self(prompt, stop)
    }
}

/// OpenAI-compatible chat-completion backend
pub struct OpenAiModel {
    config: ModelConfig,
    client: Client<OpenAIConfig>,
    runtime: Runtime,
}

impl OpenAiModel {
    /// Create a new backend with the given config
    ///
    /// Reads OPENAI_API_KEY from environment.
    pub fn new(config: ModelConfig) -> Result<Self> {
        let client = Client::new();
        let runtime = Runtime::new()?;
        Ok(Self {
            config,
            client,
            runtime,
        })
    }

    /// Create with explicit API key
    pub fn with_api_key(config: ModelConfig, api_key: &str) -> Result<Self> {
        let openai_config = OpenAIConfig::new().with_api_key(api_key);
        let client = Client::with_config(openai_config);
        let runtime = Runtime::new()?;
        Ok(Self {
            config,
            client,
            runtime,
        })
    }

    /// Create with custom base URL (for Ollama, local models, etc.)
    pub fn with_base_url(config: ModelConfig, base_url: &str) -> Result<Self> {
        let openai_config = OpenAIConfig::new()
            .with_api_base(base_url)
            .with_api_key("ollama"); // Ollama doesn't need a real key
        let client = Client::with_config(openai_config);
        let runtime = Runtime::new()?;
        Ok(Self {
            config,
            client,
            runtime,
        })
    }

    /// Create with custom base URL and API key
    pub fn with_base_url_and_key(
        config: ModelConfig,
        base_url: &str,
        api_key: &str,
    ) -> Result<Self> {
        let openai_config = OpenAIConfig::new()
            .with_api_base(base_url)
            .with_api_key(api_key);
        let client = Client::with_config(openai_config);
        let runtime = Runtime::new()?;
        Ok(Self {
            config,
            client,
            runtime,
        })
    }
}

impl CompletionModel for OpenAiModel {
    fn complete(&self, prompt: &str, stop: &StopSet) -> Result<String> {
        let messages = vec![ChatCompletionRequestMessage::User(
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?,
        )];

        let mut request_builder = CreateChatCompletionRequestArgs::default();
        request_builder
            .model(&self.config.model)
            .messages(messages)
            .temperature(self.config.temperature);

        if !stop.is_empty() {
            request_builder.stop(Stop::StringArray(stop.markers().to_vec()));
        }
        if let Some(max_tokens) = self.config.max_tokens {
            request_builder.max_tokens(max_tokens);
        }

        let request = request_builder.build()?;

        let response = self
            .runtime
            .block_on(async { self.client.chat().create(request).await })?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        // Some backends ignore the stop parameter, so truncate client-side too
        Ok(stop.truncate(&content).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::{EXAMPLE_INPUT, EXAMPLE_OUTPUT};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_stop_set_truncates_at_first_marker() {
        let stop = StopSet::new([EXAMPLE_INPUT, EXAMPLE_OUTPUT]);
        assert_eq!(
            stop.truncate("add(1, 2)\nExample Output: 3\nExample Input: more"),
            "add(1, 2)\n"
        );
    }

    #[test]
    fn test_stop_set_marker_at_start() {
        let stop = StopSet::new([EXAMPLE_INPUT]);
        assert_eq!(stop.truncate("Example Input: x"), "");
    }

    #[test]
    fn test_stop_set_no_marker_returns_all() {
        let stop = StopSet::new([EXAMPLE_INPUT]);
        assert_eq!(stop.truncate("plain text"), "plain text");
    }

    #[test]
    fn test_stop_set_is_case_sensitive() {
        let stop = StopSet::new([EXAMPLE_INPUT]);
        assert_eq!(stop.truncate("example input: x"), "example input: x");
    }

    #[test]
    fn test_closure_implements_completion_model() {
        let model =
            |prompt: &str, _stop: &StopSet| -> Result<String> { Ok(format!("echo: {prompt}")) };
        assert_eq!(
            model.complete("hi", &StopSet::new::<_, String>([])).unwrap(),
            "echo: hi"
        );
    }

    #[test]
    fn test_openai_model_completes_and_truncates() {
        // MockServer runs on its own runtime; OpenAiModel blocks on its own.
        let rt = Runtime::new().unwrap();
        let server = rt.block_on(MockServer::start());

        let body = serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "gpt-4o",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "reverse_string('abc')\nExample Output: 'cba'"
                },
                "finish_reason": "stop",
                "logprobs": null
            }],
            "usage": {
                "prompt_tokens": 10,
                "completion_tokens": 10,
                "total_tokens": 20
            }
        });
        rt.block_on(
            Mock::given(method("POST"))
                .and(path("/chat/completions"))
                .respond_with(ResponseTemplate::new(200).set_body_json(&body))
                .mount(&server),
        );

        let model =
            OpenAiModel::with_base_url(ModelConfig::new("gpt-4o"), &server.uri()).unwrap();
        let stop = StopSet::new([EXAMPLE_INPUT, EXAMPLE_OUTPUT]);
        let completion = model.complete("some prompt", &stop).unwrap();

        assert_eq!(completion, "reverse_string('abc')\n");
    }
}
