use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("transport error talking to the generation service: {0}")]
    Transport(String),

    #[error("generation service rejected the request: {0}")]
    Api(String),

    #[error("generation service returned an empty completion")]
    EmptyCompletion,

    #[error("generation call timed out after {0}s")]
    Timeout(u64),

    #[error("could not build the generation request: {0}")]
    InvalidRequest(String),
}

impl GenerationError {
    /// Only network-level failures are worth another attempt; auth and quota
    /// errors will fail the same way again.
    pub fn is_transient(&self) -> bool {
        matches!(self, GenerationError::Transport(_) | GenerationError::Timeout(_))
    }
}

impl From<OpenAIError> for GenerationError {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::Reqwest(e) => GenerationError::Transport(e.to_string()),
            OpenAIError::ApiError(e) => GenerationError::Api(e.to_string()),
            OpenAIError::InvalidArgument(message) => GenerationError::InvalidRequest(message),
            other => GenerationError::Api(other.to_string()),
        }
    }
}

/// One chat completion call: a system instruction plus a single user prompt.
#[derive(Clone, Debug)]
pub struct CompletionRequest {
    pub credential: SecretString,
    pub model: String,
    pub system_prompt: String,
    pub prompt: String,
    pub json_mode: bool,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationError>;
}

/// Talks to any OpenAI-compatible chat completion endpoint.
pub struct OpenAiCompletionProvider {
    api_base: String,
}

impl OpenAiCompletionProvider {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    fn client_for(&self, credential: &SecretString) -> Client<OpenAIConfig> {
        let openai_config = OpenAIConfig::new()
            .with_api_key(credential.expose_secret())
            .with_api_base(&self.api_base);

        Client::with_config(openai_config)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompletionProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationError> {
        log::debug!(
            "Calling generation service model={} prompt_chars={} json_mode={}",
            request.model,
            request.prompt.len(),
            request.json_mode
        );

        let system_message = ChatCompletionRequestSystemMessageArgs::default()
            .content(request.system_prompt.as_str())
            .build()?;
        let user_message = ChatCompletionRequestUserMessageArgs::default()
            .content(request.prompt.as_str())
            .build()?;

        let mut builder = CreateChatCompletionRequestArgs::default();
        builder.model(&request.model).messages(vec![
            ChatCompletionRequestMessage::System(system_message),
            ChatCompletionRequestMessage::User(user_message),
        ]);
        if request.json_mode {
            builder.response_format(ResponseFormat::JsonObject);
        }
        let chat_request = builder.build()?;

        let response = self
            .client_for(&request.credential)
            .chat()
            .create(chat_request)
            .await
            .map_err(|e| {
                log::warn!("Generation service call failed: {}", e);
                GenerationError::from(e)
            })?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerationError::EmptyCompletion)?;

        log::debug!("Generation service returned {} chars", content.len());
        Ok(content)
    }
}
