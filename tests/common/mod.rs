#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use quizqube_server::{
    auth::CredentialSource,
    config::Config,
    services::{
        model_service::{CompletionProvider, CompletionRequest, GenerationError},
        response_sanitizer::SanitizerStrategy,
    },
};

pub const CALLER_KEY: &str = "gsk_integration_caller_key_0001";
pub const ACCESS_TOKEN: &str = "integration-access-token-0123456789abcdef";

/// Canned completion backend. Replays queued responses in order and repeats
/// the last one once the queue runs dry.
pub struct StubProvider {
    responses: Mutex<VecDeque<Result<String, GenerationError>>>,
    last: Mutex<Option<Result<String, GenerationError>>>,
    calls: AtomicUsize,
    delay: Option<Duration>,
    seen: Mutex<Vec<CompletionRequest>>,
}

impl StubProvider {
    pub fn new(responses: Vec<Result<String, GenerationError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            last: Mutex::new(None),
            calls: AtomicUsize::new(0),
            delay: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(completion: impl Into<String>) -> Self {
        Self::new(vec![Ok(completion.into())])
    }

    pub fn failing(error: GenerationError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.seen.lock().await.clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().await.push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = self.responses.lock().await.pop_front();
        let mut last = self.last.lock().await;
        match next {
            Some(response) => {
                *last = Some(response.clone());
                response
            }
            None => last.clone().unwrap_or(Err(GenerationError::EmptyCompletion)),
        }
    }
}

pub fn stub(provider: StubProvider) -> Arc<StubProvider> {
    Arc::new(provider)
}

pub fn test_config(source: CredentialSource) -> Config {
    Config {
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 0,
        production: false,
        cors_allowed_origins: vec![],
        max_content_bytes: 64 * 1024,
        credential_source: source,
        generation_api_key: match source {
            CredentialSource::ServerHeld => {
                Some(SecretString::from("gsk_server_held_key_0001".to_string()))
            }
            CredentialSource::CallerSupplied => None,
        },
        access_token: match source {
            CredentialSource::ServerHeld => Some(SecretString::from(ACCESS_TOKEN.to_string())),
            CredentialSource::CallerSupplied => None,
        },
        generation_api_base: "http://127.0.0.1:9/v1".to_string(),
        generation_model: "stub-model".to_string(),
        generation_timeout_secs: 5,
        generation_max_retries: 0,
        generation_json_mode: false,
        sanitizer_strategy: SanitizerStrategy::Greedy,
    }
}

pub fn multiple_choice(i: usize) -> Value {
    json!({
        "type": "multiple_choice",
        "question": format!("Which statement about item {} is accurate?", i),
        "options": ["First", "Second", "Third", "Fourth"],
        "correct": "Third"
    })
}

pub fn true_false(i: usize) -> Value {
    json!({
        "type": "true_false",
        "question": format!("Statement {} holds.", i),
        "options": ["True", "False"],
        "correct": "False"
    })
}

/// A completion as a chatty model returns it: prose around the JSON object.
pub fn chatty_completion(topic: &str, questions: Vec<Value>) -> String {
    format!(
        "Sure! Here is your quiz:\n```json\n{}\n```\nGood luck!",
        serde_json::to_string_pretty(&json!({ "topic": topic, "questions": questions }))
            .unwrap_or_default()
    )
}
