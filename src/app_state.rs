use std::sync::Arc;

use crate::{
    auth::CredentialResolver,
    config::Config,
    services::{
        model_service::{CompletionProvider, OpenAiCompletionProvider},
        quiz_generation_service::{GenerationSettings, QuizGenerationService},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_generation_service: Arc<QuizGenerationService>,
    pub credentials: Arc<CredentialResolver>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let provider = Arc::new(OpenAiCompletionProvider::new(
            config.generation_api_base.clone(),
        ));
        Self::with_provider(config, provider)
    }

    /// Same wiring as [`AppState::new`] around any completion backend.
    pub fn with_provider(config: Config, provider: Arc<dyn CompletionProvider>) -> Self {
        let settings = GenerationSettings::from_config(&config);
        let quiz_generation_service = Arc::new(QuizGenerationService::new(provider, settings));
        let credentials = Arc::new(CredentialResolver::from_config(&config));

        Self {
            quiz_generation_service,
            credentials,
            config: Arc::new(config),
        }
    }
}
