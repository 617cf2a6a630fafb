use std::{sync::Arc, time::Duration};

use secrecy::SecretString;

use crate::{
    auth::fingerprint,
    config::Config,
    constants::quiz_prompt::QUIZ_SYSTEM_PROMPT,
    errors::{AppError, AppResult},
    models::domain::{QuizData, QuizRequest},
    services::{
        generation_report::{GenerationReport, PipelineStage},
        lenient_parser::parse_lenient,
        model_service::{CompletionProvider, CompletionRequest, GenerationError},
        prompt_composer::compose_prompt,
        quiz_validator::validate_and_repair,
        response_sanitizer::{sanitize, SanitizerStrategy, EMPTY_OBJECT},
    },
};

#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    pub json_mode: bool,
    pub timeout: Duration,
    pub max_retries: u32,
    pub sanitizer: SanitizerStrategy,
}

impl GenerationSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.generation_model.clone(),
            json_mode: config.generation_json_mode,
            timeout: Duration::from_secs(config.generation_timeout_secs),
            max_retries: config.generation_max_retries,
            sanitizer: config.sanitizer_strategy,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedQuiz {
    pub quiz: QuizData,
    pub report: GenerationReport,
}

/// Runs one request through prompt, generation, sanitizing, parsing and
/// validation, then applies the exact-count gate.
pub struct QuizGenerationService {
    provider: Arc<dyn CompletionProvider>,
    settings: GenerationSettings,
}

impl QuizGenerationService {
    pub fn new(provider: Arc<dyn CompletionProvider>, settings: GenerationSettings) -> Self {
        Self { provider, settings }
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub async fn generate(
        &self,
        request: &QuizRequest,
        credential: SecretString,
    ) -> AppResult<GeneratedQuiz> {
        let mut report = GenerationReport::default();

        let prompt = compose_prompt(
            request.quiz_type(),
            request.difficulty(),
            request.question_count(),
            request.content(),
        );

        log::info!(
            "Generating {} {} question(s) at {} difficulty (content_chars={}, credential={})",
            request.question_count(),
            request.quiz_type(),
            request.difficulty(),
            request.content().len(),
            fingerprint(&credential)
        );

        let completion_request = CompletionRequest {
            credential,
            model: self.settings.model.clone(),
            system_prompt: QUIZ_SYSTEM_PROMPT.to_string(),
            prompt,
            json_mode: self.settings.json_mode,
        };

        let result = self
            .request_completion(completion_request, &mut report)
            .await;
        let completion = result.map_err(|e| {
            log::error!("Generation failed after {}: {}", report, e);
            AppError::from(e)
        })?;

        self.process_completion(&completion, request, report)
    }

    /// Sanitize, parse, validate and gate a completion. Degradations before
    /// the count gate are recorded on the report, never returned.
    pub fn process_completion(
        &self,
        completion: &str,
        request: &QuizRequest,
        mut report: GenerationReport,
    ) -> AppResult<GeneratedQuiz> {
        let expected = request.question_count();

        let candidate = self.extract_object(completion, &mut report);

        let raw = parse_lenient(candidate).unwrap_or_else(|e| {
            report.record(PipelineStage::Parsing, e.to_string());
            serde_json::Value::Object(serde_json::Map::new())
        });

        let outcome = validate_and_repair(&raw, expected, request.quiz_type());

        if !outcome.dropped.is_empty() {
            let reasons: Vec<String> = outcome
                .dropped
                .iter()
                .map(|d| format!("#{} {}", d.index, d.reason))
                .collect();
            report.record(
                PipelineStage::Validation,
                format!("dropped {} question(s): {}", reasons.len(), reasons.join(", ")),
            );
        }
        if let Some(shortfall) = outcome.shortfall {
            report.record(
                PipelineStage::Validation,
                format!(
                    "shortfall: expected {}, got {}",
                    shortfall.expected, shortfall.actual
                ),
            );
        }
        if outcome.truncated > 0 {
            log::info!("Truncated {} surplus question(s)", outcome.truncated);
        }

        let actual = outcome.quiz.questions.len();
        if actual != expected {
            log::error!(
                "Count gate failed: expected {}, got {} ({})",
                expected,
                actual,
                report
            );
            return Err(AppError::CountMismatch { expected, actual });
        }

        log::info!(
            "Generated quiz '{}' with {} question(s) ({})",
            outcome.quiz.topic,
            actual,
            report
        );

        Ok(GeneratedQuiz {
            quiz: outcome.quiz,
            report,
        })
    }

    fn extract_object<'a>(&self, completion: &'a str, report: &mut GenerationReport) -> &'a str {
        sanitize(completion, self.settings.sanitizer).unwrap_or_else(|| {
            report.record(
                PipelineStage::Sanitization,
                "no brace-delimited JSON object in completion",
            );
            EMPTY_OBJECT
        })
    }

    async fn request_completion(
        &self,
        request: CompletionRequest,
        report: &mut GenerationReport,
    ) -> Result<String, GenerationError> {
        loop {
            report.attempts += 1;

            let result = tokio::time::timeout(
                self.settings.timeout,
                self.provider.complete(request.clone()),
            )
            .await
            .unwrap_or_else(|_| Err(GenerationError::Timeout(self.settings.timeout.as_secs())));

            match result {
                Ok(completion) => return Ok(completion),
                Err(e) if e.is_transient() && report.attempts <= self.settings.max_retries => {
                    report.record(
                        PipelineStage::Generation,
                        format!("attempt {} failed, retrying: {}", report.attempts, e),
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }
}
