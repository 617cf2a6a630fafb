pub mod generation_report;
pub mod lenient_parser;
pub mod model_service;
pub mod prompt_composer;
pub mod quiz_generation_service;
pub mod quiz_validator;
pub mod response_sanitizer;

pub use generation_report::{GenerationReport, PipelineStage};
pub use model_service::{CompletionProvider, CompletionRequest, GenerationError};
pub use quiz_generation_service::{GeneratedQuiz, GenerationSettings, QuizGenerationService};
