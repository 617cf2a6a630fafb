use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;
use crate::models::domain::quiz_request::{
    Difficulty, QuizRequest, QuizType, ALLOWED_QUESTION_COUNTS,
};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequestDto {
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,

    #[validate(range(min = 5, max = 30, message = "questionCount must be one of 5, 10, 20, 30"))]
    pub question_count: usize,

    pub difficulty: Difficulty,

    #[serde(rename = "typeOfQuiz")]
    pub quiz_type: QuizType,
}

impl GenerateQuizRequestDto {
    /// Derive rules plus the count membership check the range rule cannot express.
    pub fn validate_all(&self) -> Result<(), AppError> {
        self.validate()?;

        if !ALLOWED_QUESTION_COUNTS.contains(&self.question_count) {
            return Err(AppError::ValidationError(format!(
                "questionCount must be one of 5, 10, 20, 30 (got {})",
                self.question_count
            )));
        }
        Ok(())
    }
}

impl TryFrom<GenerateQuizRequestDto> for QuizRequest {
    type Error = AppError;

    fn try_from(dto: GenerateQuizRequestDto) -> Result<Self, Self::Error> {
        dto.validate_all()?;
        QuizRequest::new(dto.content, dto.question_count, dto.difficulty, dto.quiz_type)
    }
}
