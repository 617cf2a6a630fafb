use serde::{Deserialize, Serialize};

use crate::{
    errors::{AppError, AppResult},
    models::domain::quiz_question::QuestionType,
};

/// Question counts a caller may ask for over HTTP.
pub const ALLOWED_QUESTION_COUNTS: [usize; 4] = [5, 10, 20, 30];

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "snake_case")]
pub enum QuizType {
    MultipleChoice,
    TrueFalse,
    Mixed, // Roughly 70% multiple choice, 30% true/false
}

impl QuizType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizType::MultipleChoice => "multiple_choice",
            QuizType::TrueFalse => "true_false",
            QuizType::Mixed => "mixed",
        }
    }

    /// Whether a question of the given kind belongs in a quiz of this type.
    pub fn accepts(&self, question_type: QuestionType) -> bool {
        match self {
            QuizType::MultipleChoice => question_type == QuestionType::MultipleChoice,
            QuizType::TrueFalse => question_type == QuestionType::TrueFalse,
            QuizType::Mixed => true,
        }
    }
}

impl std::fmt::Display for QuizType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for one generation run. Built once per call and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRequest {
    content: String,
    question_count: usize,
    difficulty: Difficulty,
    quiz_type: QuizType,
}

impl QuizRequest {
    /// The HTTP layer narrows `question_count` to [`ALLOWED_QUESTION_COUNTS`];
    /// the pipeline itself only needs it to be positive.
    pub fn new(
        content: impl Into<String>,
        question_count: usize,
        difficulty: Difficulty,
        quiz_type: QuizType,
    ) -> AppResult<Self> {
        let content = content.into();

        if content.trim().is_empty() {
            return Err(AppError::ValidationError(
                "content must not be empty".to_string(),
            ));
        }

        if question_count == 0 {
            return Err(AppError::ValidationError(
                "questionCount must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            content,
            question_count,
            difficulty,
            quiz_type,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn quiz_type(&self) -> QuizType {
        self.quiz_type
    }
}
