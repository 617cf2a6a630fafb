use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::Question;

pub const DEFAULT_TOPIC: &str = "Untitled Quiz";

/// A validated quiz, the only shape the generation route ever returns on success.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct QuizData {
    pub topic: String, // 1-4 words, requested of the generator but not enforced
    pub questions: Vec<Question>,
}

impl Default for QuizData {
    fn default() -> Self {
        Self {
            topic: DEFAULT_TOPIC.to_string(),
            questions: Vec::new(),
        }
    }
}
