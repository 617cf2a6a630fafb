use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const TRUE_OPTION: &str = "True";
pub const FALSE_OPTION: &str = "False";

/// Number of options a multiple choice question must carry.
pub const MULTIPLE_CHOICE_OPTION_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Question {
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question: String,
    pub options: Vec<String>,
    pub correct: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Copy, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice, // Exactly four options, one correct
    TrueFalse,      // Options are exactly "True" and "False"
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::TrueFalse => "true_false",
        }
    }

    /// Maps the wire name a generator emits onto a kind, `None` for anything else.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "multiple_choice" => Some(QuestionType::MultipleChoice),
            "true_false" => Some(QuestionType::TrueFalse),
            _ => None,
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
