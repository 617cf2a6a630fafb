//! Turns an untrusted, loosely typed generator payload into a [`QuizData`].
//!
//! Nothing here fails: malformed or off-shape questions are dropped and
//! recorded, and the caller decides whether what survives is enough.

use std::collections::HashSet;

use serde_json::Value;

use crate::models::domain::{
    quiz::DEFAULT_TOPIC,
    quiz_question::{FALSE_OPTION, MULTIPLE_CHOICE_OPTION_COUNT, TRUE_OPTION},
    Question, QuestionType, QuizData, QuizType,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// `question`, `options`, `correct` or `type` missing or of the wrong JSON type.
    MalformedFields,
    /// Question kind not allowed for the requested quiz type.
    TypeMismatch(QuestionType),
    WrongOptionCount { expected: usize, actual: usize },
    /// Two options, but not exactly "True" and "False".
    InvalidTrueFalseOptions,
    BlankQuestion,
    /// `correct` does not match any option exactly.
    CorrectNotInOptions,
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropReason::MalformedFields => write!(f, "malformed fields"),
            DropReason::TypeMismatch(kind) => write!(f, "type {} not requested", kind),
            DropReason::WrongOptionCount { expected, actual } => {
                write!(f, "expected {} options, got {}", expected, actual)
            }
            DropReason::InvalidTrueFalseOptions => write!(f, "options are not True/False"),
            DropReason::BlankQuestion => write!(f, "question text is blank"),
            DropReason::CorrectNotInOptions => write!(f, "correct answer is not one of the options"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedQuestion {
    pub index: usize, // position in the generator's questions array
    pub reason: DropReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    pub expected: usize,
    pub actual: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub quiz: QuizData,
    pub dropped: Vec<DroppedQuestion>,
    pub shortfall: Option<Shortfall>,
    pub truncated: usize,
}

pub fn validate_and_repair(
    raw: &Value,
    expected_count: usize,
    requested_type: QuizType,
) -> ValidationOutcome {
    let topic = raw
        .get("topic")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| DEFAULT_TOPIC.to_string());

    let candidates = raw
        .get("questions")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut questions = Vec::with_capacity(candidates.len());
    let mut dropped = Vec::new();

    for (index, candidate) in candidates.iter().enumerate() {
        match check_question(candidate, requested_type) {
            Ok(question) => questions.push(question),
            Err(reason) => {
                log::debug!("Dropping generated question {}: {}", index, reason);
                dropped.push(DroppedQuestion { index, reason });
            }
        }
    }

    let mut shortfall = None;
    let mut truncated = 0;

    if questions.len() < expected_count {
        log::warn!(
            "Not enough valid questions generated. Expected {}, got {}",
            expected_count,
            questions.len()
        );
        shortfall = Some(Shortfall {
            expected: expected_count,
            actual: questions.len(),
        });
    } else if questions.len() > expected_count {
        truncated = questions.len() - expected_count;
        questions.truncate(expected_count);
    }

    ValidationOutcome {
        quiz: QuizData { topic, questions },
        dropped,
        shortfall,
        truncated,
    }
}

fn check_question(candidate: &Value, requested_type: QuizType) -> Result<Question, DropReason> {
    let text = candidate.get("question").and_then(Value::as_str);
    let options = candidate.get("options").and_then(Value::as_array);
    let correct = candidate.get("correct").and_then(Value::as_str);
    let question_type = candidate
        .get("type")
        .and_then(Value::as_str)
        .and_then(QuestionType::from_wire);

    let (Some(text), Some(options), Some(correct), Some(question_type)) =
        (text, options, correct, question_type)
    else {
        return Err(DropReason::MalformedFields);
    };

    // Non-string entries are dropped from the options, not the whole question.
    let options: Vec<String> = options
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_owned)
        .collect();

    if !requested_type.accepts(question_type) {
        return Err(DropReason::TypeMismatch(question_type));
    }

    match question_type {
        QuestionType::MultipleChoice if options.len() != MULTIPLE_CHOICE_OPTION_COUNT => {
            return Err(DropReason::WrongOptionCount {
                expected: MULTIPLE_CHOICE_OPTION_COUNT,
                actual: options.len(),
            });
        }
        QuestionType::TrueFalse if options.len() != 2 => {
            return Err(DropReason::WrongOptionCount {
                expected: 2,
                actual: options.len(),
            });
        }
        QuestionType::TrueFalse if !is_true_false_pair(&options) => {
            return Err(DropReason::InvalidTrueFalseOptions);
        }
        _ => {}
    }

    if text.trim().is_empty() {
        return Err(DropReason::BlankQuestion);
    }

    if !options.iter().any(|option| option == correct) {
        return Err(DropReason::CorrectNotInOptions);
    }

    Ok(Question {
        question_type,
        question: text.to_owned(),
        options,
        correct: correct.to_owned(),
    })
}

fn is_true_false_pair(options: &[String]) -> bool {
    let found: HashSet<&str> = options.iter().map(String::as_str).collect();
    found == HashSet::from([TRUE_OPTION, FALSE_OPTION])
}
