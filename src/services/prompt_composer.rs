use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{
    constants::quiz_prompt::{
        COMMON_INSTRUCTIONS, COMMON_REMINDERS, CONTENT_HEADER, JSON_FORMAT_HEADER,
        MIXED_FORMAT, MIXED_INSTRUCTIONS, MULTIPLE_CHOICE_EXAMPLE, MULTIPLE_CHOICE_FORMAT,
        MULTIPLE_CHOICE_INSTRUCTIONS, TRUE_FALSE_EXAMPLE, TRUE_FALSE_FORMAT,
        TRUE_FALSE_INSTRUCTIONS,
    },
    models::domain::{Difficulty, QuizType},
};

static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"%(\w+)%").expect("PLACEHOLDER_REGEX is a valid regex pattern")
});

/// Replaces every `%name%` whose name appears in `params`. Unknown
/// placeholders are left in the output as written.
pub fn replace_placeholders(template: &str, params: &[(&str, String)]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| {
            params
                .iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.clone())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn type_instructions(quiz_type: QuizType) -> &'static str {
    match quiz_type {
        QuizType::MultipleChoice => MULTIPLE_CHOICE_INSTRUCTIONS,
        QuizType::TrueFalse => TRUE_FALSE_INSTRUCTIONS,
        QuizType::Mixed => MIXED_INSTRUCTIONS,
    }
}

fn json_format_section(quiz_type: QuizType) -> String {
    match quiz_type {
        QuizType::MultipleChoice => format!(
            "{JSON_FORMAT_HEADER}\n\n{MULTIPLE_CHOICE_FORMAT}\n\nExample:\n{MULTIPLE_CHOICE_EXAMPLE}"
        ),
        QuizType::TrueFalse => format!(
            "{JSON_FORMAT_HEADER}\n\n{TRUE_FALSE_FORMAT}\n\nExample:\n{TRUE_FALSE_EXAMPLE}"
        ),
        QuizType::Mixed => format!(
            "{JSON_FORMAT_HEADER}\n\n{MIXED_FORMAT}\n\nExamples:\n1. Multiple-choice:\n{MULTIPLE_CHOICE_EXAMPLE}\n\n2. True/False:\n{TRUE_FALSE_EXAMPLE}"
        ),
    }
}

/// Builds the user prompt: guidelines, type guidance, JSON shape, the source
/// content and a closing reminder, in that order.
///
/// Placeholders are only expanded inside the template blocks, so the
/// caller's content is embedded byte for byte.
pub fn compose_prompt(
    quiz_type: QuizType,
    difficulty: Difficulty,
    question_count: usize,
    content: &str,
) -> String {
    let params = [
        ("questionCount", question_count.to_string()),
        ("difficulty", difficulty.to_string()),
    ];

    let guidance = [
        COMMON_INSTRUCTIONS.to_string(),
        type_instructions(quiz_type).to_string(),
        json_format_section(quiz_type),
    ]
    .join("\n\n");

    let guidance = replace_placeholders(&guidance, &params);
    let reminders = replace_placeholders(COMMON_REMINDERS, &params);

    format!("{guidance}\n\n{CONTENT_HEADER}\n{content}\n\n{reminders}")
}
