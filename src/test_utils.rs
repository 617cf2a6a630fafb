#[cfg(test)]
pub mod fixtures {
    use secrecy::SecretString;
    use serde_json::{json, Value};

    use crate::models::domain::{Difficulty, QuizRequest, QuizType};

    /// A well-formed multiple choice question as the generator would emit it.
    pub fn multiple_choice_json(i: usize) -> Value {
        json!({
            "type": "multiple_choice",
            "question": format!("Multiple choice question {}?", i),
            "options": [
                format!("Option A{}", i),
                format!("Option B{}", i),
                format!("Option C{}", i),
                format!("Option D{}", i)
            ],
            "correct": format!("Option B{}", i)
        })
    }

    /// A well-formed true/false question as the generator would emit it.
    pub fn true_false_json(i: usize) -> Value {
        json!({
            "type": "true_false",
            "question": format!("True or false statement {}.", i),
            "options": ["True", "False"],
            "correct": "True"
        })
    }

    pub fn quiz_payload(topic: &str, questions: Vec<Value>) -> Value {
        json!({ "topic": topic, "questions": questions })
    }

    /// Completion text: optional prose followed by the serialized payload.
    pub fn completion_text(prefix: &str, topic: &str, questions: Vec<Value>) -> String {
        format!("{}{}", prefix, quiz_payload(topic, questions))
    }

    pub fn quiz_request(quiz_type: QuizType, question_count: usize) -> QuizRequest {
        QuizRequest::new(
            "The mitochondria is the powerhouse of the cell.",
            question_count,
            Difficulty::Medium,
            quiz_type,
        )
        .expect("fixture request is valid")
    }

    pub fn test_credential() -> SecretString {
        SecretString::from("gsk_test_credential_0123456789".to_string())
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;
    use serde_json::Value;

    /// 4xx or 5xx.
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "expected a failing status, got {}",
            status
        );
    }

    pub fn assert_success_status(status: StatusCode) {
        assert!(status.is_success(), "expected 2xx, got {}", status);
    }

    /// Failure bodies are exactly `{ "error": <string> }`.
    pub fn assert_error_body(body: &Value) {
        let fields = body
            .as_object()
            .unwrap_or_else(|| panic!("error body is not an object: {}", body));
        assert_eq!(fields.len(), 1, "unexpected error body fields: {}", body);
        assert!(body["error"].is_string(), "error field is not a string: {}", body);
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::QuizType;

    #[test]
    fn test_fixtures_multiple_choice_has_answer_among_options() {
        let question = multiple_choice_json(3);
        let options = question["options"].as_array().unwrap();
        assert_eq!(options.len(), 4);
        assert!(options.contains(&question["correct"]));
    }

    #[test]
    fn test_fixtures_completion_text_embeds_payload() {
        let text = completion_text("Sure! ", "Topic", vec![true_false_json(0)]);
        assert!(text.starts_with("Sure! {"));
        assert!(text.contains("\"topic\":\"Topic\""));
    }

    #[test]
    fn test_fixtures_quiz_request() {
        let request = quiz_request(QuizType::TrueFalse, 5);
        assert_eq!(request.question_count(), 5);
        assert_eq!(request.quiz_type(), QuizType::TrueFalse);
    }
}
