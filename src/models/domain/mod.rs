pub mod quiz;
pub mod quiz_question;
pub mod quiz_request;

pub use quiz::QuizData;
pub use quiz_question::{Question, QuestionType};
pub use quiz_request::{Difficulty, QuizRequest, QuizType};
