//! Prompt templates for quiz generation. `%questionCount%` and `%difficulty%`
//! are substituted by the prompt composer.

pub const QUIZ_SYSTEM_PROMPT: &str = "You are an expert quiz generator. Your responses must be in valid JSON format only, with no additional text. You must strictly adhere to the specified number of questions and quiz type.";

pub const COMMON_INSTRUCTIONS: &str = "Generate a comprehensive quiz based on the following content. Follow these guidelines strictly:

1. Create EXACTLY %questionCount% questions. This is crucial.
2. Difficulty level: %difficulty%
3. Ensure questions are diverse and cover different aspects of the content. Each question should focus on a unique piece of information from the document.
4. Use clear, concise language in questions and options.
5. Avoid ambiguous or trick questions.
6. Ensure the correct answer is accurate and based on the given content.
7. Do not repeat or rephrase the same question multiple times.
8. The topic of the quiz should be 1-4 words long and accurately represent the main theme of the content.";

pub const MULTIPLE_CHOICE_INSTRUCTIONS: &str = "9. All questions must be multiple-choice with exactly 4 options each.
10. Make sure all options are plausible but only one is correct.
11. Distribute correct answers evenly among options (A, B, C, D) to avoid patterns.";

pub const TRUE_FALSE_INSTRUCTIONS: &str = "9. All questions must be statements that can be judged as either true or false.
10. Each question must have exactly two options: [\"True\", \"False\"].
11. Provide clear statements that can be definitively judged as true or false based on the content.
12. Aim for a balanced mix of true and false statements.
13. The correct answer must be either \"True\" or \"False\", matching exactly one of the options.";

pub const MIXED_INSTRUCTIONS: &str = "9. Create a mix of multiple-choice (70%) and true/false (30%) questions.
10. For multiple-choice questions:
   - Provide exactly 4 options for each question.
   - Make sure all options are plausible but only one is correct.
   - Distribute correct answers evenly among options (A, B, C, D) to avoid patterns.
11. For true/false questions:
   - Provide exactly two options: [\"True\", \"False\"].
   - Provide clear statements that can be definitively judged as true or false based on the content.
   - The correct answer must be either \"True\" or \"False\".
12. Ensure a good balance between multiple-choice and true/false questions throughout the quiz.";

pub const JSON_FORMAT_HEADER: &str = "Respond with JSON in the following format:";

pub const MULTIPLE_CHOICE_FORMAT: &str = r#"{
  "topic": "Main topic of the quiz",
  "questions": [
    {
      "type": "multiple_choice",
      "question": "Question text",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "correct": "Correct option (exactly as in options)"
    }
  ]
}"#;

pub const TRUE_FALSE_FORMAT: &str = r#"{
  "topic": "Main topic of the quiz",
  "questions": [
    {
      "type": "true_false",
      "question": "Statement to be judged as true or false",
      "options": ["True", "False"],
      "correct": "True or False"
    }
  ]
}"#;

pub const MIXED_FORMAT: &str = r#"{
  "topic": "Main topic of the quiz",
  "questions": [
    {
      "type": "multiple_choice",
      "question": "Question text",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "correct": "Correct option (exactly as in options)"
    },
    {
      "type": "true_false",
      "question": "Statement to be judged as true or false",
      "options": ["True", "False"],
      "correct": "True or False"
    }
  ]
}"#;

pub const MULTIPLE_CHOICE_EXAMPLE: &str = r#"{
  "type": "multiple_choice",
  "question": "What is the capital of France?",
  "options": ["London", "Berlin", "Paris", "Madrid"],
  "correct": "Paris"
}"#;

pub const TRUE_FALSE_EXAMPLE: &str = r#"{
  "type": "true_false",
  "question": "Paris is the capital of France.",
  "options": ["True", "False"],
  "correct": "True"
}"#;

pub const CONTENT_HEADER: &str = "Content for quiz generation:";

pub const COMMON_REMINDERS: &str = "Remember:
1. Your entire response must be valid JSON. Do not include any explanations or additional text outside the JSON structure.
2. Generate EXACTLY %questionCount% questions. This is a strict requirement.
3. Ensure each question covers a different aspect of the content to maximize learning value.
4. Double-check that your response adheres to all the guidelines before submitting.";
