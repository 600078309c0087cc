#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{AnswerValue, Question, QuestionType, QuizSession};

    /// Raw generator output with one multiple-choice and one
    /// fill-in-the-blank question.
    pub fn sample_quiz_text() -> &'static str {
        "---\n**Question Type:** Multiple Choice\n**Question Description:** What is 5 + 7?\n**Possible Answers:** [\"10\", \"12\", \"14\"]\n**Correct Answer:** [\"12\"]\n---\n**Question Type:** Fill in the Blank\n**Question Description:** Water freezes at __ degrees Celsius.\n**Possible Answers:** []\n**Correct Answer:** [\"0\"]\n---"
    }

    /// The questions `sample_quiz_text` parses into.
    pub fn sample_questions() -> Vec<Question> {
        vec![
            Question {
                question_type: QuestionType::MultipleChoice,
                description: "What is 5 + 7?".to_string(),
                possible_answers: vec!["10".to_string(), "12".to_string(), "14".to_string()],
                correct_answer: vec!["12".to_string()],
                user_answer: None,
            },
            Question {
                question_type: QuestionType::FillInBlank,
                description: "Water freezes at __ degrees Celsius.".to_string(),
                possible_answers: vec![],
                correct_answer: vec!["0".to_string()],
                user_answer: None,
            },
        ]
    }

    /// A session walked to the result page: first question answered
    /// correctly, second incorrectly.
    pub fn finished_session() -> QuizSession {
        let mut session = QuizSession::new("Science", "Primary", sample_questions());
        session.submit(AnswerValue::Text("12".to_string()));
        session.next();
        session.submit(AnswerValue::Text("5".to_string()));
        session.finish();
        session
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::parser;

    #[test]
    fn test_sample_text_parses_into_sample_questions() {
        assert_eq!(parser::parse_questions(sample_quiz_text()), sample_questions());
    }

    #[test]
    fn test_finished_session_is_scoreable() {
        let session = finished_session();
        assert!(session.finished);
        assert_eq!(session.correctness_log.len(), 4);
    }
}
