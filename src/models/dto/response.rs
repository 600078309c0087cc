use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{AnswerValue, QuestionType, QuizSession};

/// The current question as the client sees it. The correct-answer list
/// stays hidden until the question has been answered.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub question_type: QuestionType,
    pub description: String,
    pub possible_answers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<AnswerValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<Vec<String>>,
}

/// Everything a client needs to render one turn of the quiz, re-derived
/// from the session after every action.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: String,
    pub subject: String,
    pub level: String,
    pub question_number: usize,
    pub total_questions: usize,
    pub progress: f64,
    pub answered: bool,
    pub finished: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionView>,
    pub created_at: DateTime<Utc>,
}

impl From<&QuizSession> for SessionView {
    fn from(session: &QuizSession) -> Self {
        let question = session.current_question().map(|question| QuestionView {
            question_type: question.question_type,
            description: question.description.clone(),
            possible_answers: question.possible_answers.clone(),
            user_answer: question.user_answer.clone(),
            correct_answer: session.answered.then(|| question.correct_answer.clone()),
        });

        SessionView {
            session_id: session.id.clone(),
            subject: session.subject.clone(),
            level: session.level.clone(),
            question_number: session.current_index + 1,
            total_questions: session.questions.len(),
            progress: session.progress(),
            answered: session.answered,
            finished: session.finished,
            question,
            created_at: session.created_at,
        }
    }
}

/// Immediate feedback for a submission. `correct` is absent when the
/// submission was ignored (no answer sent, already answered, or finished).
#[derive(Debug, Clone, Serialize)]
pub struct SubmitAnswerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct: Option<bool>,
    pub session: SessionView,
}

/// One row of the result page.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionFeedback {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<AnswerValue>,
    pub correct: bool,
    pub correct_answer: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizSummaryResponse {
    pub correct_count: usize,
    pub total_count: usize,
    pub feedback: Vec<QuestionFeedback>,
}

/// The fixed dropdown catalogs a frontend offers for generation.
#[derive(Debug, Clone, Serialize)]
pub struct QuizOptionsResponse {
    pub subjects: Vec<&'static str>,
    pub levels: Vec<&'static str>,
}
