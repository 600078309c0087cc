use crate::errors::{AppError, AppResult};
use crate::models::domain::QuizSession;
use crate::models::dto::response::{QuestionFeedback, QuizSummaryResponse};

pub struct ScoreService;

impl ScoreService {
    /// Build the end-of-quiz report for a finished session.
    ///
    /// Only graded entries in the correctness log count; the `None` markers
    /// pushed by navigation are skipped. Feedback pairs questions with graded
    /// outcomes in order and stops at the shorter of the two.
    pub fn summarize(session: &QuizSession) -> AppResult<QuizSummaryResponse> {
        if !session.finished {
            return Err(AppError::BadRequest("Quiz is not finished yet".to_string()));
        }

        let outcomes: Vec<bool> = session.correctness_log.iter().flatten().copied().collect();
        let correct_count = outcomes.iter().filter(|correct| **correct).count();

        let feedback = session
            .questions
            .iter()
            .zip(outcomes.iter())
            .map(|(question, correct)| QuestionFeedback {
                description: question.description.clone(),
                user_answer: question.user_answer.clone(),
                correct: *correct,
                correct_answer: question.correct_answer.clone(),
            })
            .collect();

        Ok(QuizSummaryResponse {
            correct_count,
            total_count: outcomes.len(),
            feedback,
        })
    }
}
