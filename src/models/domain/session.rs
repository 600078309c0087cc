use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::question::{AnswerValue, Question};
use crate::services::evaluation_service::EvaluationService;

/// One interactive quiz run over a fixed question sequence.
///
/// The session is a small state machine: `Active(index, answered)` until
/// `finish()` moves it to its terminal state. Transitions mutate in place
/// and report whether anything changed; invalid transitions are silent
/// no-ops, never errors. There is no internal locking, so callers serialize
/// access to a given session.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QuizSession {
    pub id: String,
    pub subject: String,
    pub level: String,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub answered: bool,
    pub finished: bool,
    /// Tri-state outcome log: `Some(bool)` entries come from accepted
    /// submissions, `None` placeholders from `next()` and `finish()`.
    /// Entries only accumulate; backward navigation removes nothing.
    pub correctness_log: Vec<Option<bool>>,
    pub created_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(
        subject: impl Into<String>,
        level: impl Into<String>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            subject: subject.into(),
            level: level.into(),
            questions,
            current_index: 0,
            answered: false,
            finished: false,
            correctness_log: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Fraction of the quiz behind the user, `current_index / len`.
    /// The question currently on screen is not counted into the numerator,
    /// so the value stays below 1.0 even on the last question.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        self.current_index as f64 / self.questions.len() as f64
    }

    /// Records and evaluates an answer for the current question.
    ///
    /// Accepted once per question while the session is active. Returns the
    /// verdict, or `None` when the submission was ignored (already
    /// answered, already finished, or no question to answer).
    pub fn submit(&mut self, answer: AnswerValue) -> Option<bool> {
        if self.finished || self.answered {
            return None;
        }
        let question = self.questions.get_mut(self.current_index)?;

        let correct = EvaluationService::evaluate(&answer, &question.correct_answer);
        question.user_answer = Some(answer);
        self.correctness_log.push(Some(correct));
        self.answered = true;

        Some(correct)
    }

    /// Advances to the next question once the current one is answered.
    /// Appends a placeholder log entry for the slot being entered.
    pub fn next(&mut self) -> bool {
        if self.finished || !self.answered || self.current_index + 1 >= self.questions.len() {
            return false;
        }
        self.current_index += 1;
        self.answered = false;
        self.correctness_log.push(None);

        true
    }

    /// Steps back one question, reopening it for submission. The
    /// correctness log keeps everything it already holds; a re-submission
    /// appends a fresh entry rather than overwriting the old one.
    pub fn previous(&mut self) -> bool {
        if self.finished || self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        self.answered = false;

        true
    }

    /// Ends the quiz. Valid only on the last question, answered or not;
    /// locks the session against any further transition.
    pub fn finish(&mut self) -> bool {
        if self.finished || self.current_index + 1 != self.questions.len() {
            return false;
        }
        self.finished = true;
        self.answered = true;
        self.correctness_log.push(None);

        true
    }
}
