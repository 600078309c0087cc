use std::sync::Arc;

use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{AnswerValue, QuizSession};
use crate::models::dto::request::GenerateQuizRequest;
use crate::models::dto::response::{QuizSummaryResponse, SessionView, SubmitAnswerResponse};
use crate::parser;
use crate::repositories::SessionRepository;
use crate::services::model_service::QuizGenerator;
use crate::services::score_service::ScoreService;

/// Orchestrates quiz sessions: generation, navigation, grading and scoring.
/// Every action is one fetch, at most one state transition, then a full
/// re-derivation of the client view.
pub struct SessionService {
    repository: Arc<dyn SessionRepository>,
    generator: Arc<dyn QuizGenerator>,
}

impl SessionService {
    pub fn new(repository: Arc<dyn SessionRepository>, generator: Arc<dyn QuizGenerator>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Generate a quiz and open a fresh session positioned on its first
    /// question. Parsing never fails, so any generator text yields a session.
    pub async fn create_session(&self, request: GenerateQuizRequest) -> AppResult<SessionView> {
        request.validate()?;

        let raw_quiz = self
            .generator
            .generate(&request.subject, &request.level)
            .await?;
        let questions = parser::parse_questions(&raw_quiz);

        let session = QuizSession::new(request.subject, request.level, questions);
        let session = self.repository.insert(session).await?;

        log::info!(
            "Created session '{}' with {} questions",
            session.id,
            session.questions.len()
        );

        Ok(SessionView::from(&session))
    }

    pub async fn current_view(&self, id: &str) -> AppResult<SessionView> {
        let session = self.fetch(id).await?;
        Ok(SessionView::from(&session))
    }

    /// Grade an answer against the current question. An absent answer means
    /// the client has nothing selected yet and leaves the session untouched.
    pub async fn submit_answer(
        &self,
        id: &str,
        answer: Option<AnswerValue>,
    ) -> AppResult<SubmitAnswerResponse> {
        let mut session = self.fetch(id).await?;

        let Some(answer) = answer else {
            return Ok(SubmitAnswerResponse {
                correct: None,
                session: SessionView::from(&session),
            });
        };

        let correct = session.submit(answer);
        if correct.is_some() {
            session = self.repository.update(session).await?;
        }

        Ok(SubmitAnswerResponse {
            correct,
            session: SessionView::from(&session),
        })
    }

    pub async fn next_question(&self, id: &str) -> AppResult<SessionView> {
        let mut session = self.fetch(id).await?;
        if session.next() {
            session = self.repository.update(session).await?;
        }

        Ok(SessionView::from(&session))
    }

    pub async fn previous_question(&self, id: &str) -> AppResult<SessionView> {
        let mut session = self.fetch(id).await?;
        if session.previous() {
            session = self.repository.update(session).await?;
        }

        Ok(SessionView::from(&session))
    }

    pub async fn finish(&self, id: &str) -> AppResult<SessionView> {
        let mut session = self.fetch(id).await?;
        if session.finish() {
            session = self.repository.update(session).await?;
        }

        Ok(SessionView::from(&session))
    }

    pub async fn summary(&self, id: &str) -> AppResult<QuizSummaryResponse> {
        let session = self.fetch(id).await?;
        ScoreService::summarize(&session)
    }

    pub async fn delete_session(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await
    }

    async fn fetch(&self, id: &str) -> AppResult<QuizSession> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Session with id '{}' not found", id)))
    }
}
