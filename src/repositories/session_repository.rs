use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::{AppError, AppResult};
use crate::models::domain::QuizSession;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert(&self, session: QuizSession) -> AppResult<QuizSession>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizSession>>;
    async fn update(&self, session: QuizSession) -> AppResult<QuizSession>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

/// Process-local session store. Sessions last as long as the server does;
/// nothing survives a restart.
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, QuizSession>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: QuizSession) -> AppResult<QuizSession> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.id) {
            return Err(AppError::AlreadyExists(format!(
                "Session with id '{}' already exists",
                session.id
            )));
        }

        sessions.insert(session.id.clone(), session.clone());
        Ok(session)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn update(&self, session: QuizSession) -> AppResult<QuizSession> {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(&session.id) {
            return Err(AppError::NotFound(format!(
                "Session with id '{}' not found",
                session.id
            )));
        }

        sessions.insert(session.id.clone(), session.clone());
        Ok(session)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut sessions = self.sessions.write().await;
        if sessions.remove(id).is_none() {
            return Err(AppError::NotFound(format!(
                "Session with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
