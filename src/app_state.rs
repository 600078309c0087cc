use std::sync::Arc;

use crate::{
    config::Config,
    repositories::InMemorySessionRepository,
    services::{OpenAiModelService, SessionService},
};

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let repository = Arc::new(InMemorySessionRepository::new());
        let generator = Arc::new(OpenAiModelService::new(&config));
        let session_service = Arc::new(SessionService::new(repository, generator));

        Self {
            session_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_builds_from_config() {
        let state = AppState::new(Config::test_config());
        assert_eq!(state.config.web_server_port, 8080);
    }
}
