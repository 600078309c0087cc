pub mod evaluation_service;
pub mod model_service;
pub mod score_service;
pub mod session_service;

pub use model_service::{OpenAiModelService, QuizGenerator};
pub use score_service::ScoreService;
pub use session_service::SessionService;
