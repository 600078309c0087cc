pub mod question;
pub mod session;

pub use question::{AnswerValue, Question, QuestionType};
pub use session::QuizSession;
