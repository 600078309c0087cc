use actix_web::web;

pub mod quiz_handler;
pub mod session_handler;

pub use quiz_handler::{create_quiz, health_check, quiz_options};
pub use session_handler::{
    delete_session, finish_quiz, get_session, get_summary, next_question, previous_question,
    submit_answer,
};

/// Registers every endpoint on an actix app or test service.
pub fn register_endpoints(config: &mut web::ServiceConfig) {
    config
        .service(health_check)
        .service(create_quiz)
        .service(quiz_options)
        .service(get_session)
        .service(submit_answer)
        .service(next_question)
        .service(previous_question)
        .service(finish_quiz)
        .service(get_summary)
        .service(delete_session);
}
