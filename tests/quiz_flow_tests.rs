use std::sync::Arc;

use async_trait::async_trait;

use quizgen_server::{
    errors::{AppError, AppResult},
    models::domain::{AnswerValue, Question, QuizSession},
    models::dto::request::GenerateQuizRequest,
    repositories::{InMemorySessionRepository, SessionRepository},
    services::{QuizGenerator, SessionService},
};

const TWO_QUESTION_QUIZ: &str = "---\n**Question Type:** Multiple Choice\n**Question Description:** What is 5 + 7?\n**Possible Answers:** [\"10\", \"12\", \"14\"]\n**Correct Answer:** [\"12\"]\n---\n**Question Type:** Fill in the Blank\n**Question Description:** Water freezes at __ degrees Celsius.\n**Possible Answers:** []\n**Correct Answer:** [\"0\"]\n---";

struct StubGenerator {
    raw: &'static str,
}

#[async_trait]
impl QuizGenerator for StubGenerator {
    async fn generate(&self, _subject: &str, _level: &str) -> AppResult<String> {
        Ok(self.raw.to_string())
    }
}

struct FailingGenerator;

#[async_trait]
impl QuizGenerator for FailingGenerator {
    async fn generate(&self, _subject: &str, _level: &str) -> AppResult<String> {
        Err(AppError::GeneratorError("model unavailable".to_string()))
    }
}

fn quiz_service(raw: &'static str) -> SessionService {
    SessionService::new(
        Arc::new(InMemorySessionRepository::new()),
        Arc::new(StubGenerator { raw }),
    )
}

fn generate_request(subject: &str, level: &str) -> GenerateQuizRequest {
    GenerateQuizRequest {
        subject: subject.to_string(),
        level: level.to_string(),
    }
}

fn text(value: &str) -> Option<AnswerValue> {
    Some(AnswerValue::Text(value.to_string()))
}

#[tokio::test]
async fn full_walkthrough_scores_one_of_two() {
    let service = quiz_service(TWO_QUESTION_QUIZ);
    let view = service
        .create_session(generate_request("Mathematics", "Primary"))
        .await
        .unwrap();
    let id = view.session_id;

    let first = service.submit_answer(&id, text("12")).await.unwrap();
    assert_eq!(first.correct, Some(true));

    let moved = service.next_question(&id).await.unwrap();
    assert_eq!(moved.question_number, 2);
    assert!(!moved.answered);

    let second = service.submit_answer(&id, text("5")).await.unwrap();
    assert_eq!(second.correct, Some(false));

    let finished = service.finish(&id).await.unwrap();
    assert!(finished.finished);

    let summary = service.summary(&id).await.unwrap();
    assert_eq!(summary.correct_count, 1);
    assert_eq!(summary.total_count, 2);
    assert_eq!(summary.feedback.len(), 2);
    assert!(summary.feedback[0].correct);
    assert!(!summary.feedback[1].correct);
}

#[tokio::test]
async fn revisiting_a_question_accumulates_grades() {
    let service = quiz_service(TWO_QUESTION_QUIZ);
    let view = service
        .create_session(generate_request("Mathematics", "Primary"))
        .await
        .unwrap();
    let id = view.session_id;

    service.submit_answer(&id, text("10")).await.unwrap();
    service.next_question(&id).await.unwrap();

    let back = service.previous_question(&id).await.unwrap();
    assert_eq!(back.question_number, 1);
    assert!(!back.answered);

    let retry = service.submit_answer(&id, text("12")).await.unwrap();
    assert_eq!(retry.correct, Some(true));

    service.next_question(&id).await.unwrap();
    service.submit_answer(&id, text("0")).await.unwrap();
    service.finish(&id).await.unwrap();

    // The first question was graded twice, so three grades are on record
    // and the report pairs them with questions in submission order.
    let summary = service.summary(&id).await.unwrap();
    assert_eq!(summary.correct_count, 2);
    assert_eq!(summary.total_count, 3);
    assert_eq!(summary.feedback.len(), 2);
    assert!(!summary.feedback[0].correct);
    assert!(summary.feedback[1].correct);
}

#[tokio::test]
async fn unstructured_generator_text_still_yields_a_session() {
    let service = quiz_service("Sorry, I cannot produce a quiz right now.");
    let view = service
        .create_session(generate_request("History", "Secondary"))
        .await
        .unwrap();

    assert_eq!(view.total_questions, 1);
    let question = view.question.expect("degraded question should be exposed");
    assert!(question.description.is_empty());
    assert!(question.possible_answers.is_empty());

    let response = service
        .submit_answer(&view.session_id, text("anything"))
        .await
        .unwrap();
    assert_eq!(response.correct, Some(false));
}

#[tokio::test]
async fn generator_failure_propagates_to_the_caller() {
    let service = SessionService::new(
        Arc::new(InMemorySessionRepository::new()),
        Arc::new(FailingGenerator),
    );

    let result = service
        .create_session(generate_request("Science", "Primary"))
        .await;

    assert!(matches!(result, Err(AppError::GeneratorError(_))));
}

#[tokio::test]
async fn repository_contract_round_trip() {
    let repository: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());

    let session = QuizSession::new("Geography", "Primary", vec![Question::default()]);
    let id = session.id.clone();

    let mut stored = repository.insert(session.clone()).await.unwrap();
    assert!(matches!(
        repository.insert(session).await,
        Err(AppError::AlreadyExists(_))
    ));

    stored.finished = true;
    repository.update(stored).await.unwrap();
    let found = repository.find_by_id(&id).await.unwrap().unwrap();
    assert!(found.finished);

    repository.delete(&id).await.unwrap();
    assert!(repository.find_by_id(&id).await.unwrap().is_none());
    assert!(matches!(
        repository.delete(&id).await,
        Err(AppError::NotFound(_))
    ));
}
