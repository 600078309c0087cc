use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    constants::catalog::{EDUCATION_LEVELS, SUBJECTS},
    errors::AppError,
    models::dto::request::GenerateQuizRequest,
    models::dto::response::QuizOptionsResponse,
};

#[post("/api/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .session_service
        .create_session(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/api/quizzes/options")]
pub async fn quiz_options() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(QuizOptionsResponse {
        subjects: SUBJECTS.to_vec(),
        levels: EDUCATION_LEVELS.to_vec(),
    }))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
