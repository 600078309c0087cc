use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, models::dto::request::SubmitAnswerRequest,
};

#[get("/api/sessions/{id}")]
pub async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let view = state.session_service.current_view(&id).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/sessions/{id}/answer")]
pub async fn submit_answer(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .session_service
        .submit_answer(&id, request.into_inner().answer)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/sessions/{id}/next")]
pub async fn next_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let view = state.session_service.next_question(&id).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/sessions/{id}/previous")]
pub async fn previous_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let view = state.session_service.previous_question(&id).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/sessions/{id}/finish")]
pub async fn finish_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let view = state.session_service.finish(&id).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[get("/api/sessions/{id}/summary")]
pub async fn get_summary(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let summary = state.session_service.summary(&id).await?;
    Ok(HttpResponse::Ok().json(summary))
}

#[delete("/api/sessions/{id}")]
pub async fn delete_session(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.session_service.delete_session(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
