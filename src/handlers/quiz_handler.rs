use actix_web::{get, post, web, HttpRequest, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use schemars::schema_for;

use crate::{
    app_state::AppState,
    auth::fingerprint,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::{QuizData, QuizRequest},
        dto::request::GenerateQuizRequestDto,
    },
};

#[post("/api/generateQuiz")]
async fn generate_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    auth: Option<BearerAuth>,
    body: web::Json<GenerateQuizRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();

    let request = QuizRequest::try_from(body.into_inner())?;
    let credential = state
        .credentials
        .resolve(auth.as_ref().map(BearerAuth::token))?;

    log::info!(
        "[{}] generateQuiz type={} count={} difficulty={} credential={}",
        request_id,
        request.quiz_type(),
        request.question_count(),
        request.difficulty(),
        fingerprint(&credential)
    );

    let generated = state
        .quiz_generation_service
        .generate(&request, credential)
        .await
        .map_err(|e| {
            log::warn!("[{}] generateQuiz failed: {}", request_id, e);
            e
        })?;

    log::info!(
        "[{}] generateQuiz ok topic='{}' ({})",
        request_id,
        generated.quiz.topic,
        generated.report
    );

    Ok(HttpResponse::Ok().json(generated.quiz))
}

/// JSON Schema of the success body.
#[get("/api/generateQuiz/schema")]
async fn quiz_schema() -> HttpResponse {
    HttpResponse::Ok().json(schema_for!(QuizData))
}
