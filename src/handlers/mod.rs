pub mod health_handler;
pub mod quiz_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;

pub use health_handler::{health_check, health_check_live};
pub use quiz_handler::{generate_quiz, quiz_schema};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_quiz)
        .service(quiz_schema)
        .service(health_check)
        .service(health_check_live);
}

/// JSON extractor settings: body size cap, and extractor failures reported
/// through [`AppError`] so the body is always `{ "error": ... }`.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            log::debug!("Rejected request body: {}", err);
            AppError::ValidationError(err.to_string()).into()
        })
}
