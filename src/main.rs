use actix_web::{middleware::Logger, web, App, HttpServer};
use quizqube_server::{
    app_state::AppState,
    config::Config,
    handlers::{configure_routes, json_config},
    middleware::{cors, RequestIdMiddleware},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if config.production {
        config.validate_for_production();
    }

    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    log::info!(
        "Starting quiz generation server on {}:{} (credentials={}, model={}, sanitizer={:?})",
        bind_address.0,
        bind_address.1,
        config.credential_source,
        config.generation_model,
        config.sanitizer_strategy
    );

    let state = AppState::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config(state.config.max_content_bytes))
            .wrap(Logger::default())
            .wrap(cors(&state.config.cors_allowed_origins))
            .wrap(RequestIdMiddleware)
            .configure(configure_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}
