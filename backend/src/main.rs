//! Backend entry-point: wires the REST endpoints and OpenAPI docs.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use backend::ApiDoc;
use backend::api::HttpState;
use backend::api::health::HealthState;
use backend::domain::ports::{CategoryRepository, QuestionRepository};
use backend::outbound::persistence::MemoryTriviaStore;
use backend::server::{ServerConfig, configure_app, cors_headers};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env()?;
    let store = Arc::new(if config.seed_example_data() {
        MemoryTriviaStore::with_example_data()
    } else {
        MemoryTriviaStore::new()
    });
    let questions: Arc<dyn QuestionRepository> = store.clone();
    let categories: Arc<dyn CategoryRepository> = store;
    let state = HttpState::new(questions, categories);

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays reachable.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            .wrap(cors_headers())
            .configure(configure_app(state.clone(), server_health_state.clone()));
        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
        app
    })
    .bind(config.bind_addr())?;

    info!(addr = %config.bind_addr(), "trivia backend listening");
    health_state.mark_ready();
    server.run().await
}
