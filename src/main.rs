use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use labreader::{config::Config, models, routes, AppState};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "labreader",
        description = "Extracts structured lab test records from report images via OCR"
    ),
    paths(
        routes::lab_tests::get_lab_tests,
        routes::health::health,
    ),
    components(schemas(
        models::LabTestRecord,
        models::LabTestsResponse,
        models::HealthResponse,
    ))
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let server_address = config.server_address.clone();
    let max_upload_bytes = config.max_upload_bytes;
    let state = Arc::new(AppState::new(config));

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api",
            routes::lab_tests::router().merge(routes::health::router()),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&server_address).await?;
    tracing::info!("labreader listening on {}", server_address);
    axum::serve(listener, app).await?;

    Ok(())
}
