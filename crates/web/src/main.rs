use anyhow::Context;
use axum::{Json, Router, routing::get};
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::weights::handlers::list_weights,
        features::weights::handlers::create_weight,
        features::weights::handlers::update_weight,
        features::weights::handlers::delete_weight,
    ),
    components(
        schemas(
            storage::dto::weight::CreateWeightRequest,
            storage::dto::weight::UpdateWeightRequest,
            storage::dto::weight::WeightResponse,
            storage::dto::weight::DeleteWeightResponse,
            storage::models::WeightRecord,
        )
    ),
    tags(
        (name = "weights", description = "Weight record endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Weight Tracker API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!("Connecting to database at: {}", config.database_url);
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let openapi = ApiDoc::openapi();

    let app = Router::new()
        .nest("/api/weights", features::weights::routes::routes())
        .route(
            "/api-docs/openapi.json",
            get(move || {
                let doc = openapi.clone();
                async move { Json(doc) }
            }),
        )
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind listener")?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
