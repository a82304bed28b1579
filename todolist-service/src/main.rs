mod api;
mod auth;
mod config;
mod models;
mod store;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServiceConfig;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todolist_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Todo List API");

    let config = ServiceConfig::from_env();
    let app = api::create_router();

    let addr = config.addr();
    tracing::info!("Listening on {}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET    /health");
    tracing::info!("  POST   /auth/register");
    tracing::info!("  POST   /login");
    tracing::info!("  GET    /tasks/");
    tracing::info!("  POST   /tasks/");
    tracing::info!("  GET    /tasks/:task_id");
    tracing::info!("  PUT    /tasks/:task_id");
    tracing::info!("  DELETE /tasks/:task_id");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await
}
