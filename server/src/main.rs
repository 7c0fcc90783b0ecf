//! Taskboard server entry point

use tracing_subscriber::EnvFilter;

use taskboard_server::repository::init_db;
use taskboard_server::{create_router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("taskboard_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let db = init_db(&config.db_path).await?;
    let app = create_router(AppState::new(&db), config.static_dir.clone());

    match &config.static_dir {
        Some(dir) => tracing::info!(dir = %dir.display(), "serving front end"),
        None => tracing::info!("no static directory found, API only mode"),
    }

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!(addr = %config.addr, db = %config.db_path.display(), "Taskboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
