use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use chirp_api::{AppStateInner, router};
use chirp_core::{AccountService, MessageService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "chirp_server=debug,chirp_api=debug,chirp_db=debug,tower_http=debug".into()
            }),
        )
        .init();

    // Config
    let db_path = std::env::var("CHIRP_DB_PATH").unwrap_or_else(|_| "chirp.db".into());
    let host = std::env::var("CHIRP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("CHIRP_PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()?;

    // Init database
    let db = Arc::new(chirp_db::Database::open(&PathBuf::from(&db_path))?);

    // Shared state
    let state = Arc::new(AppStateInner {
        accounts: AccountService::new(db.clone()),
        messages: MessageService::new(db.clone(), db),
    });

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Chirp server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
