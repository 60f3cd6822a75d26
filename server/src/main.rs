#![recursion_limit = "256"]

mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env must load before the subscriber reads RUST_LOG.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, "ignoring unreadable .env");
        }
    }

    let config = ServerConfig::from_env()?;
    let app = routes::app(&config)?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, static_dir = %config.static_dir.display(), "tablekit listening");
    axum::serve(listener, app).await?;
    Ok(())
}
