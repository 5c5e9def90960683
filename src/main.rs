#![recursion_limit = "256"]

mod config;
mod routes;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: std::net::SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), SiteError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::SiteConfig::from_env()?;
    let backend = client::config::backend_config();
    tracing::info!(backend = backend.base_url(), "client bundle targets backend");

    let app = routes::site_app()?;
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| SiteError::Bind { addr, source })?;

    tracing::info!(%addr, "maffa-site listening");
    axum::serve(listener, app).await.map_err(SiteError::Serve)
}
