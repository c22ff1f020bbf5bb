mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let config = ServerConfig::from_env()?;
    let addr = config.addr();

    let app = routes::app(conf.leptos_options, &config);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "desdr site listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
