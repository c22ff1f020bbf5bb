//! Startup and serve errors.

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("invalid {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
