//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory served at `/images`. Defaults to `<site_root>/images`.
    pub images_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `SITE_IMAGES_DIR`: image directory override
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Set but unparseable values
    /// are errors; unset or blank values take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = match read("HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ServerError::InvalidEnv { var: "HOST", value: raw })?,
            None => DEFAULT_HOST,
        };
        let port = match read("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ServerError::InvalidEnv { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let images_dir = read("SITE_IMAGES_DIR").map(PathBuf::from);

        Ok(Self { host, port, images_dir })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    #[must_use]
    pub fn images_dir(&self, site_root: &Path) -> PathBuf {
        self.images_dir.clone().unwrap_or_else(|| site_root.join("images"))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
