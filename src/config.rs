//! Server configuration, loaded from the environment.

use anyhow::{Context, Result};
use std::env;

const HOST_VAR: &str = "SHOPPING_LIST_HOST";
const PORT_VAR: &str = "SHOPPING_LIST_PORT";

/// Listening address for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Reads `SHOPPING_LIST_HOST` / `SHOPPING_LIST_PORT`, falling back to
    /// `127.0.0.1:8080`. An unparsable port is a startup error.
    pub fn from_env() -> Result<Self> {
        let host = env::var(HOST_VAR).unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var(PORT_VAR) {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("{PORT_VAR} is not a valid port: {raw:?}"))?,
            Err(_) => 8080,
        };

        Ok(Self { host, port })
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
