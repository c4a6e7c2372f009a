//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_WORLD_FILE: &str = "config/basic-world.yaml";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bind address for both listeners.
    pub host: String,
    /// HTTP port.
    pub port: u16,
    /// World definition to load at startup.
    pub world_file: PathBuf,
    /// Port for the line protocol, if it should be served.
    pub line_port: Option<u16>,
}

impl Config {
    /// Reads `HOST`, `PORT`, `STAG_WORLD_FILE` and `STAG_LINE_PORT`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a port is not a valid `u16`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a port is not a valid `u16`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match lookup("PORT") {
            Some(raw) => parse_port("PORT", &raw)?,
            None => DEFAULT_PORT,
        };
        let world_file = lookup("STAG_WORLD_FILE")
            .map_or_else(|| PathBuf::from(DEFAULT_WORLD_FILE), PathBuf::from);
        let line_port = lookup("STAG_LINE_PORT")
            .map(|raw| parse_port("STAG_LINE_PORT", &raw))
            .transpose()?;

        Ok(Self {
            host,
            port,
            world_file,
            line_port,
        })
    }

    /// Address of the HTTP listener.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host` is not an IP address.
    pub fn http_addr(&self) -> Result<SocketAddr, AppError> {
        socket_addr(&self.host, self.port)
    }

    /// Address of the line-protocol listener, if enabled.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host` is not an IP address.
    pub fn line_addr(&self) -> Result<Option<SocketAddr>, AppError> {
        self.line_port
            .map(|port| socket_addr(&self.host, port))
            .transpose()
    }
}

fn parse_port(key: &str, raw: &str) -> Result<u16, AppError> {
    raw.trim()
        .parse()
        .map_err(|e| AppError::Config(format!("{key} must be a valid u16: {e}")))
}

fn socket_addr(host: &str, port: u16) -> Result<SocketAddr, AppError> {
    format!("{host}:{port}")
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
}
