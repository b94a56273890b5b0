// src/config.rs
use std::net::{IpAddr, SocketAddr};

use anyhow::Context;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Server configuration, read from the environment (`HOST`, `PORT`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST")
            .unwrap_or_else(|_| DEFAULT_HOST.to_string())
            .parse()
            .context("HOST is not a valid IP address")?;

        let port = match std::env::var("PORT") {
            Ok(p) => p.parse().context("PORT is not a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
