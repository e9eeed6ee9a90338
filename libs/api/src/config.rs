use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub server: Server,
    pub cors: Cors,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8000,
        }
    }
}

impl Server {
    pub fn address(&self) -> anyhow::Result<SocketAddr> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .with_context(|| format!("invalid server host: {}", self.host))?;

        Ok(SocketAddr::from((ip, self.port)))
    }
}

/// Origins allowed to call the api from a browser.
/// Empty (or containing `*`) means any origin.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Cors {
    pub allow_origins: Vec<String>,
}
