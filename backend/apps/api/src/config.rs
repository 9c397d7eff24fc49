//! Server Configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).

use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// `VAULTFLOW_ADDR`
    pub addr: SocketAddr,
    /// `VAULTFLOW_STORAGE_PATH`; in-memory store when unset
    pub storage_path: Option<PathBuf>,
    /// `VAULTFLOW_LATENCY_SCALE`, applied to every simulated delay
    pub latency_scale: f64,
    /// `FRONTEND_ORIGINS`, comma separated
    pub frontend_origins: Vec<String>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let addr = lookup("VAULTFLOW_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse()
            .context("VAULTFLOW_ADDR must be a socket address such as 0.0.0.0:31113")?;

        let storage_path = lookup("VAULTFLOW_STORAGE_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let latency_scale = match lookup("VAULTFLOW_LATENCY_SCALE") {
            Some(raw) => raw
                .trim()
                .parse()
                .context("VAULTFLOW_LATENCY_SCALE must be a number")?,
            None => 1.0,
        };

        let frontend_origins: Vec<String> = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        // Credentialed CORS needs explicit origins.
        if frontend_origins.iter().any(|origin| origin == "*") {
            anyhow::bail!("FRONTEND_ORIGINS must list explicit origins; `*` is not allowed");
        }

        Ok(Self {
            addr,
            storage_path,
            latency_scale,
            frontend_origins,
        })
    }
}
