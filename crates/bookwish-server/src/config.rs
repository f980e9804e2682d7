use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::warn;

use bookwish_core::lookup;

const DEV_JWT_SECRET: &str = "dev-secret-change-me";

/// Runtime settings, read from `BOOKWISH_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub addr: SocketAddr,
    pub jwt_secret: String,
    pub lookup_url: String,
    pub lookup_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let db_path = var("BOOKWISH_DB_PATH").unwrap_or_else(|| "bookwish.db".into());
        let host = var("BOOKWISH_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = var("BOOKWISH_PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .context("BOOKWISH_PORT must be a port number")?;

        let jwt_secret = var("BOOKWISH_JWT_SECRET").unwrap_or_else(|| {
            warn!("BOOKWISH_JWT_SECRET not set, using the development secret");
            DEV_JWT_SECRET.into()
        });

        let lookup_url = var("BOOKWISH_LOOKUP_URL").unwrap_or_else(|| lookup::DEFAULT_BASE_URL.into());
        let lookup_timeout = match var("BOOKWISH_LOOKUP_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.parse()
                    .context("BOOKWISH_LOOKUP_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            None => lookup::DEFAULT_TIMEOUT,
        };

        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", host, port))?;

        Ok(Self {
            db_path: PathBuf::from(db_path),
            addr,
            jwt_secret,
            lookup_url,
            lookup_timeout,
        })
    }
}
