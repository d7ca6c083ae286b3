use std::{env, fmt::Display, net::IpAddr, net::SocketAddr, path::PathBuf, str::FromStr};

use anyhow::anyhow;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(|key| env::var(key).ok())
    }

    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            host: try_load(&lookup, "ACTIVITIES_HOST", "0.0.0.0")?,
            port: try_load(&lookup, "ACTIVITIES_PORT", "8000")?,
            static_dir: try_load(&lookup, "ACTIVITIES_STATIC_DIR", "static")?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse()
        .map_err(|e| anyhow!("invalid {key} value {raw:?}: {e}"))
}
