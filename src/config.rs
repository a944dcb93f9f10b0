use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::search::PageSizePolicy;

/// Where listings come from.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingBackend {
    /// Remote listing service at this base URL.
    Remote { base_url: String, timeout: Duration },
    /// JSON file loaded into memory at startup.
    File(PathBuf),
    /// Built-in sample listings.
    Sample,
}

/// Service configuration loaded from environment variables.
///
/// | Env Var                 | Default                 |
/// |-------------------------|-------------------------|
/// | `HOST`                  | `0.0.0.0`               |
/// | `PORT`                  | `5000`                  |
/// | `LISTINGS_URL`          | unset                   |
/// | `LISTINGS_PATH`         | unset                   |
/// | `UPSTREAM_TIMEOUT_SECS` | `30`                    |
/// | `PAGE_SIZE_NARROW`      | `10`                    |
/// | `PAGE_SIZE_WIDE`        | `12`                    |
/// | `CORS_ORIGINS`          | `http://localhost:3000` |
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub listings: ListingBackend,
    pub page_sizes: PageSizePolicy,
    pub cors_origins: Vec<String>,
}

impl Settings {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = parse_or(&var, "PORT", 5000)?;

        let timeout = Duration::from_secs(parse_or(&var, "UPSTREAM_TIMEOUT_SECS", 30u64)?);
        let listings = match (var("LISTINGS_URL"), var("LISTINGS_PATH")) {
            (Some(base_url), _) => ListingBackend::Remote { base_url, timeout },
            (None, Some(path)) => ListingBackend::File(PathBuf::from(path)),
            (None, None) => ListingBackend::Sample,
        };

        let defaults = PageSizePolicy::default();
        let page_sizes = PageSizePolicy::new(
            parse_or(&var, "PAGE_SIZE_NARROW", defaults.narrow)?,
            parse_or(&var, "PAGE_SIZE_WIDE", defaults.wide)?,
        );

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            listings,
            page_sizes,
            cors_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T, F>(var: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}
