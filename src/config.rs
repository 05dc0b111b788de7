// src/config.rs
use crate::domain::UnitId;
use crate::errors::ServerError;
use std::net::SocketAddr;
use tracing::info;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_WORKERS: usize = 8;
pub const DEFAULT_UNIT: &str = "A1-101";

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `PORTAL_ADDR`
    pub addr: SocketAddr,
    /// `PORTAL_WORKERS`
    pub max_workers: usize,
    /// `PORTAL_UNIT`: the unit treated as the signed-in resident.
    pub user_unit: UnitId,
    /// `PORTAL_SEED`: fixes the generated schedule when set.
    pub seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let addr_raw = get("PORTAL_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ServerError::Config(format!("PORTAL_ADDR '{addr_raw}': {e}")))?;

        let max_workers = match get("PORTAL_WORKERS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ServerError::Config(format!(
                        "PORTAL_WORKERS must be a positive integer, got '{raw}'"
                    )))
                }
            },
            None => DEFAULT_WORKERS,
        };

        let unit_raw = get("PORTAL_UNIT").unwrap_or_else(|| DEFAULT_UNIT.to_string());
        let user_unit = UnitId::parse(&unit_raw).ok_or_else(|| {
            ServerError::Config(format!("PORTAL_UNIT '{unit_raw}' is not a unit id"))
        })?;

        let seed = get("PORTAL_SEED")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| ServerError::Config(format!("PORTAL_SEED '{raw}': {e}")))
            })
            .transpose()?;

        Ok(Self {
            addr,
            max_workers,
            user_unit,
            seed,
        })
    }
}

/// Loads `.env` (optional) and then the config.
pub fn load_app_configuration() -> Result<AppConfig, ServerError> {
    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(_) => info!("No .env file found, using process environment"),
    }
    AppConfig::from_env()
}
