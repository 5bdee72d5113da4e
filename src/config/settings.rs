//! Process settings from environment variables.

use crate::error::ConfigError;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_APP_ENV: &str = "development";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://quarry.db";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// `PORT`, default 3000.
    pub port: u16,
    /// `APP_ENV`, default `development`.
    pub app_env: String,
    /// `DATABASE_URL`, default `sqlite://quarry.db`.
    pub database_url: String,
    /// `MODELS_PATH`; the demo models are used when unset.
    pub models_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            port: DEFAULT_PORT,
            app_env: DEFAULT_APP_ENV.into(),
            database_url: DEFAULT_DATABASE_URL.into(),
            models_path: None,
        }
    }
}

impl Settings {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Read through an arbitrary lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let port = match get("PORT") {
            Some(p) => p.parse::<u16>().map_err(|e| ConfigError::InvalidSetting {
                name: "PORT",
                message: format!("{}: {}", p, e),
            })?,
            None => DEFAULT_PORT,
        };
        Ok(Settings {
            port,
            app_env: get("APP_ENV").unwrap_or_else(|| DEFAULT_APP_ENV.into()),
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            models_path: get("MODELS_PATH").map(PathBuf::from),
        })
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }
}
