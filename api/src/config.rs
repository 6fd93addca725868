use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// Deployment environment, decides the default mail backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl std::str::FromStr for AppEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(AppEnv::Development),
            "production" | "prod" => Ok(AppEnv::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

/// Which city store backs the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Database,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "database" | "db" => Ok(StoreBackend::Database),
            _ => Err(format!("Unknown store backend: {}", s)),
        }
    }
}

/// Where deletion notifications go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailBackend {
    Local,
    Cloud,
}

impl std::str::FromStr for MailBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(MailBackend::Local),
            "cloud" => Ok(MailBackend::Cloud),
            _ => Err(format!("Unknown mail backend: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app_env: AppEnv,
    pub port: u16,
    pub store_backend: StoreBackend,
    pub database_url: String,
    pub mail_backend: MailBackend,
    pub mail_to: String,
    pub mail_from: String,
    /// Delivery endpoint for the cloud mail backend
    pub cloud_mail_url: Option<String>,
    pub cloud_mail_api_key: Option<String>,
    /// Upper bound on a single cloud mail request
    pub mail_timeout: Duration,
    /// Directory for the daily rolling log file
    pub log_dir: PathBuf,
    /// File served by `GET /files/:id`
    pub sample_file_path: PathBuf,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build the config from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_env = parse_or(&lookup, "APP_ENV", AppEnv::Development)?;
        let default_mail = match app_env {
            AppEnv::Development => MailBackend::Local,
            AppEnv::Production => MailBackend::Cloud,
        };
        let mail_backend = parse_or(&lookup, "MAIL_BACKEND", default_mail)?;
        let cloud_mail_url = lookup("CLOUD_MAIL_URL").filter(|u| !u.is_empty());

        if mail_backend == MailBackend::Cloud && cloud_mail_url.is_none() {
            return Err(ConfigError::Missing("CLOUD_MAIL_URL"));
        }

        Ok(Self {
            app_env,
            port: parse_or(&lookup, "PORT", 8080)?,
            store_backend: parse_or(&lookup, "STORE_BACKEND", StoreBackend::Database)?,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://cityinfo.db?mode=rwc".to_string()),
            mail_backend,
            mail_to: lookup("MAIL_TO").unwrap_or_else(|| "admin@mycompany.com".to_string()),
            mail_from: lookup("MAIL_FROM").unwrap_or_else(|| "noreply@mycompany.com".to_string()),
            cloud_mail_url,
            cloud_mail_api_key: lookup("CLOUD_MAIL_API_KEY").filter(|k| !k.is_empty()),
            mail_timeout: Duration::from_secs(parse_or(&lookup, "MAIL_TIMEOUT_SECS", 10)?),
            log_dir: lookup("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
            sample_file_path: lookup("FILES_SAMPLE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("sample.pdf")),
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", 20 * 1024 * 1024)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::Invalid {
                    var,
                    message: e.to_string(),
                })
        }
        _ => Ok(default),
    }
}
