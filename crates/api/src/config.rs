use std::str::FromStr;

/// Deployment environment, selected by `APP_ENV`.
///
/// Only an explicit development flag enables development behaviour; an unset
/// `APP_ENV` resolves to [`AppEnv::Production`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Staging,
    #[default]
    Production,
}

impl AppEnv {
    /// Development deployments expose storage error details in 500 responses.
    pub fn is_development(self) -> bool {
        matches!(self, AppEnv::Development)
    }
}

impl FromStr for AppEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(AppEnv::Development),
            "staging" | "stage" => Ok(AppEnv::Staging),
            "production" | "prod" => Ok(AppEnv::Production),
            other => Err(format!("unknown APP_ENV '{other}'")),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// Network defaults suit local development; set `APP_ENV=development`
/// to also get storage error details in 500 responses.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Deployment environment (default: production).
    pub app_env: AppEnv,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on pooled database connections (default: `10`).
    pub database_max_connections: u32,
    /// Directory holding the built portfolio site, served for unmatched paths.
    pub static_dir: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                  |
    /// |----------------------------|--------------------------|
    /// | `APP_ENV`                  | `production`             |
    /// | `HOST`                     | `0.0.0.0`                |
    /// | `PORT`                     | `3000`                   |
    /// | `CORS_ORIGINS`             | `http://localhost:3000`  |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                     |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`                     |
    /// | `STATIC_DIR`               | unset                    |
    pub fn from_env() -> Self {
        let app_env = resolve_app_env(std::env::var("APP_ENV").ok());

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        let static_dir = std::env::var("STATIC_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Self {
            app_env,
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_max_connections,
            static_dir,
        }
    }
}

/// Parse `APP_ENV`, falling back to [`AppEnv::default`] when unset or blank.
fn resolve_app_env(raw: Option<String>) -> AppEnv {
    match raw {
        Some(v) if !v.trim().is_empty() => v
            .parse()
            .expect("APP_ENV must be development, staging or production"),
        _ => AppEnv::default(),
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
