//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use blog_infra::DatabaseConfig;

/// Configuration errors. Any of these aborts startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                let mut db = DatabaseConfig::new(url);
                db.max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", db.max_connections)?;
                db.min_connections = parse_or(&lookup, "DB_MIN_CONNECTIONS", db.min_connections)?;
                Some(db)
            }
            None => None,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 5000)?,
            database,
            cors_allowed_origins,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert!(config.database.is_none());
        assert!(config.cors_allowed_origins.is_empty());
    }

    #[test]
    fn reads_database_and_cors_settings() {
        let config = load(&[
            ("PORT", "8081"),
            ("DATABASE_URL", "postgres://blog@localhost/blog"),
            ("DB_MAX_CONNECTIONS", "32"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:3000, https://blog.example.com,"),
        ])
        .unwrap();

        assert_eq!(config.port, 8081);
        let db = config.database.unwrap();
        assert_eq!(db.url, "postgres://blog@localhost/blog");
        assert_eq!(db.max_connections, 32);
        assert_eq!(
            config.cors_allowed_origins,
            ["http://localhost:3000", "https://blog.example.com"]
        );
    }

    #[test]
    fn blank_database_url_counts_as_unset() {
        assert!(load(&[("DATABASE_URL", "  ")]).unwrap().database.is_none());
    }

    #[test]
    fn rejects_unparseable_numbers() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }
}
