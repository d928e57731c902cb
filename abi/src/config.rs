use std::fs;

use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub db: DbConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    #[serde(default)]
    pub password: String,
    pub dbname: String,
    #[serde(default = "default_pool_size")]
    pub max_connections: u32,
    /// seconds to wait for a free connection before giving up
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
}

fn default_pool_size() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    3
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: LogLevel,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub on_delete: DeletePolicy,
}

/// What happens to dependent rows when a chain, hotel or room is deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletePolicy {
    /// refuse to delete while dependents exist
    #[default]
    Restrict,
    /// remove dependents in the same transaction
    Cascade,
}

impl Config {
    pub fn load(filename: &str) -> Result<Self, Error> {
        let config = fs::read_to_string(filename).map_err(|_| Error::ConfigReadError)?;
        serde_yaml::from_str(&config).map_err(|_| Error::ConfigParseError)
    }
}

impl DbConfig {
    pub fn to_url(&self) -> String {
        format!("{}/{}", self.server_url(), self.dbname)
    }

    pub fn server_url(&self) -> String {
        if self.password.is_empty() {
            format!("postgres://{}@{}:{}", self.user, self.host, self.port)
        } else {
            format!(
                "postgres://{}:{}@{}:{}",
                self.user, self.password, self.host, self.port
            )
        }
    }
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_should_be_loaded() {
        let config = Config::load("../service/fixtures/config.yml").unwrap();
        assert_eq!(
            config,
            Config {
                db: DbConfig {
                    host: "localhost".to_string(),
                    port: 5432,
                    user: "postgres".to_string(),
                    password: "postgres".to_string(),
                    dbname: "hms".to_string(),
                    max_connections: 5,
                    acquire_timeout_secs: 3,
                },
                server: ServerConfig {
                    host: "0.0.0.0".to_string(),
                    port: 3000,
                },
                log: LogConfig {
                    level: LogLevel::Debug,
                },
                policy: PolicyConfig {
                    on_delete: DeletePolicy::Restrict,
                },
            }
        );
    }

    #[test]
    fn missing_config_file_should_fail() {
        let err = Config::load("does-not-exist.yml").unwrap_err();
        assert_eq!(err, Error::ConfigReadError);
    }

    #[test]
    fn optional_sections_should_default() {
        let yaml = r#"
db:
  host: db
  port: 5432
  user: hms
  dbname: hms
server:
  host: 127.0.0.1
  port: 8080
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.log.level, LogLevel::Info);
        assert_eq!(config.policy.on_delete, DeletePolicy::Restrict);
        assert_eq!(config.db.max_connections, 5);
        assert_eq!(config.db.to_url(), "postgres://hms@db:5432/hms");
        assert_eq!(config.server.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn cascade_policy_should_parse() {
        let policy: PolicyConfig = serde_yaml::from_str("on_delete: cascade").unwrap();
        assert_eq!(policy.on_delete, DeletePolicy::Cascade);
    }
}
