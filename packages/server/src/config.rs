use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// Log every SQL statement through `tracing`.
    pub sqlx_logging: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Shown in the page header and `<title>`.
    pub title: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub site: SiteConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("database.url", "sqlite://myblog.db?mode=rwc")?
            .set_default("database.max_connections", 10)?
            .set_default("database.sqlx_logging", false)?
            .set_default("site.title", "My Blog")?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., MYBLOG__DATABASE__URL)
            .add_source(Environment::with_prefix("MYBLOG").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
