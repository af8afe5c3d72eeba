//! Configuration management for the Alexandria services

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Master toggle for request validation on the REST services.
#[derive(Debug, Deserialize, Clone)]
pub struct ValidationConfig {
    pub enabled: bool,
}

/// Seed data loaded into the catalog's in-memory repositories at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct AutoLoadConfig {
    pub enabled: bool,
    pub authors: String,
    pub books: String,
    pub editions: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub autoload: AutoLoadConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReferencingConfig {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogClientConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub ttl_minutes: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WebsiteConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogClientConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub referencing: ReferencingConfig,
    pub website: WebsiteConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix ALEXANDRIA_)
            .add_source(
                Environment::with_prefix("ALEXANDRIA")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override catalog base URL from CATALOG_BASE_URL env var if present
            .set_override_option(
                "website.catalog.base_url",
                env::var("CATALOG_BASE_URL").ok(),
            )?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for AutoLoadConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            authors: "data/authors.json".to_string(),
            books: "data/books.json".to_string(),
            editions: "data/editions.json".to_string(),
        }
    }
}

impl Default for CatalogClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            timeout_seconds: 5,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { ttl_minutes: 30 }
    }
}
