use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TABLE: &str = "notes";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Serve the swagger UI and the OpenAPI document
    #[serde(default)]
    pub openapi: bool,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StoreConfig {
    Postgres {
        dsn: String,
        #[serde(default = "default_table")]
        table: String,
    },
    Memory,
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

fn load_from_file(path: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(Into::into)
}

fn load_from_env() -> Result<Config, Box<dyn std::error::Error>> {
    load_from_vars(|key| env::var(key).ok())
}

fn load_from_vars(
    var: impl Fn(&str) -> Option<String>,
) -> Result<Config, Box<dyn std::error::Error>> {
    let port = match var("PORT") {
        Some(port) => port
            .parse::<u16>()
            .map_err(|e| format!("Failed to parse PORT: {e}"))?,
        None => DEFAULT_PORT,
    };

    let openapi = match var("OPENAPI") {
        Some(flag) => flag
            .parse::<bool>()
            .map_err(|e| format!("Failed to parse OPENAPI: {e}"))?,
        None => false,
    };

    let backend = var("STORE_BACKEND").unwrap_or_else(|| "postgres".to_string());
    let store = match backend.as_str() {
        "postgres" => StoreConfig::Postgres {
            dsn: var("PG_DSN")
                .ok_or("PG_DSN environment variable is required for the postgres backend")?,
            table: var("TABLE_NAME").unwrap_or_else(default_table),
        },
        "memory" => StoreConfig::Memory,
        other => return Err(format!("Unknown STORE_BACKEND '{other}'").into()),
    };

    Ok(Config {
        port,
        openapi,
        store,
    })
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    // Retrieve env variable
    let config_path =
        env::var("NOTES_SERVER_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    // Try env path
    if Path::new(&config_path).exists() {
        return load_from_file(&config_path);
    }

    // Fallback to config.yaml
    if Path::new("config.yaml").exists() {
        tracing::warn!(
            "Config file '{}' not found, falling back to 'config.yaml'",
            config_path
        );
        return load_from_file("config.yaml");
    }

    // Fallback to config.example.yaml
    if Path::new("config.example.yaml").exists() {
        tracing::warn!(
            "Config file '{}' and 'config.yaml' not found, falling back to 'config.example.yaml'\
             \n This file should not be used and should be replaced with actual data",
            config_path
        );
        return load_from_file("config.example.yaml");
    }

    // Fallback to environment variables
    tracing::info!(
        "No config file found, attempting to load configuration from environment variables"
    );
    load_from_env().map_err(|e| {
        format!(
            "Config file not found and environment variables are incomplete. \
             Tried: '{config_path}', 'config.yaml', 'config.example.yaml', and environment variables. \
             Error: {e}"
        )
        .into()
    })
}
