use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: String,
    pub content_api_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
            content_api_url: env::var("CONTENT_API_URL")
                .unwrap_or_else(|_| "http://localhost:4000".to_string()),
        })
    }
}
