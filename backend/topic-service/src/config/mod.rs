use crate::models::SortMode;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub service_name: String,
    pub env: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub sort_mode: SortMode,
    pub page_size: usize,
}

impl ServiceConfig {
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            service: ServiceConfig {
                service_name: env::var("SERVICE_NAME")
                    .unwrap_or_else(|_| "topic-service".to_string()),
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            feed: FeedConfig {
                // Unknown modes degrade to input order, same as the toggles
                sort_mode: SortMode::parse(
                    &env::var("FEED_SORT_MODE").unwrap_or_else(|_| "recent".to_string()),
                ),
                page_size: parse_page_size(
                    &env::var("FEED_PAGE_SIZE").unwrap_or_else(|_| "20".to_string()),
                )?,
            },
        })
    }
}

fn parse_page_size(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidValue {
            key: "FEED_PAGE_SIZE",
            expected: "a positive integer",
            value: raw.to_string(),
        }),
    }
}
