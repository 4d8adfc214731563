use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

use crate::dto::BrandColors;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub mapper: MapperConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Canonical tenant colors used when a profile has none stored
    pub brand_colors: BrandColors,
    /// Check mapped DTOs against the entity schemas and warn on mismatch
    pub validate_output: bool,
    pub debug_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    pub default_limit: u32,
    pub max_limit: u32,
    pub max_order_fields: usize,
}

impl AppConfig {
    /// Load `.env` (if present) and build the config from the environment
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Mapper overrides
        if let Ok(v) = env::var("MAPPER_BRAND_PRIMARY") {
            if is_hex_color(&v) {
                self.mapper.brand_colors.primary = v;
            }
        }
        if let Ok(v) = env::var("MAPPER_BRAND_SECONDARY") {
            if is_hex_color(&v) {
                self.mapper.brand_colors.secondary = v;
            }
        }
        if let Ok(v) = env::var("MAPPER_BRAND_ACCENT") {
            if is_hex_color(&v) {
                self.mapper.brand_colors.accent = v;
            }
        }
        if let Ok(v) = env::var("MAPPER_VALIDATE_OUTPUT") {
            self.mapper.validate_output = v.parse().unwrap_or(self.mapper.validate_output);
        }
        if let Ok(v) = env::var("MAPPER_DEBUG_LOGGING") {
            self.mapper.debug_logging = v.parse().unwrap_or(self.mapper.debug_logging);
        }

        // Query overrides
        if let Ok(v) = env::var("QUERY_DEFAULT_LIMIT") {
            self.query.default_limit = v.parse().unwrap_or(self.query.default_limit);
        }
        if let Ok(v) = env::var("QUERY_MAX_LIMIT") {
            self.query.max_limit = v.parse().unwrap_or(self.query.max_limit);
        }
        if let Ok(v) = env::var("QUERY_MAX_ORDER_FIELDS") {
            self.query.max_order_fields = v.parse().unwrap_or(self.query.max_order_fields);
        }

        // A default above the cap would never be honored
        if self.query.default_limit > self.query.max_limit {
            self.query.default_limit = self.query.max_limit;
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            mapper: MapperConfig {
                brand_colors: BrandColors::default(),
                validate_output: true,
                debug_logging: true,
            },
            query: QueryConfig {
                default_limit: 20,
                max_limit: 1000,
                max_order_fields: 5,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            mapper: MapperConfig {
                brand_colors: BrandColors::default(),
                validate_output: true,
                debug_logging: false,
            },
            query: QueryConfig {
                default_limit: 20,
                max_limit: 500,
                max_order_fields: 3,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            mapper: MapperConfig {
                brand_colors: BrandColors::default(),
                validate_output: false,
                debug_logging: false,
            },
            query: QueryConfig {
                default_limit: 20,
                max_limit: 100,
                max_order_fields: 3,
            },
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

// Global singleton config - initialized once on first use
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::load);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
