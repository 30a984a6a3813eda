use crate::server::{
    error::{config::ConfigError, AppError},
    service::checkup::schedule::CHECKUP_INTERVAL_DAYS,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Days between fitness checkups.
    pub checkup_interval_days: i64,

    /// Seed credentials for the first admin account, only used when both are set.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            checkup_interval_days: parse_interval(std::env::var("CHECKUP_INTERVAL_DAYS").ok())?,
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        })
    }
}

/// Parses the checkup interval, falling back to the default when unset.
fn parse_interval(value: Option<String>) -> Result<i64, ConfigError> {
    let Some(value) = value else {
        return Ok(CHECKUP_INTERVAL_DAYS);
    };

    match value.trim().parse::<i64>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "CHECKUP_INTERVAL_DAYS".to_string(),
            value,
            reason: "expected a positive number of days".to_string(),
        }),
    }
}
