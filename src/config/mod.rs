// src/config/mod.rs
// All settings load from the environment (.env supported), with defaults.

use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct CalcConfig {
    // ── Database Configuration
    pub database_url: String,
    pub sqlite_max_connections: usize,

    // ── History Configuration
    pub history_cap: i64,
    pub history_default_limit: i64,
    pub history_max_limit: i64,

    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Logging Configuration
    pub log_level: String,
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => match val.trim().parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                default
            }
        },
        // Missing variable is not an error; take the default.
        Err(_) => default,
    }
}

impl CalcConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            // No .env file; environment variables and defaults still apply.
        }

        Self {
            database_url: env_var_or("DATABASE_URL", "sqlite:./quickcalc.db?mode=rwc".to_string()),
            sqlite_max_connections: env_var_or("SQLITE_MAX_CONNECTIONS", 5),
            history_cap: env_var_or("CALC_HISTORY_CAP", 20),
            history_default_limit: env_var_or("CALC_HISTORY_DEFAULT_LIMIT", 10),
            history_max_limit: env_var_or("CALC_HISTORY_MAX_LIMIT", 100),
            host: env_var_or("CALC_HOST", "0.0.0.0".to_string()),
            port: env_var_or("CALC_PORT", 3000),
            log_level: env_var_or("CALC_LOG_LEVEL", "info".to_string()),
        }
    }
}

pub static CONFIG: Lazy<CalcConfig> = Lazy::new(CalcConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_without_env() {
        let config = CalcConfig::from_env();
        assert!(config.history_cap > 0);
        assert!(config.history_default_limit <= config.history_max_limit);
        assert!(!config.database_url.is_empty());
    }

    #[test]
    fn test_env_var_or_falls_back_on_garbage() {
        // SAFETY: test-local variable name, not read anywhere else.
        unsafe { std::env::set_var("CALC_TEST_BOGUS_PORT", "not-a-number") };
        let port: u16 = env_var_or("CALC_TEST_BOGUS_PORT", 1234);
        assert_eq!(port, 1234);
    }
}
