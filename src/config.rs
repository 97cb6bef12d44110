use std::env;

use anyhow::{ensure, Context, Result};

const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";

/// Process configuration, read once at startup and passed by value into the
/// pieces that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Read configuration from the environment, loading a `.env` file from
    /// the working directory first if one exists.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let api_key = env::var(API_KEY_VAR)
            .with_context(|| format!("{API_KEY_VAR} must be set"))?;
        ensure!(!api_key.is_empty(), "{API_KEY_VAR} must not be empty");

        Ok(Config { api_key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global, so the set/unset/empty cases
    // run inside a single test.
    #[test]
    fn api_key_is_required_and_must_be_non_empty() {
        env::set_var(API_KEY_VAR, "test-key");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key, "test-key");

        env::set_var(API_KEY_VAR, "");
        assert!(Config::from_env().is_err());

        env::remove_var(API_KEY_VAR);
        assert!(Config::from_env().is_err());
    }
}
