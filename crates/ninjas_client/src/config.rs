use crate::NinjasError;
use secrecy::SecretString;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.api-ninjas.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: SecretString,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, NinjasError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function instead of the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, NinjasError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let api = get("NINJAS_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| NinjasError::Config("NINJAS_API_KEY missing".into()))?;
        let base_url = get("NINJAS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let timeout_secs = match get("NINJAS_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                NinjasError::Config(format!("NINJAS_TIMEOUT_SECS is not a number: {raw}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            api_key: SecretString::new(api.into()),
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
