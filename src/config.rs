use crate::constants::{
    CHAT_COMPLETIONS_PATH, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ENV_API_KEY, ENV_BASE_URL,
    ENV_ORG_ID, ENV_PROJECT_ID, ENV_TIMEOUT_SECS,
};
use crate::error::ProbeError;
use std::{env, time::Duration};

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub api_key: String,
    pub base_url: String,
    pub organization: Option<String>,
    pub project: Option<String>,
    pub timeout: Duration,
}

impl ProbeConfig {
    /// Reads the configuration from the process environment. `.env` must
    /// already have been loaded by the caller.
    pub fn from_env() -> Result<Self, ProbeError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable lookup. Empty values are
    /// treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProbeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = read(ENV_API_KEY).ok_or(ProbeError::MissingCredential(ENV_API_KEY))?;

        let base_url = read(ENV_BASE_URL)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match read(ENV_TIMEOUT_SECS) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ProbeError::InvalidSetting {
                        name: ENV_TIMEOUT_SECS,
                        value: raw,
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(ProbeConfig {
            api_key,
            base_url,
            organization: read(ENV_ORG_ID),
            project: read(ENV_PROJECT_ID),
            timeout,
        })
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH)
    }
}
