use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Everything that can stop the probe before a message is printed.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("missing credential: set {0} in the environment or in a .env file")]
    MissingCredential(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    InvalidSetting { name: &'static str, value: String },

    #[error("credential is not a valid header value: {0}")]
    Header(#[from] InvalidHeaderValue),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("response contained no choices")]
    EmptyChoices,
}

impl ProbeError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ProbeError::Api {
            status,
            message: message.into(),
        }
    }
}
