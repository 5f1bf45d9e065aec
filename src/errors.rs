use thiserror::Error;

/// Input problems caught before anything is sent to the backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("budget name must not be empty")]
    EmptyName,
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("end date must be after start date")]
    EndBeforeStart,
}

/// Failures surfaced by the backend client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("server rejected the request ({status}): {message}")]
    Remote { status: u16, message: String },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// True when the backend answered 401, i.e. the session token is no
    /// longer accepted and the user has to log in again.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ClientError::Remote { status: 401, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_401_counts_as_expired() {
        let expired = ClientError::Remote {
            status: 401,
            message: "token invalid".into(),
        };
        let rejected = ClientError::Remote {
            status: 400,
            message: "bad payload".into(),
        };
        assert!(expired.is_session_expired());
        assert!(!rejected.is_session_expired());
        assert!(!ClientError::Validation(ValidationError::EmptyName).is_session_expired());
    }
}

/// Error type for the local configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
