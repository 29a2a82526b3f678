use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Entity not found")]
    NotFound,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server error: status {0}")]
    Server(u16),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return GatewayError::Decode(err.to_string());
        }

        match err.status() {
            Some(status) if status == reqwest::StatusCode::NOT_FOUND => GatewayError::NotFound,
            Some(status) => GatewayError::Server(status.as_u16()),
            None => GatewayError::Transport(err.to_string()),
        }
    }
}
