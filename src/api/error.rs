use thiserror::Error;

/// Why a lookup-by-name request produced no usable result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("lookup returned HTTP {status}")]
    Status { status: u16 },

    #[error("failed to decode lookup response: {message}")]
    Decode { message: String },
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode {
            message: err.to_string(),
        }
    }
}
