use thiserror::Error;

/// Failures talking to the remote API. Every network call returns a typed
/// result; callers surface failures as non-fatal inline UI states instead
/// of swallowing them.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request requires authentication")]
    Unauthorized,

    #[error("API returned status {status} for {operation}")]
    Status { operation: String, status: u16 },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Short message suitable for an inline notice next to the failed
    /// widget.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "Sign in to use this feature.",
            ApiError::Status { .. } => "The server rejected the request. Try again later.",
            ApiError::Transport(_) => "Could not reach the server. Check your connection.",
        }
    }
}
