use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("carousel needs at least one slide")]
    EmptyCarousel,
    #[error("gateway parameter `{0}` is neither a string nor a list of strings")]
    GatewayParam(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

/// Failures of a submission that reached (or tried to reach) the network.
/// Field-level rejections are outcomes, not errors.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    Busy,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("success response without gateway parameters")]
    UnexpectedResponse,
}
