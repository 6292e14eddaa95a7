use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the ConnectWise Manage client.
#[derive(Error, Debug)]
pub enum ConnectWiseError {
    /// The HTTP transport failed before a response was received.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    /// The API answered with a non-success status code.
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    /// The response body did not match the expected JSON shape.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A header value built from configuration is not valid.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    /// The client configuration is incomplete or unreadable.
    #[error("configuration error: {0}")]
    Config(String),
    /// A configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The page after `u32::MAX` cannot be addressed.
    #[error("page {0} has no successor")]
    PageOverflow(u32),
}

impl ConnectWiseError {
    /// Returns true for failures of an API round trip: transport errors,
    /// non-2xx statuses and bodies that fail to deserialize.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            ConnectWiseError::Request(_)
                | ConnectWiseError::Status { .. }
                | ConnectWiseError::Serde(_)
        )
    }

    /// The HTTP status attached to this error, if the server sent one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ConnectWiseError::Status { status, .. } => Some(*status),
            ConnectWiseError::Request(e) => e.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConnectWiseError>;
