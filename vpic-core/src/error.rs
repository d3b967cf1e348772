use thiserror::Error;

/// Errors returned by every vPIC operation.
#[derive(Debug, Error)]
pub enum VpicError {
    /// Caller input rejected before any request was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The API decoded the request but reported a non-zero error code in-band.
    #[error("invalid VIN")]
    InvalidVin { code: String, text: Option<String> },

    /// A numeric field in the response could not be parsed.
    #[error("unable to parse the {field} {value:?}")]
    Parse { field: &'static str, value: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("request cancelled")]
    Cancelled,
}

/// Failures talking to the API: the request itself, the HTTP status, or the body.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("received bad response: HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("invalid request URL: {0}")]
    Url(String),
}

pub type Result<T> = std::result::Result<T, VpicError>;
