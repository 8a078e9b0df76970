//! Errors from live temperature retrieval.

/// Errors from one retrieval round trip. The upstream payload is
/// carried verbatim; the core attempts no retry and no interpretation
/// beyond extracting the scalar.
#[derive(Debug, thiserror::Error)]
pub enum LiveError {
    /// The upstream service answered with a non-success status.
    #[error("upstream weather service returned {status}: {payload}")]
    Upstream { status: u16, payload: String },

    /// The round trip itself failed (connect, timeout, TLS, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body does not carry `main.temp`.
    #[error("malformed upstream payload: {reason}")]
    MalformedPayload { reason: String },
}

pub type LiveResult<T> = Result<T, LiveError>;
