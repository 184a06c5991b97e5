//! Error taxonomy for typed HTTP calls.

use bytes::Bytes;

use crate::transport::TransportError;

/// Everything that can abort a [`JsonClient`](crate::JsonClient) call.
///
/// [`Error::RequestFailed`] means the server answered with a status outside
/// the success range. [`Error::Transport`] means no answer arrived at all
/// (connect failure, timeout, reset), so there is no status to report;
/// [`Error::status`] returns `None` for it.
///
/// Every call is all-or-nothing: no partial result is ever returned next to
/// one of these.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target could not be resolved into an absolute `http(s)` URL.
    #[error("invalid target `{0}`")]
    InvalidTarget(String),
    /// A caller-supplied header name or value is not valid HTTP.
    #[error("invalid header: {0}")]
    InvalidHeader(String),
    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    EncodeFailed(#[source] serde_json::Error),
    /// The exchange completed but the status is outside the success range.
    #[error("request failed with status {status}")]
    RequestFailed {
        /// HTTP status code returned by the server.
        status: u16,
        /// Raw response payload, kept for diagnostics.
        body: Bytes,
    },
    /// The transport itself failed before a status was available.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    /// The response payload does not match the expected type.
    #[error("failed to decode response body: {0}")]
    DecodeFailed(#[source] serde_json::Error),
}

impl Error {
    /// Status code carried by [`Error::RequestFailed`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body as lossy UTF-8, for `RequestFailed` only.
    pub fn body_text(&self) -> Option<String> {
        match self {
            Error::RequestFailed { body, .. } => Some(String::from_utf8_lossy(body).into_owned()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_on_request_failed() {
        let err = Error::RequestFailed {
            status: 404,
            body: Bytes::from_static(b"not here"),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body_text().as_deref(), Some("not here"));
        assert_eq!(err.to_string(), "request failed with status 404");

        let err = Error::InvalidTarget("::".into());
        assert_eq!(err.status(), None);
        assert_eq!(err.body_text(), None);
    }
}
