//! The transport boundary: anything able to run a single HTTP exchange.
//!
//! [`Transport`] is the one seam the client depends on. [`BasicClient`] talks
//! to the network through reqwest, [`StubTransport`] answers from memory.

mod basic;
mod client;
mod stub;

pub use basic::BasicClient;
pub use client::Transport;
pub use stub::{RecordedRequest, StubTransport};

use bytes::Bytes;

/// Status code and payload of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Failure inside the transport, before any status was received.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}
