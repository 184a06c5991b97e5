//! Typed JSON calls over HTTP.
//!
//! [`JsonClient`] turns `get`/`post`/`put`/`patch` calls into single HTTP
//! exchanges: the body is serialized to JSON, the status is checked, and the
//! payload is decoded into whatever type the caller asks for. The network
//! side sits behind the [`Transport`] trait so tests can swap in a
//! [`StubTransport`].
//!
//! ```no_run
//! use serde::Deserialize;
//! use typed_http::{Call, ClientConfig, JsonClient};
//!
//! #[derive(Deserialize)]
//! struct User {
//!     id: i64,
//!     name: String,
//! }
//!
//! # async fn run() -> Result<(), typed_http::Error> {
//! let client = JsonClient::basic(ClientConfig::default())?;
//! let user: User = client
//!     .get(Call::new("https://api.example.com/users/26").bearer("123456"))
//!     .await?;
//! println!("{} {}", user.id, user.name);
//! # Ok(())
//! # }
//! ```

pub mod call;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod headers;
pub mod status;
pub mod transport;

pub use call::{Call, Target};
pub use client::JsonClient;
pub use config::ClientConfig;
pub use error::Error;
pub use status::StatusPolicy;
pub use transport::{BasicClient, RawResponse, StubTransport, Transport, TransportError};
