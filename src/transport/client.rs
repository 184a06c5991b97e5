use async_trait::async_trait;
use reqwest::Request;

use super::{RawResponse, TransportError};

/// Something that can perform one HTTP exchange.
///
/// The request handed over is fully built: method, URL, merged headers and
/// serialized body are all set. Implementations return whatever status the
/// server answered with; judging it is the caller's job.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, req: Request) -> Result<RawResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn execute(&self, req: Request) -> Result<RawResponse, TransportError> {
        (**self).execute(req).await
    }
}
