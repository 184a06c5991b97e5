//! The typed JSON client.
//!
//! Every operation runs the same pipeline: resolve the target, merge headers,
//! serialize the body, execute through the [`Transport`], check the status
//! against the configured [`StatusPolicy`](crate::StatusPolicy), then decode
//! the payload (or drop it, for [`JsonClient::post_discard`]).

use std::sync::Arc;

use bytes::Bytes;
use reqwest::{Body, Method, Request};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::call::Call;
use crate::codec;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::headers;
use crate::transport::{BasicClient, Transport};

/// Stateless JSON-over-HTTP client.
///
/// Holds a shared transport and an immutable config, so clones are cheap and
/// one instance can serve concurrent calls without locking.
#[derive(Debug)]
pub struct JsonClient<T> {
    transport: Arc<T>,
    config: ClientConfig,
}

impl<T> Clone for JsonClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            config: self.config.clone(),
        }
    }
}

impl JsonClient<BasicClient> {
    /// Client over reqwest, using the config's timeouts.
    pub fn basic(config: ClientConfig) -> Result<Self, Error> {
        let transport =
            BasicClient::with_timeouts(config.timeout_duration(), config.connect_timeout_duration())?;
        Ok(Self::with_config(transport, config))
    }
}

impl<T: Transport> JsonClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ClientConfig::default())
    }

    pub fn with_config(transport: T, config: ClientConfig) -> Self {
        Self::from_shared(Arc::new(transport), config)
    }

    /// Builds a client around a transport that is also used elsewhere.
    pub fn from_shared(transport: Arc<T>, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET `call` and decode the response as `R`.
    pub async fn get<R>(&self, call: impl Into<Call>) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        self.send::<R, ()>(Method::GET, call, None).await
    }

    /// POST `body` as JSON and decode the response as `R`.
    pub async fn post<R, B>(&self, call: impl Into<Call>, body: &B) -> Result<R, Error>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        self.send(Method::POST, call, Some(body)).await
    }

    /// POST without a body and decode the response as `R`.
    pub async fn post_empty<R>(&self, call: impl Into<Call>) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        self.send::<R, ()>(Method::POST, call, None).await
    }

    /// POST `body` as JSON and ignore the response payload.
    ///
    /// The status is still checked.
    pub async fn post_discard<B>(&self, call: impl Into<Call>, body: &B) -> Result<(), Error>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.exchange(Method::POST, call.into(), Some(body)).await?;
        Ok(())
    }

    /// PUT `body` as JSON and decode the response as `R`.
    pub async fn put<R, B>(&self, call: impl Into<Call>, body: &B) -> Result<R, Error>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        self.send(Method::PUT, call, Some(body)).await
    }

    /// PATCH `body` as JSON and decode the response as `R`.
    pub async fn patch<R, B>(&self, call: impl Into<Call>, body: &B) -> Result<R, Error>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        self.send(Method::PATCH, call, Some(body)).await
    }

    /// Runs one exchange with any method and decodes the response as `R`.
    pub async fn send<R, B>(
        &self,
        method: Method,
        call: impl Into<Call>,
        body: Option<&B>,
    ) -> Result<R, Error>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        let payload = self.exchange(method, call.into(), body).await?;
        codec::decode(&payload).inspect_err(|e| warn!(error = %e, "response did not match expected type"))
    }

    /// Builds the complete transport request for a call without sending it.
    ///
    /// Fails before any I/O if the target, a header or the body is invalid.
    pub fn build_request<B>(&self, method: Method, call: &Call, body: Option<&B>) -> Result<Request, Error>
    where
        B: Serialize + ?Sized,
    {
        let url = call.target.resolve(self.config.base_url.as_ref())?;
        let headers = headers::merge(call.header_pairs())?;
        let payload = body.map(codec::encode).transpose()?;

        let mut req = Request::new(method, url);
        *req.headers_mut() = headers;
        *req.body_mut() = payload.map(Body::from);
        Ok(req)
    }

    #[tracing::instrument(skip_all, fields(method = %method, url = tracing::field::Empty))]
    async fn exchange<B>(&self, method: Method, call: Call, body: Option<&B>) -> Result<Bytes, Error>
    where
        B: Serialize + ?Sized + Sync,
    {
        let req = self.build_request(method.clone(), &call, body)?;
        tracing::Span::current().record("url", tracing::field::display(req.url()));
        debug!(has_body = req.body().is_some(), "sending request");

        let resp = self.transport.execute(req).await.inspect_err(|e| {
            warn!(error = %e, "transport failed");
        })?;
        debug!(status = resp.status, bytes = resp.body.len(), "response received");

        if !self.config.status_policy.accepts(&method, resp.status) {
            warn!(status = resp.status, "request rejected by status policy");
            return Err(Error::RequestFailed {
                status: resp.status,
                body: resp.body,
            });
        }
        Ok(resp.body)
    }
}
