use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use crate::ContactPayload;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("contact endpoint responded with status {0}")]
    Status(u16),
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Delivers one contact payload to the receiving endpoint.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, payload: &ContactPayload<'_>) -> Result<(), TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn post_json(&self, payload: &ContactPayload<'_>) -> Result<(), TransportError> {
        (**self).post_json(payload).await
    }
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Arc<Url>,
}

impl HttpTransport {
    pub fn new(endpoint: Url, timeout: Duration, user_agent: &str) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: Arc::new(endpoint),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, payload: &ContactPayload<'_>) -> Result<(), TransportError> {
        let response = self
            .client
            .post((*self.endpoint).clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        Ok(())
    }
}
