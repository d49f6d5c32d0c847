//! HTTP analytics client implementation
//!
//! Ships events to a measurement endpoint as JSON. The site treats
//! analytics as fire-and-forget; callers log failures and move on.

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::ports::{AnalyticsClient, AnalyticsEvent};
use crate::error::AnalyticsError;

/// Analytics client posting events to an HTTP collection endpoint
pub struct MeasurementClient {
    http: Client,
    endpoint: String,
    measurement_id: Option<String>,
}

impl MeasurementClient {
    pub fn new(endpoint: String, measurement_id: Option<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            measurement_id,
        }
    }
}

#[async_trait]
impl AnalyticsClient for MeasurementClient {
    async fn track(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        let payload = serde_json::json!({
            "measurement_id": self.measurement_id,
            "event": event.event_type(),
            "params": event,
        });

        let resp = self
            .http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(())
        } else {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            Err(AnalyticsError::Rejected { status, message })
        }
    }
}

/// A no-op analytics client for testing or when no endpoint is configured
pub struct NoopAnalyticsClient;

#[async_trait]
impl AnalyticsClient for NoopAnalyticsClient {
    async fn track(&self, _event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        Ok(())
    }
}

/// Backend picked at startup from configuration
pub enum AnalyticsDispatch {
    Http(MeasurementClient),
    Noop(NoopAnalyticsClient),
}

impl AnalyticsDispatch {
    pub fn from_config(endpoint: Option<String>, measurement_id: Option<String>) -> Self {
        match endpoint {
            Some(endpoint) => Self::Http(MeasurementClient::new(endpoint, measurement_id)),
            None => Self::Noop(NoopAnalyticsClient),
        }
    }
}

#[async_trait]
impl AnalyticsClient for AnalyticsDispatch {
    async fn track(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        match self {
            AnalyticsDispatch::Http(client) => client.track(event).await,
            AnalyticsDispatch::Noop(client) => client.track(event).await,
        }
    }
}
