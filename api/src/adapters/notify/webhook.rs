//! Webhook contact delivery
//!
//! Posts validated submissions to a studio-side webhook (e.g. a Slack or
//! CRM intake URL). When no webhook is configured the LogNotifier stands
//! in so local environments still exercise the full submit path.

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::entities::ContactSubmission;
use crate::domain::ports::ContactNotifier;
use crate::error::NotifyError;

/// Delivers contact submissions to an HTTP webhook
pub struct WebhookNotifier {
    http: Client,
    webhook_url: String,
}

impl WebhookNotifier {
    pub fn new(webhook_url: String) -> Self {
        Self {
            http: Client::new(),
            webhook_url,
        }
    }
}

#[async_trait]
impl ContactNotifier for WebhookNotifier {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        let payload = serde_json::json!({
            "name": submission.name,
            "email": submission.email,
            "company": submission.company,
            "project": submission.project,
            "budget": submission.budget,
            "message": submission.message,
        });

        let resp = self
            .http
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(())
        } else {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            Err(NotifyError::Rejected { status, message })
        }
    }
}

/// Logs submissions instead of delivering them; for local development
pub struct LogNotifier;

#[async_trait]
impl ContactNotifier for LogNotifier {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        tracing::info!(
            "Contact submission from {} <{}> ({})",
            submission.name,
            submission.email,
            submission.project
        );
        Ok(())
    }
}

/// Delivery channel picked at startup from configuration
pub enum ContactDelivery {
    Webhook(WebhookNotifier),
    Log(LogNotifier),
}

impl ContactDelivery {
    pub fn from_config(webhook_url: Option<String>) -> Self {
        match webhook_url {
            Some(url) => Self::Webhook(WebhookNotifier::new(url)),
            None => Self::Log(LogNotifier),
        }
    }
}

#[async_trait]
impl ContactNotifier for ContactDelivery {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        match self {
            ContactDelivery::Webhook(notifier) => notifier.deliver(submission).await,
            ContactDelivery::Log(notifier) => notifier.deliver(submission).await,
        }
    }
}
