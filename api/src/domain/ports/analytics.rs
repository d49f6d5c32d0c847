//! Analytics client port trait
//!
//! The site only emits events; querying and reporting happen elsewhere.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;

/// Event types for analytics tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    /// Fired once per session when a post is first viewed
    PostViewed {
        slug: String,
        title: String,
        category: Option<String>,
        timestamp: DateTime<Utc>,
    },
    /// First interaction with the contact form
    FormStarted { timestamp: DateTime<Utc> },
    /// A form field received focus
    FieldFocused {
        field: String,
        timestamp: DateTime<Utc>,
    },
    /// Contact form delivered successfully (payload minus free text)
    FormSubmitted {
        project: String,
        budget: Option<String>,
        timestamp: DateTime<Utc>,
    },
    /// Contact form submission failed, with an error category
    FormFailed {
        category: String,
        timestamp: DateTime<Utc>,
    },
    /// Pricing calculator produced an estimate
    EstimateRequested {
        pages: u32,
        feature_count: usize,
        timeline: String,
        currency: String,
        timestamp: DateTime<Utc>,
    },
}

impl AnalyticsEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            AnalyticsEvent::PostViewed { .. } => "post_viewed",
            AnalyticsEvent::FormStarted { .. } => "form_started",
            AnalyticsEvent::FieldFocused { .. } => "field_focused",
            AnalyticsEvent::FormSubmitted { .. } => "form_submitted",
            AnalyticsEvent::FormFailed { .. } => "form_failed",
            AnalyticsEvent::EstimateRequested { .. } => "estimate_requested",
        }
    }
}

/// Port trait for analytics dispatch
#[async_trait]
pub trait AnalyticsClient: Send + Sync {
    /// Track an analytics event
    async fn track(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError>;
}
