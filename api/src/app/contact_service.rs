//! Contact form service
//!
//! Drives one submission through the form state machine:
//! `Idle → Validating → Submitting → {Succeeded | Failed}`. Validation
//! failures return field-scoped errors and never reach the notifier.
//! Delivery is attempted exactly once; the caller resubmits manually.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{ContactSubmission, FormPhase};
use crate::domain::ports::{AnalyticsClient, AnalyticsEvent, ContactNotifier};
use crate::error::{AppError, DomainError};

/// Tracks the phase of one submission and rejects illegal transitions.
/// Transitions are driven only by `ContactService::submit`, so an illegal
/// one indicates a bug rather than bad input.
#[derive(Debug)]
pub struct FormFlow {
    phase: FormPhase,
}

impl FormFlow {
    pub fn new() -> Self {
        Self {
            phase: FormPhase::Idle,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn advance(&mut self, next: FormPhase) -> Result<(), DomainError> {
        if self.phase.can_transition_to(next) {
            self.phase = next;
            Ok(())
        } else {
            Err(DomainError::Internal(format!(
                "Illegal form transition {:?} -> {:?}",
                self.phase, next
            )))
        }
    }
}

impl Default for FormFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// Client-driven form interaction events, reported before submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormInteraction {
    /// First keystroke in the form
    Started,
    /// A field received focus
    FieldFocused { field: String },
}

/// Service for the contact form flow
pub struct ContactService<N, AC>
where
    N: ContactNotifier,
    AC: AnalyticsClient,
{
    notifier: Arc<N>,
    analytics: Arc<AC>,
}

impl<N, AC> ContactService<N, AC>
where
    N: ContactNotifier,
    AC: AnalyticsClient,
{
    pub fn new(notifier: Arc<N>, analytics: Arc<AC>) -> Self {
        Self {
            notifier,
            analytics,
        }
    }

    /// Record a pre-submit interaction (form start, field focus)
    pub async fn track_interaction(&self, interaction: FormInteraction) {
        let event = match interaction {
            FormInteraction::Started => AnalyticsEvent::FormStarted {
                timestamp: Utc::now(),
            },
            FormInteraction::FieldFocused { field } => AnalyticsEvent::FieldFocused {
                field,
                timestamp: Utc::now(),
            },
        };
        if let Err(e) = self.analytics.track(event).await {
            tracing::warn!("Analytics dispatch failed: {}", e);
        }
    }

    /// Validate and deliver one submission.
    ///
    /// On validation failure the caller keeps the entered values and gets
    /// field errors back. On delivery failure the error maps to a generic
    /// connection message unless the notifier supplied one.
    pub async fn submit(&self, submission: ContactSubmission) -> Result<(), AppError> {
        let mut flow = FormFlow::new();
        flow.advance(FormPhase::Validating)?;

        let errors = submission.validate();
        if !errors.is_empty() {
            self.track_failure("validation").await;
            // Back to editable; entered values are the caller's to keep.
            flow.advance(FormPhase::Idle)?;
            return Err(AppError::Invalid(errors));
        }

        flow.advance(FormPhase::Submitting)?;

        match self.notifier.deliver(&submission).await {
            Ok(()) => {
                flow.advance(FormPhase::Succeeded)?;
                let event = AnalyticsEvent::FormSubmitted {
                    project: submission.project.clone(),
                    budget: submission.budget.clone(),
                    timestamp: Utc::now(),
                };
                if let Err(e) = self.analytics.track(event).await {
                    tracing::warn!("Analytics dispatch failed: {}", e);
                }
                Ok(())
            }
            Err(e) => {
                flow.advance(FormPhase::Failed)?;
                self.track_failure(e.category()).await;
                Err(AppError::Notify(e))
            }
        }
    }

    async fn track_failure(&self, category: &str) {
        let event = AnalyticsEvent::FormFailed {
            category: category.to_string(),
            timestamp: Utc::now(),
        };
        if let Err(e) = self.analytics.track(event).await {
            tracing::warn!("Analytics dispatch failed: {}", e);
        }
    }
}
