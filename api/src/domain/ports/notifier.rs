//! Contact delivery port trait

use async_trait::async_trait;

use crate::domain::entities::ContactSubmission;
use crate::error::NotifyError;

/// Port trait for delivering a contact submission to the studio.
/// One attempt per submission; the caller never retries automatically.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), NotifyError>;
}
