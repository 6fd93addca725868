//! Mail service port trait
//!
//! Defines the notification capability used when points of interest are deleted.

use async_trait::async_trait;

use crate::error::MailError;

/// Sends a subject/message notification to the configured recipient
#[async_trait]
pub trait MailService: Send + Sync {
    async fn send(&self, subject: &str, message: &str) -> Result<(), MailError>;
}
