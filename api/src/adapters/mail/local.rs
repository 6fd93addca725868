//! Local mail service
//!
//! Writes notifications to the tracing output instead of delivering them.

use async_trait::async_trait;

use crate::domain::ports::MailService;
use crate::error::MailError;

pub struct LocalMailService {
    mail_to: String,
    mail_from: String,
}

impl LocalMailService {
    pub fn new(mail_to: String, mail_from: String) -> Self {
        Self { mail_to, mail_from }
    }
}

#[async_trait]
impl MailService for LocalMailService {
    async fn send(&self, subject: &str, message: &str) -> Result<(), MailError> {
        tracing::info!(
            from = %self.mail_from,
            to = %self.mail_to,
            subject,
            message,
            "Mail sent with LocalMailService"
        );
        Ok(())
    }
}
