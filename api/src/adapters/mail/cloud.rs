//! Cloud mail service
//!
//! Delivers notifications by POSTing them to an external mail endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::domain::ports::MailService;
use crate::error::MailError;

pub struct CloudMailService {
    http: Client,
    endpoint: String,
    api_key: Option<String>,
    mail_to: String,
    mail_from: String,
}

#[derive(Serialize)]
struct SendMailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    message: &'a str,
}

impl CloudMailService {
    /// Every request, including connect, gives up after `timeout`.
    pub fn new(
        endpoint: String,
        api_key: Option<String>,
        mail_to: String,
        mail_from: String,
        timeout: Duration,
    ) -> Result<Self, MailError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint,
            api_key,
            mail_to,
            mail_from,
        })
    }
}

#[async_trait]
impl MailService for CloudMailService {
    async fn send(&self, subject: &str, message: &str) -> Result<(), MailError> {
        let mut request = self.http.post(&self.endpoint).json(&SendMailRequest {
            from: &self.mail_from,
            to: &self.mail_to,
            subject,
            message,
        });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            tracing::debug!(to = %self.mail_to, subject, "Mail sent with CloudMailService");
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(MailError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
