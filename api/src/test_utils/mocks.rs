//! Mock implementations of port traits

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::ports::MailService;
use crate::error::MailError;

// ============================================================================
// Recording Mail Service
// ============================================================================

/// Keeps every sent `(subject, message)` pair
#[derive(Default)]
pub struct RecordingMailService {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingMailService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailService for RecordingMailService {
    async fn send(&self, subject: &str, message: &str) -> Result<(), MailError> {
        self.sent
            .lock()
            .unwrap()
            .push((subject.to_string(), message.to_string()));
        Ok(())
    }
}

// ============================================================================
// Failing Mail Service
// ============================================================================

/// Rejects every message as if the relay were down
pub struct FailingMailService;

#[async_trait]
impl MailService for FailingMailService {
    async fn send(&self, _subject: &str, _message: &str) -> Result<(), MailError> {
        Err(MailError::Api {
            status: 503,
            message: "mail relay unavailable".to_string(),
        })
    }
}
