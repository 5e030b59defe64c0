//! Contact-form delivery through the EmailJS REST API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::EmailJsConfig;
use crate::error::CalcError;

pub const FAILURE_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again later or email us directly at hello@goodloancalculators.com";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn validate(&self) -> Result<(), CalcError> {
        if self.name.trim().is_empty() {
            return Err(CalcError::invalid("name must not be empty"));
        }
        let email = self.email.trim();
        let valid_email = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !valid_email {
            return Err(CalcError::invalid("email must be a valid address"));
        }
        if self.message.trim().is_empty() {
            return Err(CalcError::invalid("message must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    Success,
    Error,
}

#[async_trait]
pub trait EmailSender: Send + Sync + 'static {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), CalcError>;
}

pub struct EmailJsClient {
    config: EmailJsConfig,
    client: reqwest::Client,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Self {
        EmailJsClient {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn request_body(&self, submission: &ContactSubmission) -> serde_json::Value {
        json!({
            "service_id": self.config.service_id,
            "template_id": self.config.template_id,
            "user_id": self.config.public_key,
            "template_params": {
                "from_name": submission.name.trim(),
                "email": submission.email.trim(),
                "message": submission.message.trim(),
            }
        })
    }
}

#[async_trait]
impl EmailSender for EmailJsClient {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), CalcError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&self.request_body(submission))
            .send()
            .await
            .map_err(|err| CalcError::Contact(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CalcError::Contact(format!(
                "EmailJS returned {status}: {error_text}"
            )));
        }

        Ok(())
    }
}

/// Sends once; any failure is logged and reported as [`SubmitStatus::Error`].
pub async fn submit(sender: &dyn EmailSender, submission: &ContactSubmission) -> SubmitStatus {
    match sender.send(submission).await {
        Ok(()) => {
            tracing::info!("contact message delivered");
            SubmitStatus::Success
        }
        Err(err) => {
            tracing::error!(error = %err, "error sending contact message");
            SubmitStatus::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct RecordingSender {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl EmailSender for RecordingSender {
        async fn send(&self, _submission: &ContactSubmission) -> Result<(), CalcError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            if self.fail {
                Err(CalcError::Contact("service unavailable".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn sample() -> ContactSubmission {
        ContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "How is PMI estimated?".to_string(),
        }
    }

    #[test]
    fn validation_rejects_blank_fields_and_bad_email() {
        assert!(sample().validate().is_ok());

        let mut blank_name = sample();
        blank_name.name = "  ".to_string();
        assert!(blank_name.validate().is_err());

        let mut bad_email = sample();
        bad_email.email = "jane.example.com".to_string();
        let err = bad_email.validate().expect_err("must reject email");
        assert!(err.to_string().contains("email"));

        let mut no_domain = sample();
        no_domain.email = "jane@".to_string();
        assert!(no_domain.validate().is_err());

        let mut empty_message = sample();
        empty_message.message = String::new();
        assert!(empty_message.validate().is_err());
    }

    #[test]
    fn request_body_carries_credentials_and_template_params() {
        let client = EmailJsClient::new(EmailJsConfig {
            service_id: "service_x".to_string(),
            template_id: "template_y".to_string(),
            public_key: "public_z".to_string(),
            endpoint: "http://127.0.0.1:1/send".to_string(),
        });
        let body = client.request_body(&sample());
        assert_eq!(body["service_id"], "service_x");
        assert_eq!(body["template_id"], "template_y");
        assert_eq!(body["user_id"], "public_z");
        assert_eq!(body["template_params"]["from_name"], "Jane Doe");
        assert_eq!(body["template_params"]["email"], "jane@example.com");
        assert_eq!(body["template_params"]["message"], "How is PMI estimated?");
    }

    #[tokio::test]
    async fn submit_reports_success() {
        let sender = RecordingSender::default();
        let status = submit(&sender, &sample()).await;
        assert_eq!(status, SubmitStatus::Success);
        assert_eq!(sender.calls.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn submit_makes_a_single_attempt_on_failure() {
        let sender = RecordingSender {
            fail: true,
            ..RecordingSender::default()
        };
        let status = submit(&sender, &sample()).await;
        assert_eq!(status, SubmitStatus::Error);
        assert_eq!(sender.calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SubmitStatus::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(serde_json::to_string(&SubmitStatus::Error).unwrap(), "\"error\"");
    }
}
