/// Mailer — the single point of entry for outbound email.
///
/// Wraps the Resend REST API. No other module may call the email provider
/// directly; the notification relay goes through the `EmailSender` trait.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::errors::AppError;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// One fully-addressed email, ready to hand to the provider.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct ResendError {
    message: String,
}

/// The email-sending capability consumed by the notification relay.
/// Carried in `AppState` as `Arc<dyn EmailSender>` so tests substitute fakes.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends exactly one email. No idempotency guarantee — duplicate calls
    /// send duplicate emails.
    async fn send(&self, email: &OutboundEmail) -> Result<(), AppError>;
}

/// Resend-backed email client.
#[derive(Clone)]
pub struct ResendClient {
    client: Client,
    api_key: String,
}

impl ResendClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a single call to the Resend API. One attempt only — delivery
    /// failures surface to the caller rather than being retried.
    pub async fn send_email(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(email)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Resend reports errors as {"statusCode":..., "name":..., "message":...}
            let message = serde_json::from_str::<ResendError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(MailError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Email accepted by provider (subject: {})", email.subject);
        Ok(())
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, email: &OutboundEmail) -> Result<(), AppError> {
        self.send_email(email).await.map_err(|e| match e {
            // Keep the provider's own description; the contact endpoint
            // reports it verbatim in the error payload.
            MailError::Api { message, .. } => AppError::Delivery(message),
            MailError::Http(e) => AppError::Delivery(e.to_string()),
        })
    }
}
