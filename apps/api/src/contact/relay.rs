//! Core of the Notification Relay: format one email, hand it to the provider.

use crate::errors::AppError;
use crate::mailer::{EmailSender, OutboundEmail};

/// Fixed envelope addresses. The contact form never chooses where mail goes;
/// the visitor's address only appears inside the body.
pub const FROM_ADDRESS: &str = "onboarding@resend.dev";
pub const TO_ADDRESS: &str = "contact@arjunmehta.dev";

/// Sends one notification email for a contact-form submission.
///
/// No field validation: name, email, and message are interpolated as-is into
/// the subject and body. Exactly one send per call, never retried, so
/// duplicate submissions produce duplicate emails.
pub async fn notify(
    name: &str,
    email: &str,
    message: &str,
    mailer: &dyn EmailSender,
) -> Result<(), AppError> {
    let outbound = OutboundEmail {
        from: FROM_ADDRESS.to_string(),
        to: TO_ADDRESS.to_string(),
        subject: format!("Message from {name}"),
        text: format!("From: {email}\n\n{message}"),
    };

    mailer.send(&outbound).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeMailer {
        fail_with: Option<String>,
        sent: Mutex<Vec<OutboundEmail>>,
    }

    #[async_trait]
    impl EmailSender for FakeMailer {
        async fn send(&self, email: &OutboundEmail) -> Result<(), AppError> {
            self.sent.lock().unwrap().push(email.clone());
            match &self.fail_with {
                Some(message) => Err(AppError::Delivery(message.clone())),
                None => Ok(()),
            }
        }
    }

    #[tokio::test]
    async fn test_notify_formats_subject_and_body() {
        let mailer = FakeMailer::default();

        notify("Ann", "ann@example.com", "hi", &mailer).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Message from Ann");
        assert!(sent[0].text.starts_with("From: ann@example.com"));
        assert!(sent[0].text.ends_with("\n\nhi"));
    }

    #[tokio::test]
    async fn test_notify_uses_fixed_envelope_addresses() {
        let mailer = FakeMailer::default();

        notify("Ann", "ann@example.com", "hi", &mailer).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent[0].from, FROM_ADDRESS);
        assert_eq!(sent[0].to, TO_ADDRESS);
    }

    #[tokio::test]
    async fn test_notify_interpolates_empty_fields_without_validation() {
        let mailer = FakeMailer::default();

        notify("", "", "", &mailer).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent[0].subject, "Message from ");
        assert_eq!(sent[0].text, "From: \n\n");
    }

    #[tokio::test]
    async fn test_delivery_failure_propagates_after_single_send() {
        let mailer = FakeMailer {
            fail_with: Some("quota exceeded".to_string()),
            ..Default::default()
        };

        let err = notify("Ann", "ann@example.com", "hi", &mailer).await.unwrap_err();
        assert!(matches!(err, AppError::Delivery(m) if m == "quota exceeded"));
        assert_eq!(mailer.sent.lock().unwrap().len(), 1);
    }
}
