// Notification Relay — the contact form.
// Formats one email per submission and forwards it to the mail capability.
// All provider calls go through mailer — no direct Resend calls here.

pub mod handlers;
pub mod relay;
