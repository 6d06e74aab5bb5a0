//! Error taxonomy for user-facing actions.
//!
//! Every variant converts to an inline message via `Display`; nothing
//! here is fatal to the process and nothing retries automatically — the
//! user re-triggers the action explicitly.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter email and password")]
    MissingCredentials,
    #[error("Please enter a valid email address")]
    InvalidCredentials,
    #[error("Login failed")]
    LoginFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("Please select a payment method")]
    MissingPaymentMethod,
    #[error("Payment failed")]
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Profile submission failed: {0}")]
    Rejected(String),
}
