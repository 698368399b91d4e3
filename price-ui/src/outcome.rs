//! Submission lifecycle state for the prediction form.
//!
//! The outcome is owned by the [`FormController`](crate::FormController) and
//! is never persisted; it only lives until the next submission.

use price_core::PredictionError;
use rust_decimal::Decimal;

/// Shown when a failure carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to predict price";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Nothing submitted yet (or the last submission was cancelled).
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The predicted price.
    Success(Decimal),
    /// A human-readable reason the prediction failed.
    Failure(String),
}

impl Outcome {
    /// Builds a failure, substituting [`FALLBACK_ERROR_MESSAGE`] for a blank message.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Failure(FALLBACK_ERROR_MESSAGE.to_string())
        } else {
            Self::Failure(message)
        }
    }

    pub fn from_result(result: Result<Decimal, PredictionError>) -> Self {
        match result {
            Ok(amount) => Self::Success(amount),
            Err(err) => Self::failure(err.to_string()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Submission is allowed from every state except [`Outcome::Pending`].
    pub fn can_submit(&self) -> bool {
        !self.is_pending()
    }

    pub fn result(&self) -> Option<Decimal> {
        match self {
            Self::Success(amount) => Some(*amount),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn starts_idle() {
        assert_eq!(Outcome::default(), Outcome::Idle);
        assert!(Outcome::default().can_submit());
    }

    #[test]
    fn only_pending_blocks_submission() {
        assert!(!Outcome::Pending.can_submit());
        assert!(Outcome::Success(dec!(1)).can_submit());
        assert!(Outcome::failure("boom").can_submit());
    }

    #[test]
    fn success_exposes_result_only() {
        let outcome = Outcome::from_result(Ok(dec!(450000)));

        assert_eq!(outcome.result(), Some(dec!(450000)));
        assert_eq!(outcome.error(), None);
    }

    #[test]
    fn service_error_message_is_kept() {
        let outcome = Outcome::from_result(Err(PredictionError::Service));

        assert_eq!(
            outcome.error(),
            Some("Failed to predict car price. Please check your API endpoint.")
        );
        assert_eq!(outcome.result(), None);
    }

    #[test]
    fn blank_error_uses_fallback_message() {
        let outcome = Outcome::from_result(Err(PredictionError::Transport(String::new())));

        assert_eq!(outcome, Outcome::Failure("Failed to predict price".to_string()));
    }
}
