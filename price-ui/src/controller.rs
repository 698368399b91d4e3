//! The prediction form controller.
//!
//! Owns the editable draft and the submission [`Outcome`], and drives a
//! [`PricePredictor`]. Transitions are plain methods so the whole lifecycle
//! can be exercised without any UI:
//!
//! ```text
//! Idle ──submit──▶ Pending ──ok──▶ Success
//!                     │  └──err──▶ Failure
//!                     └──cancel──▶ Idle
//! Success | Failure ──submit──▶ Pending
//! ```

use price_core::{PredictionError, PredictionRequest, PricePredictor};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    models::{Field, RequestDraft},
    outcome::Outcome,
    utils::FieldError,
};

/// Why [`FormController::begin_submit`] did not start a submission.
/// The controller state is unchanged in both cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("A prediction is already in progress")]
    InFlight,

    #[error("Please fix the form: {}", join_errors(.0))]
    Invalid(Vec<FieldError>),
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A started submission: the snapshot sent to the predictor and the id its
/// completion must be reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: u64,
    pub request: PredictionRequest,
}

#[derive(Debug, Clone, Default)]
pub struct FormController {
    draft: RequestDraft,
    outcome: Outcome,
    in_flight: Option<Submission>,
    last_request: Option<PredictionRequest>,
    next_id: u64,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(draft: RequestDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &RequestDraft {
        &self.draft
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The request behind the current [`Outcome::Success`], if any.
    pub fn last_request(&self) -> Option<&PredictionRequest> {
        self.last_request.as_ref()
    }

    /// Replaces one draft field. Allowed while a request is in flight; the
    /// in-flight request keeps the values it was submitted with.
    pub fn update_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) {
        let value = value.into();
        debug!(field = field.name(), pending = self.outcome.is_pending(), "field updated");
        self.draft.set(field, value);
    }

    /// Snapshots the draft and enters [`Outcome::Pending`].
    ///
    /// The previous result or error is cleared immediately.
    ///
    /// # Errors
    /// * [`SubmitRejected::InFlight`] while a request is pending.
    /// * [`SubmitRejected::Invalid`] when the draft fails the form's input
    ///   constraints.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitRejected> {
        if !self.outcome.can_submit() {
            debug!("submit ignored: prediction already in flight");
            return Err(SubmitRejected::InFlight);
        }

        let request = self.draft.validate_for_submit().map_err(|errors| {
            warn!(count = errors.len(), "cannot submit form due to validation errors");
            SubmitRejected::Invalid(errors)
        })?;

        self.next_id += 1;
        let submission = Submission {
            id: self.next_id,
            request,
        };

        info!(id = submission.id, "prediction submitted");
        self.outcome = Outcome::Pending;
        self.last_request = None;
        self.in_flight = Some(submission.clone());
        Ok(submission)
    }

    /// Applies the result of submission `id`.
    ///
    /// Returns `false` (and changes nothing) when `id` is not the submission
    /// currently in flight, e.g. because it was cancelled.
    pub fn complete(
        &mut self,
        id: u64,
        result: Result<Decimal, PredictionError>,
    ) -> bool {
        let Some(submission) = self.in_flight.take_if(|s| s.id == id) else {
            debug!(id, "ignoring stale prediction result");
            return false;
        };

        match &result {
            Ok(amount) => info!(id, %amount, "prediction succeeded"),
            Err(error) => warn!(id, %error, "prediction failed"),
        }

        self.outcome = Outcome::from_result(result);
        if self.outcome.result().is_some() {
            self.last_request = Some(submission.request);
        }
        true
    }

    /// Abandons the in-flight submission and returns to [`Outcome::Idle`].
    ///
    /// A late completion for the abandoned submission is ignored. Returns
    /// `false` when nothing was pending.
    pub fn cancel(&mut self) -> bool {
        match self.in_flight.take() {
            Some(submission) => {
                info!(id = submission.id, "prediction cancelled");
                self.outcome = Outcome::Idle;
                true
            }
            None => false,
        }
    }

    /// Submits the draft and waits for the predictor.
    ///
    /// # Errors
    /// See [`FormController::begin_submit`]; no request is sent when it rejects.
    pub async fn submit(
        &mut self,
        predictor: &dyn PricePredictor,
    ) -> Result<&Outcome, SubmitRejected> {
        let submission = self.begin_submit()?;
        let result = predictor.predict(&submission.request).await;
        self.complete(submission.id, result);
        Ok(&self.outcome)
    }
}
