//! Plain-text rendering of the form and its outcome.

use price_core::{
    FuelType, KNOWN_MANUFACTURERS, MIN_MODEL_YEAR, PredictionRequest, current_year,
    format::{format_inr, group_thousands},
};

use crate::{
    controller::FormController,
    models::{Field, RequestDraft},
    outcome::Outcome,
};

pub const TITLE: &str = "Car Price Predictor";

/// One line per input: label, current value and the accepted values.
pub fn render_form(draft: &RequestDraft) -> String {
    Field::all()
        .iter()
        .map(|field| {
            let value = draft.get(*field);
            let value = if value.is_empty() { "—" } else { value };
            format!("{:>20}: {:<12} [{}]", field.label(), value, field_hint(*field))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn field_hint(field: Field) -> String {
    match field {
        Field::Company => KNOWN_MANUFACTURERS.join(", "),
        Field::Year => format!("{MIN_MODEL_YEAR}-{}", current_year()),
        Field::KmDriven => "0 or more".to_string(),
        Field::Fuel => FuelType::all()
            .iter()
            .map(FuelType::as_str)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// The status area below the form.
///
/// `request` is the submission behind a successful outcome and feeds the
/// details line; it is ignored for every other outcome.
pub fn render_outcome(
    outcome: &Outcome,
    request: Option<&PredictionRequest>,
) -> String {
    match outcome {
        Outcome::Idle => "Fill in the form and submit to get an estimate.".to_string(),
        Outcome::Pending => "Predicting...".to_string(),
        Outcome::Failure(message) => format!("Error: {message}"),
        Outcome::Success(amount) => {
            let mut card = format!("Predicted Price: {}", format_inr(*amount));
            if let Some(request) = request {
                card.push('\n');
                card.push_str(&result_details(request));
            }
            card
        }
    }
}

/// Convenience wrapper over [`render_outcome`] for a controller.
pub fn render_status(controller: &FormController) -> String {
    render_outcome(controller.outcome(), controller.last_request())
}

/// `"Based on 2020 Hyundai with 15,000 km"`.
pub fn result_details(request: &PredictionRequest) -> String {
    format!(
        "Based on {} {} with {} km",
        request.year,
        request.company,
        group_thousands(request.km_driven)
    )
}
