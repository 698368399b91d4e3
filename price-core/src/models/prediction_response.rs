//! Response shapes returned by prediction services.
//!
//! Upstream services disagree on where they put the estimate: some answer
//! `{"prediction": 450000}`, others `{"price": 450000}`. The amount is taken
//! from `prediction` when it is present and truthy, then from `price`, and
//! defaults to zero when neither qualifies.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::{Number, Value};

use crate::predictor::PredictionError;

/// The two candidate amount fields of a successful response body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionResponse {
    pub prediction: Option<Value>,
    pub price: Option<Value>,
}

/// Which field an amount was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Prediction(Decimal),
    Price(Decimal),
    Neither,
}

impl ResponseShape {
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Prediction(amount) | Self::Price(amount) => *amount,
            Self::Neither => Decimal::ZERO,
        }
    }
}

impl PredictionResponse {
    /// Parses a raw response body.
    ///
    /// # Errors
    /// [`PredictionError::MalformedResponse`] when the body is not JSON or is
    /// `null`.
    pub fn from_json(body: &str) -> Result<Self, PredictionError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| PredictionError::MalformedResponse(e.to_string()))?;
        Self::from_value(value)
    }

    /// Picks the candidate fields out of a decoded body.
    ///
    /// Non-object bodies (numbers, strings, arrays) carry neither field and
    /// therefore resolve to zero; a `null` body has no fields to look up at
    /// all and is rejected.
    pub fn from_value(value: Value) -> Result<Self, PredictionError> {
        match value {
            Value::Null => Err(PredictionError::MalformedResponse(
                "response body is null".to_string(),
            )),
            Value::Object(mut fields) => Ok(Self {
                prediction: fields.remove("prediction"),
                price: fields.remove("price"),
            }),
            _ => Ok(Self::default()),
        }
    }

    /// Classifies the response by the first truthy candidate field.
    ///
    /// # Errors
    /// [`PredictionError::MalformedResponse`] when the selected field is truthy
    /// but not a number (or a numeric string).
    pub fn shape(&self) -> Result<ResponseShape, PredictionError> {
        if let Some(value) = self.prediction.as_ref().filter(|v| is_truthy(v)) {
            return to_amount("prediction", value).map(ResponseShape::Prediction);
        }
        if let Some(value) = self.price.as_ref().filter(|v| is_truthy(v)) {
            return to_amount("price", value).map(ResponseShape::Price);
        }
        Ok(ResponseShape::Neither)
    }

    /// The predicted amount, applying the `prediction` → `price` → `0` chain.
    pub fn amount(&self) -> Result<Decimal, PredictionError> {
        self.shape().map(|shape| shape.amount())
    }
}

/// Loose truthiness: `null`, `false`, `0` and `""` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn to_amount(
    field: &str,
    value: &Value,
) -> Result<Decimal, PredictionError> {
    let amount = match value {
        Value::Number(n) => number_to_decimal(n),
        Value::String(s) => s.trim().parse::<Decimal>().ok(),
        _ => None,
    };

    amount.ok_or_else(|| {
        PredictionError::MalformedResponse(format!("`{field}` is not a numeric amount: {value}"))
    })
}

fn number_to_decimal(n: &Number) -> Option<Decimal> {
    if let Some(i) = n.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(Decimal::from(u));
    }
    n.as_f64().and_then(Decimal::from_f64)
}
