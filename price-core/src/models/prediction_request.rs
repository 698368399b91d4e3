use std::fmt;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use super::FuelType;

/// Earliest manufacturing year the form accepts.
pub const MIN_MODEL_YEAR: i32 = 1990;

/// The latest manufacturing year the form accepts.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Vehicle attributes submitted to the prediction service.
///
/// Field names match the JSON body the service expects:
/// `{"year": 2020, "km_driven": 15000, "fuel": "Petrol", "company": "Hyundai"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub year: i32,
    pub km_driven: u64,
    pub fuel: FuelType,
    pub company: String,
}

impl fmt::Display for PredictionRequest {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {} km)",
            self.year, self.company, self.fuel, self.km_driven
        )
    }
}
