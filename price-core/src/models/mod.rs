mod fuel_type;
mod manufacturer;
mod prediction_request;
mod prediction_response;

pub use fuel_type::FuelType;
pub use manufacturer::{KNOWN_MANUFACTURERS, canonical_manufacturer};
pub use prediction_request::{MIN_MODEL_YEAR, PredictionRequest, current_year};
pub use prediction_response::{PredictionResponse, ResponseShape};
