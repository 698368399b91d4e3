pub mod format;
pub mod models;
pub mod predictor;

pub use models::*;
pub use predictor::{PredictionError, PricePredictor, PredictorConfig};
