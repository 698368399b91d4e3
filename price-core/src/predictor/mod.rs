pub mod config;
pub mod error;

pub use config::{DEFAULT_ENDPOINT, ENDPOINT_ENV_VAR, PredictorConfig};
pub use error::{PredictionError, SERVICE_ERROR_MESSAGE};

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::models::PredictionRequest;

/// One request/response exchange with a price-prediction service.
///
/// Implementations hold no state between calls: each invocation issues
/// exactly one outbound request and returns the extracted amount.
#[async_trait]
pub trait PricePredictor: Send + Sync {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<Decimal, PredictionError>;
}
