use std::error::Error;

use async_trait::async_trait;
use price_core::{
    PredictionError, PredictionRequest, PredictionResponse, PricePredictor, PredictorConfig,
};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// [`PricePredictor`] that POSTs the request as JSON to
/// [`PredictorConfig::endpoint`].
///
/// ```rust,no_run
/// use price_core::{PredictorConfig, predictor::config::env_endpoint};
/// use price_http::HttpPredictor;
///
/// let predictor = HttpPredictor::new(PredictorConfig::resolve(None, env_endpoint(), None));
/// ```
#[derive(Debug, Clone)]
pub struct HttpPredictor {
    client: reqwest::Client,
    config: PredictorConfig,
}

impl HttpPredictor {
    pub fn new(config: PredictorConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Reuses an existing client (connection pool, proxy settings).
    pub fn with_client(
        client: reqwest::Client,
        config: PredictorConfig,
    ) -> Self {
        Self { client, config }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl PricePredictor for HttpPredictor {
    /// Sends one request; the body is never logged.
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<Decimal, PredictionError> {
        debug!(endpoint = %self.config.endpoint, "requesting price prediction");

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let description = describe_transport_error(&e);
                warn!(endpoint = %self.config.endpoint, error = %description, "prediction request failed");
                PredictionError::Transport(description)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %self.config.endpoint, %status, "prediction service returned an error status");
            return Err(PredictionError::Service);
        }

        let body = response
            .text()
            .await
            .map_err(|e| PredictionError::Transport(describe_transport_error(&e)))?;

        let amount = PredictionResponse::from_json(&body)?.amount()?;
        debug!(%status, "prediction received");
        Ok(amount)
    }
}

/// Joins `err` and its sources with `": "`.
///
/// reqwest's own message names only the URL; the cause (refused, DNS,
/// timeout) sits further down the chain. Sources that repeat the text
/// already collected are skipped.
fn describe_transport_error(err: &(dyn Error + 'static)) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !description.ends_with(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}
