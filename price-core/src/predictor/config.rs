/// Environment variable naming the prediction endpoint.
pub const ENDPOINT_ENV_VAR: &str = "CAR_PRICE_API_URL";

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

/// Connection settings for a [`PricePredictor`](super::PricePredictor).
///
/// Resolved once at startup and handed to the predictor's constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictorConfig {
    /// Full URL requests are POSTed to.
    pub endpoint: String,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl PredictorConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Startup precedence: command-line flag, then the environment
    /// ([`env_endpoint`]), then the settings file, then [`DEFAULT_ENDPOINT`].
    pub fn resolve(
        flag: Option<String>,
        env: Option<String>,
        settings_file: Option<String>,
    ) -> Self {
        Self::first_configured([flag, env, settings_file])
    }

    /// Uses the first candidate that is set and non-blank, in order.
    ///
    /// ```
    /// use price_core::PredictorConfig;
    ///
    /// let cfg = PredictorConfig::first_configured([None, Some(String::new())]);
    /// assert_eq!(cfg, PredictorConfig::default());
    ///
    /// let cfg = PredictorConfig::first_configured([None, Some("http://svc/predict".into())]);
    /// assert_eq!(cfg.endpoint, "http://svc/predict");
    /// ```
    pub fn first_configured<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        candidates
            .into_iter()
            .flatten()
            .map(|endpoint| endpoint.trim().to_string())
            .find(|endpoint| !endpoint.is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }
}

/// The raw value of [`ENDPOINT_ENV_VAR`], if set.
pub fn env_endpoint() -> Option<String> {
    std::env::var(ENDPOINT_ENV_VAR).ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_targets_local_service() {
        assert_eq!(
            PredictorConfig::default().endpoint,
            "http://127.0.0.1:5000/predict"
        );
    }

    #[test]
    fn no_candidates_falls_back_to_default() {
        let cfg = PredictorConfig::first_configured([None, None]);

        assert_eq!(cfg, PredictorConfig::default());
    }

    #[test]
    fn blank_candidates_are_treated_as_unset() {
        let cfg = PredictorConfig::first_configured([
            Some("   ".to_string()),
            Some("http://fallback/predict".to_string()),
        ]);

        assert_eq!(cfg.endpoint, "http://fallback/predict");
    }

    #[test]
    fn earlier_candidates_win() {
        let cfg = PredictorConfig::first_configured([
            Some("http://cli/predict".to_string()),
            Some("http://env/predict".to_string()),
        ]);

        assert_eq!(cfg.endpoint, "http://cli/predict");
    }

    #[test]
    fn candidates_are_trimmed() {
        let cfg = PredictorConfig::first_configured([Some(" http://svc/predict\n".to_string())]);

        assert_eq!(cfg.endpoint, "http://svc/predict");
    }

    #[test]
    fn flag_overrides_environment_and_settings() {
        let cfg = PredictorConfig::resolve(
            Some("http://flag/predict".to_string()),
            Some("http://env/predict".to_string()),
            Some("http://file/predict".to_string()),
        );

        assert_eq!(cfg.endpoint, "http://flag/predict");
    }

    #[test]
    fn environment_overrides_settings() {
        let cfg = PredictorConfig::resolve(
            None,
            Some("http://env/predict".to_string()),
            Some("http://file/predict".to_string()),
        );

        assert_eq!(cfg.endpoint, "http://env/predict");
    }

    #[test]
    fn empty_environment_falls_through_to_settings() {
        let cfg = PredictorConfig::resolve(
            None,
            Some(String::new()),
            Some("http://file/predict".to_string()),
        );

        assert_eq!(cfg.endpoint, "http://file/predict");
    }

    #[test]
    fn nothing_configured_resolves_to_default() {
        assert_eq!(
            PredictorConfig::resolve(None, None, None),
            PredictorConfig::default()
        );
    }
}
