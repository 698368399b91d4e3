use thiserror::Error;

/// Why a form field could not be turned into a request value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be a whole number, got '{input}'")]
    NotANumber { field: &'static str, input: String },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    #[error("{field} must be at least {min}")]
    BelowMinimum { field: &'static str, min: i64 },

    #[error("{field} must be one of: {options}")]
    NotAnOption {
        field: &'static str,
        options: String,
    },
}

/// Normalizes numeric input: trims whitespace and removes commas (thousands separator).
fn normalize_number_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a raw input value into a whole number.
///
/// Handles comma as thousands separator (e.g. `"15,000"`).
/// Empty or whitespace-only input is reported as missing rather than
/// silently becoming zero.
pub fn parse_whole_number(
    field: &'static str,
    s: &str,
) -> Result<i64, FieldError> {
    let normalized = normalize_number_input(s);
    if normalized.is_empty() {
        return Err(FieldError::Missing { field });
    }
    normalized.parse().map_err(|e| {
        tracing::debug!(field, input = %s, "invalid whole number: {}", e);
        FieldError::NotANumber {
            field,
            input: s.trim().to_string(),
        }
    })
}
