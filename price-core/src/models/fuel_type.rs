use std::fmt;

use serde::{Deserialize, Serialize};

/// Fuel types offered by the prediction form.
///
/// Serialized with the exact spelling the prediction service was trained on
/// (`"Petrol"`, `"Diesel"`, `"CNG"`, `"Electric"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FuelType {
    #[default]
    Petrol,
    Diesel,
    #[serde(rename = "CNG")]
    Cng,
    Electric,
}

impl FuelType {
    pub fn all() -> &'static [FuelType] {
        &[
            FuelType::Petrol,
            FuelType::Diesel,
            FuelType::Cng,
            FuelType::Electric,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
            Self::Cng => "CNG",
            Self::Electric => "Electric",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|fuel| fuel.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for FuelType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_is_petrol() {
        assert_eq!(FuelType::default(), FuelType::Petrol);
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(FuelType::parse("cng"), Some(FuelType::Cng));
        assert_eq!(FuelType::parse("  Diesel "), Some(FuelType::Diesel));
        assert_eq!(FuelType::parse("ELECTRIC"), Some(FuelType::Electric));
    }

    #[test]
    fn parse_rejects_unknown_fuel() {
        assert_eq!(FuelType::parse("Hydrogen"), None);
        assert_eq!(FuelType::parse(""), None);
    }

    #[test]
    fn serializes_with_service_spelling() {
        let names: Vec<String> = FuelType::all()
            .iter()
            .map(|fuel| serde_json::to_string(fuel).unwrap())
            .collect();

        assert_eq!(
            names,
            vec!["\"Petrol\"", "\"Diesel\"", "\"CNG\"", "\"Electric\""]
        );
    }
}
