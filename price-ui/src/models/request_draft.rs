use std::{fmt, str::FromStr};

use price_core::{
    FuelType, KNOWN_MANUFACTURERS, MIN_MODEL_YEAR, PredictionRequest, canonical_manufacturer,
    current_year,
};
use thiserror::Error;

use crate::utils::{FieldError, parse_whole_number};

/// The four inputs of the prediction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Company,
    Year,
    KmDriven,
    Fuel,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}'; expected one of: company, year, km_driven, fuel")]
pub struct UnknownField(pub String);

impl Field {
    /// Fields in the order the form shows them.
    pub fn all() -> &'static [Field] {
        &[Field::Company, Field::Year, Field::KmDriven, Field::Fuel]
    }

    /// Name used on the wire and in commands.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Company => "company",
            Field::Year => "year",
            Field::KmDriven => "km_driven",
            Field::Fuel => "fuel",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Company => "Car Company",
            Field::Year => "Manufacturing Year",
            Field::KmDriven => "Kilometers Driven",
            Field::Fuel => "Fuel Type",
        }
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "company" | "manufacturer" => Ok(Field::Company),
            "year" => Ok(Field::Year),
            "km_driven" | "km" | "kms" | "distance" => Ok(Field::KmDriven),
            "fuel" => Ok(Field::Fuel),
            _ => Err(UnknownField(s.trim().to_string())),
        }
    }
}

/// Raw, editable form values.
///
/// Values are kept exactly as typed; they are only parsed when the form is
/// submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDraft {
    pub company: String,
    pub year: String,
    pub km_driven: String,
    pub fuel: String,
}

impl Default for RequestDraft {
    fn default() -> Self {
        Self {
            company: String::new(),
            year: current_year().to_string(),
            km_driven: "0".to_string(),
            fuel: FuelType::default().to_string(),
        }
    }
}

impl RequestDraft {
    pub fn get(
        &self,
        field: Field,
    ) -> &str {
        match field {
            Field::Company => &self.company,
            Field::Year => &self.year,
            Field::KmDriven => &self.km_driven,
            Field::Fuel => &self.fuel,
        }
    }

    /// Replaces one field; no other field is touched.
    pub fn set(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) {
        let slot = match field {
            Field::Company => &mut self.company,
            Field::Year => &mut self.year,
            Field::KmDriven => &mut self.km_driven,
            Field::Fuel => &mut self.fuel,
        };
        *slot = value.into();
    }

    /// Applies the form's input constraints and builds the request.
    ///
    /// Rules:
    /// - company is required and must be one of the offered manufacturers
    /// - year is a whole number between 1990 and the current year
    /// - kilometers driven is a whole number, zero or more
    /// - fuel must be one of the offered fuel types
    pub fn validate_for_submit(&self) -> Result<PredictionRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        let company = self.parse_company().map_err(|e| errors.push(e)).ok();
        let year = self.parse_year().map_err(|e| errors.push(e)).ok();
        let km_driven = self.parse_km_driven().map_err(|e| errors.push(e)).ok();
        let fuel = self.parse_fuel().map_err(|e| errors.push(e)).ok();

        match (company, year, km_driven, fuel) {
            (Some(company), Some(year), Some(km_driven), Some(fuel)) => Ok(PredictionRequest {
                year,
                km_driven,
                fuel,
                company: company.to_string(),
            }),
            _ => Err(errors),
        }
    }

    fn parse_company(&self) -> Result<&'static str, FieldError> {
        let field = Field::Company.label();
        if self.company.trim().is_empty() {
            return Err(FieldError::Missing { field });
        }
        canonical_manufacturer(&self.company).ok_or_else(|| FieldError::NotAnOption {
            field,
            options: KNOWN_MANUFACTURERS.join(", "),
        })
    }

    fn parse_year(&self) -> Result<i32, FieldError> {
        let field = Field::Year.label();
        let max = current_year();
        let year = parse_whole_number(field, &self.year)?;
        i32::try_from(year)
            .ok()
            .filter(|y| (MIN_MODEL_YEAR..=max).contains(y))
            .ok_or(FieldError::OutOfRange {
                field,
                min: i64::from(MIN_MODEL_YEAR),
                max: i64::from(max),
            })
    }

    fn parse_km_driven(&self) -> Result<u64, FieldError> {
        let field = Field::KmDriven.label();
        let km = parse_whole_number(field, &self.km_driven)?;
        u64::try_from(km).map_err(|_| FieldError::BelowMinimum { field, min: 0 })
    }

    fn parse_fuel(&self) -> Result<FuelType, FieldError> {
        let field = Field::Fuel.label();
        if self.fuel.trim().is_empty() {
            return Err(FieldError::Missing { field });
        }
        FuelType::parse(&self.fuel).ok_or_else(|| FieldError::NotAnOption {
            field,
            options: FuelType::all()
                .iter()
                .map(FuelType::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

impl fmt::Display for RequestDraft {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Company:   {}", self.company)?;
        writeln!(f, "Year:      {}", self.year)?;
        writeln!(f, "Km driven: {}", self.km_driven)?;
        write!(f, "Fuel:      {}", self.fuel)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled() -> RequestDraft {
        RequestDraft {
            company: "Hyundai".to_string(),
            year: "2020".to_string(),
            km_driven: "15000".to_string(),
            fuel: "Petrol".to_string(),
        }
    }

    #[test]
    fn default_draft_matches_initial_form() {
        let draft = RequestDraft::default();

        assert_eq!(draft.company, "");
        assert_eq!(draft.year, current_year().to_string());
        assert_eq!(draft.km_driven, "0");
        assert_eq!(draft.fuel, "Petrol");
    }

    #[test]
    fn default_draft_needs_a_company() {
        let errors = RequestDraft::default().validate_for_submit().unwrap_err();

        assert_eq!(
            errors,
            vec![FieldError::Missing {
                field: "Car Company"
            }]
        );
    }

    #[test]
    fn set_replaces_only_one_field() {
        let mut draft = filled();
        draft.set(Field::KmDriven, "42000");

        assert_eq!(draft.km_driven, "42000");
        assert_eq!(draft.year, "2020");
        assert_eq!(draft.get(Field::KmDriven), "42000");
    }

    #[test]
    fn valid_draft_builds_request() {
        let request = filled().validate_for_submit().unwrap();

        assert_eq!(
            request,
            PredictionRequest {
                year: 2020,
                km_driven: 15000,
                fuel: FuelType::Petrol,
                company: "Hyundai".to_string(),
            }
        );
    }

    #[test]
    fn option_inputs_are_normalised() {
        let mut draft = filled();
        draft.set(Field::Company, "maruti");
        draft.set(Field::Fuel, "cng");

        let request = draft.validate_for_submit().unwrap();

        assert_eq!(request.company, "Maruti");
        assert_eq!(request.fuel, FuelType::Cng);
    }

    #[test]
    fn year_bounds_are_inclusive() {
        let mut draft = filled();
        draft.set(Field::Year, "1990");
        assert!(draft.validate_for_submit().is_ok());

        draft.set(Field::Year, current_year().to_string());
        assert!(draft.validate_for_submit().is_ok());
    }

    #[test]
    fn year_outside_range_is_rejected() {
        let mut draft = filled();
        draft.set(Field::Year, "1989");

        assert!(matches!(
            draft.validate_for_submit().unwrap_err().as_slice(),
            [FieldError::OutOfRange { min: 1990, .. }]
        ));

        draft.set(Field::Year, (current_year() + 1).to_string());
        assert!(draft.validate_for_submit().is_err());
    }

    #[test]
    fn unparseable_numbers_are_rejected_not_coerced() {
        let mut draft = filled();
        draft.set(Field::Year, "twenty");
        draft.set(Field::KmDriven, "");

        let errors = draft.validate_for_submit().unwrap_err();

        assert_eq!(
            errors,
            vec![
                FieldError::NotANumber {
                    field: "Manufacturing Year",
                    input: "twenty".to_string()
                },
                FieldError::Missing {
                    field: "Kilometers Driven"
                },
            ]
        );
    }

    #[test]
    fn negative_distance_is_rejected() {
        let mut draft = filled();
        draft.set(Field::KmDriven, "-1");

        assert_eq!(
            draft.validate_for_submit().unwrap_err(),
            vec![FieldError::BelowMinimum {
                field: "Kilometers Driven",
                min: 0
            }]
        );
    }

    #[test]
    fn unknown_options_are_rejected() {
        let mut draft = filled();
        draft.set(Field::Company, "Tesla");
        draft.set(Field::Fuel, "Hydrogen");

        let errors = draft.validate_for_submit().unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(
            errors
                .iter()
                .all(|e| matches!(e, FieldError::NotAnOption { .. }))
        );
    }

    #[test]
    fn field_names_parse_with_aliases() {
        assert_eq!("company".parse::<Field>(), Ok(Field::Company));
        assert_eq!("KM".parse::<Field>(), Ok(Field::KmDriven));
        assert_eq!("km_driven".parse::<Field>(), Ok(Field::KmDriven));
        assert_eq!(
            "colour".parse::<Field>(),
            Err(UnknownField("colour".to_string()))
        );
    }
}
