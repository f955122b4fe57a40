use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::tariff::{Material, Origin};

/// Numeric input named by a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    OrderValue,
    Hmf(Origin),
    Mpf(Origin),
}

impl Display for InputField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OrderValue => write!(f, "order value"),
            Self::Hmf(origin) => write!(f, "HMF ({origin})"),
            Self::Mpf(origin) => write!(f, "MPF ({origin})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field}: {value} is not a non-negative number")]
pub struct ValidationError {
    pub field: InputField,
    pub value: f64,
}

impl ValidationError {
    /// Rejects negative, NaN and infinite values.
    pub fn check(field: InputField, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value >= 0.0 {
            // folds -0.0 into +0.0
            Ok(value + 0.0)
        } else {
            Err(Self { field, value })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("no duty rate configured for {material} from {origin}")]
    MissingRate { material: Material, origin: Origin },
    #[error("duty rate for {material} from {origin} must be a non-negative number, got {rate}")]
    InvalidRate {
        material: Material,
        origin: Origin,
        rate: f64,
    },
    #[error("unknown material in configuration: {0}")]
    UnknownMaterial(String),
    #[error("unknown origin in configuration: {0}")]
    UnknownOrigin(String),
    #[error("no origins selected for comparison")]
    NoOrigins,
}

/// Failure of a single cost calculation. Bad user input and incomplete
/// configuration stay distinct variants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl CostError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::{InputField, ValidationError};
    use crate::tariff::Origin;

    #[test]
    fn check_accepts_zero_and_positive() {
        assert_eq!(ValidationError::check(InputField::OrderValue, 0.0), Ok(0.0));
        assert_eq!(ValidationError::check(InputField::OrderValue, 12.5), Ok(12.5));
        let folded = ValidationError::check(InputField::OrderValue, -0.0).unwrap();
        assert!(folded.is_sign_positive());
    }

    #[test]
    fn check_rejects_negative_and_non_finite() {
        let err = ValidationError::check(InputField::Hmf(Origin::China), -1.0).unwrap_err();
        assert_eq!(err.field, InputField::Hmf(Origin::China));
        assert_eq!(err.to_string(), "invalid HMF (China): -1 is not a non-negative number");
        assert!(ValidationError::check(InputField::OrderValue, f64::NAN).is_err());
        assert!(ValidationError::check(InputField::OrderValue, f64::INFINITY).is_err());
    }
}
