use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ConfigurationError;
use crate::tariff::{Origin, OriginParseError};

/// Flat per-shipment fees in dollars, independent of order value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeEntry {
    #[serde(default)]
    pub hmf: f64,
    #[serde(default)]
    pub mpf: f64,
}

impl FeeEntry {
    pub fn new(hmf: f64, mpf: f64) -> Self {
        Self { hmf, mpf }
    }
}

/// Fees per origin. Origins without an entry read as zero fees.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeeRegistry {
    entries: BTreeMap<Origin, FeeEntry>,
}

impl FeeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: &BTreeMap<String, FeeEntry>) -> Result<Self, ConfigurationError> {
        let mut registry = Self::new();
        for (key, entry) in raw {
            let origin = Origin::from_str(key)
                .map_err(|_| ConfigurationError::UnknownOrigin(key.clone()))?;
            registry.set(origin, *entry);
        }
        Ok(registry)
    }

    pub fn with_fees(mut self, origin: Origin, hmf: f64, mpf: f64) -> Self {
        self.set(origin, FeeEntry::new(hmf, mpf));
        self
    }

    pub fn set(&mut self, origin: Origin, entry: FeeEntry) {
        self.entries.insert(origin, entry);
    }

    pub fn set_hmf(&mut self, origin: Origin, hmf: f64) {
        self.entries.entry(origin).or_default().hmf = hmf;
    }

    pub fn set_mpf(&mut self, origin: Origin, mpf: f64) {
        self.entries.entry(origin).or_default().mpf = mpf;
    }

    pub fn get(&self, origin: Origin) -> FeeEntry {
        self.entries.get(&origin).copied().unwrap_or_default()
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FeeParseError {
    #[error("fee assignment must look like ORIGIN=AMOUNT, got {0:?}")]
    Malformed(String),
    #[error(transparent)]
    Origin(#[from] OriginParseError),
    #[error("fee amount is not a number: {0:?}")]
    Amount(String),
}

/// Parses a command-line fee assignment such as `bahrain=50`. Sign is not
/// checked here; negative amounts are rejected by the calculator.
pub fn parse_fee_assignment(raw: &str) -> Result<(Origin, f64), FeeParseError> {
    let Some((origin, amount)) = raw.split_once('=') else {
        return Err(FeeParseError::Malformed(raw.to_string()));
    };
    let origin = Origin::from_str(origin)?;
    let sanitized = amount.trim().trim_start_matches('$').replace(',', "");
    let amount = sanitized
        .parse::<f64>()
        .map_err(|_| FeeParseError::Amount(amount.trim().to_string()))?;
    Ok((origin, amount))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{parse_fee_assignment, FeeEntry, FeeParseError, FeeRegistry};
    use crate::tariff::Origin;

    #[test]
    fn unset_origin_defaults_to_zero() {
        let registry = FeeRegistry::new().with_fees(Origin::Bahrain, 50.0, 25.0);
        assert_eq!(registry.get(Origin::Bahrain), FeeEntry::new(50.0, 25.0));
        assert_eq!(registry.get(Origin::China), FeeEntry::default());
    }

    #[test]
    fn partial_updates_keep_other_component() {
        let mut registry = FeeRegistry::new();
        registry.set_hmf(Origin::Poland, 12.0);
        registry.set_mpf(Origin::Poland, 30.0);
        assert_eq!(registry.get(Origin::Poland), FeeEntry::new(12.0, 30.0));
    }

    #[test]
    fn parses_fee_assignments() {
        assert_eq!(parse_fee_assignment("bahrain=50"), Ok((Origin::Bahrain, 50.0)));
        assert_eq!(parse_fee_assignment("MX = $1,250.5"), Ok((Origin::Mexico, 1250.5)));
        assert_eq!(parse_fee_assignment("china=-3"), Ok((Origin::China, -3.0)));
        assert!(matches!(
            parse_fee_assignment("china"),
            Err(FeeParseError::Malformed(_))
        ));
        assert!(matches!(
            parse_fee_assignment("mars=1"),
            Err(FeeParseError::Origin(_))
        ));
        assert!(matches!(
            parse_fee_assignment("china=lots"),
            Err(FeeParseError::Amount(_))
        ));
    }

    #[test]
    fn builds_from_config_keys() {
        let raw = BTreeMap::from([("poland".to_string(), FeeEntry::new(1.0, 2.0))]);
        let registry = FeeRegistry::from_raw(&raw).expect("valid keys");
        assert_eq!(registry.get(Origin::Poland), FeeEntry::new(1.0, 2.0));
    }
}
