use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConfigurationError;
use crate::tariff::{Material, Origin};

/// Duty rates as fractions of order value, keyed by material then origin.
/// Built once and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RateTable {
    rates: BTreeMap<Material, BTreeMap<Origin, f64>>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in tariff schedule.
    pub fn defaults() -> Self {
        let schedule: [(Material, [f64; 4]); 2] = [
            (Material::Upvc, [0.10, 0.748, 0.4724, 0.5030]),
            (Material::Aluminum, [0.10, 0.752, 0.4765, 0.5070]),
        ];
        let mut rates = BTreeMap::new();
        for (material, row) in schedule {
            let by_origin = Origin::ALL.into_iter().zip(row).collect();
            rates.insert(material, by_origin);
        }
        Self { rates }
    }

    pub fn with_rate(
        mut self,
        material: Material,
        origin: Origin,
        rate: f64,
    ) -> Result<Self, ConfigurationError> {
        if !(rate.is_finite() && rate >= 0.0) {
            return Err(ConfigurationError::InvalidRate {
                material,
                origin,
                rate,
            });
        }
        self.rates.entry(material).or_default().insert(origin, rate);
        Ok(self)
    }

    /// Parses the string-keyed form used in TOML configuration.
    pub fn from_raw(
        raw: &BTreeMap<String, BTreeMap<String, f64>>,
    ) -> Result<Self, ConfigurationError> {
        let mut table = Self::new();
        for (material_key, origins) in raw {
            let material = Material::from_str(material_key)
                .map_err(|_| ConfigurationError::UnknownMaterial(material_key.clone()))?;
            for (origin_key, rate) in origins {
                let origin = Origin::from_str(origin_key)
                    .map_err(|_| ConfigurationError::UnknownOrigin(origin_key.clone()))?;
                table = table.with_rate(material, origin, *rate)?;
            }
        }
        Ok(table)
    }

    pub fn to_raw(&self) -> BTreeMap<String, BTreeMap<String, f64>> {
        self.rates
            .iter()
            .map(|(material, origins)| {
                let row = origins
                    .iter()
                    .map(|(origin, rate)| (origin.to_string(), *rate))
                    .collect();
                (material.to_string(), row)
            })
            .collect()
    }

    pub fn rate(&self, material: Material, origin: Origin) -> Result<f64, ConfigurationError> {
        self.rates
            .get(&material)
            .and_then(|row| row.get(&origin))
            .copied()
            .ok_or(ConfigurationError::MissingRate { material, origin })
    }

    pub fn materials(&self) -> impl Iterator<Item = Material> + '_ {
        self.rates.keys().copied()
    }

    pub fn rates_for(&self, material: Material) -> Option<&BTreeMap<Origin, f64>> {
        self.rates.get(&material)
    }

    /// Copy of the table restricted to one material.
    pub fn only(&self, material: Material) -> Option<Self> {
        let row = self.rates.get(&material)?;
        let rates = BTreeMap::from([(material, row.clone())]);
        Some(Self { rates })
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::RateTable;
    use crate::error::ConfigurationError;
    use crate::tariff::{Material, Origin};

    #[test]
    fn defaults_cover_every_material_and_origin() {
        let table = RateTable::defaults();
        for material in Material::ALL {
            for origin in Origin::ALL {
                assert!(table.rate(material, origin).is_ok());
            }
        }
        assert_eq!(table.rate(Material::Upvc, Origin::China), Ok(0.748));
        assert_eq!(table.rate(Material::Aluminum, Origin::Mexico), Ok(0.5070));
    }

    #[test]
    fn missing_pair_is_configuration_error() {
        let table = RateTable::new()
            .with_rate(Material::Upvc, Origin::Bahrain, 0.1)
            .expect("valid rate");
        assert_eq!(
            table.rate(Material::Aluminum, Origin::Bahrain),
            Err(ConfigurationError::MissingRate {
                material: Material::Aluminum,
                origin: Origin::Bahrain,
            })
        );
    }

    #[test]
    fn only_keeps_a_single_material() {
        let table = RateTable::defaults();
        let aluminum = table.only(Material::Aluminum).expect("aluminum rates");
        assert_eq!(aluminum.materials().collect::<Vec<_>>(), vec![Material::Aluminum]);
        assert_eq!(aluminum.rate(Material::Aluminum, Origin::China), Ok(0.752));
        assert!(RateTable::new().only(Material::Upvc).is_none());
    }

    #[test]
    fn rejects_negative_rate() {
        let err = RateTable::new()
            .with_rate(Material::Upvc, Origin::Poland, -0.2)
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidRate { .. }));
    }

    #[test]
    fn raw_form_round_trips() {
        let table = RateTable::defaults();
        let parsed = RateTable::from_raw(&table.to_raw()).expect("parse raw table");
        assert_eq!(parsed, table);
    }

    #[test]
    fn raw_form_reports_unknown_keys() {
        let mut raw = BTreeMap::new();
        raw.insert("steel".to_string(), BTreeMap::new());
        assert_eq!(
            RateTable::from_raw(&raw),
            Err(ConfigurationError::UnknownMaterial("steel".to_string()))
        );

        let mut raw = BTreeMap::new();
        raw.insert(
            "uPVC".to_string(),
            BTreeMap::from([("Atlantis".to_string(), 0.1)]),
        );
        assert_eq!(
            RateTable::from_raw(&raw),
            Err(ConfigurationError::UnknownOrigin("Atlantis".to_string()))
        );
    }
}
