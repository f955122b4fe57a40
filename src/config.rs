use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigurationError;
use crate::tariff::{FeeEntry, FeeRegistry, Material, Origin, RateTable};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub calculator: CalculatorConfig,
    #[serde(default)]
    pub origins: OriginsConfig,
    #[serde(default = "default_rates")]
    pub rates: BTreeMap<String, BTreeMap<String, f64>>,
    #[serde(default)]
    pub fees: BTreeMap<String, FeeEntry>,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default = "default_material")]
    pub default_material: String,
    #[serde(default = "default_order_value")]
    pub default_order_value: f64,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginsConfig {
    #[serde(default = "default_origins_enabled")]
    pub enabled: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_path")]
    pub csv_path: String,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub enabled_origins: Option<Vec<String>>,
    pub currency_symbol: Option<String>,
}

impl Config {
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config/tariff-savings/config.toml")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::default_path);
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed reading config: {}", path.display()))?;
        Self::from_toml(&data)
            .with_context(|| format!("failed parsing TOML config: {}", path.display()))
    }

    pub fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(origins) = overrides.enabled_origins {
            self.origins.enabled = origins;
        }
        if let Some(symbol) = overrides.currency_symbol {
            self.calculator.currency_symbol = symbol;
        }
    }

    /// Writes the commented template. An existing file is only replaced when
    /// `force` is set.
    pub fn write_template(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!(
                "config already exists at {}; pass --force to replace it",
                path.display()
            );
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating config directory: {}", parent.display())
            })?;
        }
        fs::write(path, Self::default_template())
            .with_context(|| format!("failed writing config template: {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn rate_table(&self) -> Result<RateTable, ConfigurationError> {
        RateTable::from_raw(&self.rates)
    }

    pub fn fee_registry(&self) -> Result<FeeRegistry, ConfigurationError> {
        FeeRegistry::from_raw(&self.fees)
    }

    pub fn default_material(&self) -> Result<Material, ConfigurationError> {
        Material::from_str(&self.calculator.default_material).map_err(|_| {
            ConfigurationError::UnknownMaterial(self.calculator.default_material.clone())
        })
    }

    /// Enabled origins in enumeration order, duplicates removed.
    pub fn enabled_origins(&self) -> Result<Vec<Origin>, ConfigurationError> {
        let mut parsed = Vec::new();
        for entry in &self.origins.enabled {
            let origin = Origin::from_str(entry)
                .map_err(|_| ConfigurationError::UnknownOrigin(entry.clone()))?;
            parsed.push(origin);
        }
        if parsed.is_empty() {
            return Err(ConfigurationError::NoOrigins);
        }
        parsed.sort();
        parsed.dedup();
        Ok(parsed)
    }

    pub fn default_template() -> String {
        let template = r#"[calculator]
default_material = "uPVC"
default_order_value = 10000.0
currency_symbol = "$"

[origins]
enabled = ["Bahrain", "China", "Poland", "Mexico"]

[rates.uPVC]
Bahrain = 0.10
China = 0.748
Poland = 0.4724
Mexico = 0.5030

[rates.Aluminum]
Bahrain = 0.10
China = 0.752
Poland = 0.4765
Mexico = 0.5070

# Flat fees per origin in dollars. Origins left out pay no fees.
[fees.Bahrain]
hmf = 0.0
mpf = 0.0

[export]
csv_path = "tariff_savings.csv"
"#;
        template.to_string()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calculator: CalculatorConfig::default(),
            origins: OriginsConfig::default(),
            rates: default_rates(),
            fees: BTreeMap::new(),
            export: ExportConfig::default(),
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_material: default_material(),
            default_order_value: default_order_value(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Default for OriginsConfig {
    fn default() -> Self {
        Self {
            enabled: default_origins_enabled(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv_path: default_export_path(),
        }
    }
}

fn default_rates() -> BTreeMap<String, BTreeMap<String, f64>> {
    RateTable::defaults().to_raw()
}

fn default_material() -> String {
    Material::Upvc.to_string()
}

fn default_order_value() -> f64 {
    10_000.0
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_origins_enabled() -> Vec<String> {
    Origin::ALL.iter().map(|o| o.to_string()).collect()
}

fn default_export_path() -> String {
    "tariff_savings.csv".to_string()
}
