pub mod calculator;
pub mod ranker;
pub mod report;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CostError, InputField, ValidationError};
use crate::tariff::{FeeRegistry, Material, Origin, RateTable};

pub use calculator::compute_rows;
pub use ranker::rank_rows;
pub use report::assemble_report;

/// Inputs for one comparison. Each request owns its values; only the rate
/// table is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct CostRequest {
    pub material: Material,
    pub order_value: f64,
    pub fees: FeeRegistry,
}

impl CostRequest {
    pub fn new(material: Material, order_value: f64) -> Self {
        Self {
            material,
            order_value,
            fees: FeeRegistry::new(),
        }
    }

    pub fn with_fees(mut self, fees: FeeRegistry) -> Self {
        self.fees = fees;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRow {
    pub origin: Origin,
    pub duty_rate: f64,
    pub order_value: f64,
    pub duty_amount: f64,
    pub hmf: f64,
    pub mpf: f64,
    pub total: f64,
    /// `None` for the last ranked row.
    pub savings_vs_next: Option<f64>,
    pub is_best: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    pub material: Material,
    pub order_value: f64,
    /// Ascending by total; the first row is the best option.
    pub rows: Vec<CostRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    pub origin: Origin,
    pub total: f64,
    pub savings_vs_next: Option<f64>,
}

impl CostReport {
    pub fn best(&self) -> Option<&CostRow> {
        self.rows.iter().find(|row| row.is_best)
    }

    pub fn headline(&self) -> Option<Headline> {
        self.best().map(|row| Headline {
            origin: row.origin,
            total: row.total,
            savings_vs_next: row.savings_vs_next,
        })
    }
}

/// Runs the whole comparison: per-origin rows, ranking, best-option report.
pub fn calculate(
    rates: &RateTable,
    origins: &[Origin],
    request: &CostRequest,
) -> Result<CostReport, CostError> {
    let order_value = ValidationError::check(InputField::OrderValue, request.order_value)?;
    let rows = compute_rows(rates, origins, request)?;
    let ranked = rank_rows(rows);
    let report = assemble_report(request.material, order_value, ranked);
    if let Some(best) = report.best() {
        debug!(
            material = %report.material,
            origin = %best.origin,
            total = best.total,
            "selected cheapest origin"
        );
    }
    Ok(report)
}
