use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cost::CostReport;
use crate::tariff::RateTable;
use crate::output::format::{format_money, format_optional_money, format_percent, BEST_MARKER};

pub const REPORT_COLUMNS: [&str; 9] = [
    "Best option",
    "Origin",
    "Duty rate",
    "Order value",
    "Duty amount",
    "HMF",
    "MPF",
    "Total",
    "Savings vs next",
];

pub fn report_to_csv(report: &CostReport, symbol: &str) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(REPORT_COLUMNS)?;
    for row in &report.rows {
        writer.write_record([
            if row.is_best { BEST_MARKER } else { "" }.to_string(),
            row.origin.to_string(),
            format_percent(row.duty_rate),
            format_money(symbol, row.order_value),
            format_money(symbol, row.duty_amount),
            format_money(symbol, row.hmf),
            format_money(symbol, row.mpf),
            format_money(symbol, row.total),
            format_optional_money(symbol, row.savings_vs_next),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

pub fn rates_to_csv(rates: &RateTable) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["Material", "Origin", "Duty rate"])?;
    for material in rates.materials() {
        let Some(row) = rates.rates_for(material) else {
            continue;
        };
        for (origin, rate) in row {
            writer.write_record([
                material.to_string(),
                origin.to_string(),
                format_percent(*rate),
            ])?;
        }
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

pub fn export_csv(report: &CostReport, symbol: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating export directory: {}", parent.display()))?;
    }
    let data = report_to_csv(report, symbol)?;
    fs::write(path, data).with_context(|| format!("failed writing CSV: {}", path.display()))
}
