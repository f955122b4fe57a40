use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Row, Table};

use crate::cost::CostReport;
use crate::output::csv::REPORT_COLUMNS;
use crate::output::format::{
    format_money, format_optional_money, format_percent, headline_text, BEST_MARKER,
    FORMULA_CAPTION,
};
use crate::tariff::RateTable;

pub fn render_report_table(report: &CostReport, symbol: &str) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(REPORT_COLUMNS.to_vec());

    for r in &report.rows {
        let values = vec![
            if r.is_best { BEST_MARKER } else { "" }.to_string(),
            r.origin.to_string(),
            format_percent(r.duty_rate),
            format_money(symbol, r.order_value),
            format_money(symbol, r.duty_amount),
            format_money(symbol, r.hmf),
            format_money(symbol, r.mpf),
            format_money(symbol, r.total),
            format_optional_money(symbol, r.savings_vs_next),
        ];
        let cells = values.into_iter().map(|v| {
            let cell = Cell::new(v);
            if r.is_best {
                cell.fg(Color::Green).add_attribute(Attribute::Bold)
            } else {
                cell
            }
        });
        table.add_row(Row::from(cells.collect::<Vec<_>>()));
    }

    let mut out = String::new();
    if let Some(headline) = headline_text(report, symbol) {
        out.push_str(&format!("{} ({})\n", headline, report.material));
    }
    out.push_str(&table.to_string());
    out.push('\n');
    out.push_str(FORMULA_CAPTION);
    out
}

pub fn render_rates_table(rates: &RateTable) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Material", "Origin", "Duty rate"]);
    for material in rates.materials() {
        let Some(row) = rates.rates_for(material) else {
            continue;
        };
        for (origin, rate) in row {
            table.add_row(vec![
                material.to_string(),
                origin.to_string(),
                format_percent(*rate),
            ]);
        }
    }
    table.to_string()
}
