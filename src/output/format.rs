use crate::cost::CostReport;

pub const BEST_MARKER: &str = "✅";

pub const FORMULA_CAPTION: &str = "Duty = rate × order value; Total = order + duty + HMF + MPF.";

/// `0.4724` -> `47.24%`
pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Two decimals with comma thousands separators, e.g. `$14,724.00`.
pub fn format_money(symbol: &str, value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, digit) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit as char);
    }

    // "-0.00" would read oddly for values that round to zero
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{frac_part}")
}

pub fn format_optional_money(symbol: &str, value: Option<f64>) -> String {
    value.map(|v| format_money(symbol, v)).unwrap_or_default()
}

/// One-line summary of the cheapest origin, or `None` for an empty report.
pub fn headline_text(report: &CostReport, symbol: &str) -> Option<String> {
    let headline = report.headline()?;
    let mut line = format!(
        "Best option: {} with total {}",
        headline.origin,
        format_money(symbol, headline.total)
    );
    if let Some(savings) = headline.savings_vs_next {
        line.push_str(&format!(
            " | Saves {} vs next option",
            format_money(symbol, savings)
        ));
    }
    Some(line)
}
