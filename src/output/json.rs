use anyhow::Result;
use serde::Serialize;

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::render_json;
    use crate::cost::{calculate, CostRequest};
    use crate::tariff::{Material, Origin, RateTable};

    #[test]
    fn last_row_savings_serializes_as_null() {
        let report = calculate(
            &RateTable::defaults(),
            &Origin::ALL,
            &CostRequest::new(Material::Aluminum, 500.0),
        )
        .expect("report");
        let value: Value = serde_json::from_str(&render_json(&report).expect("json")).expect("parse");
        assert_eq!(value["material"], "Aluminum");
        assert_eq!(value["rows"][0]["origin"], "Bahrain");
        assert_eq!(value["rows"][0]["is_best"], true);
        assert!(value["rows"][3]["savings_vs_next"].is_null());
    }
}
