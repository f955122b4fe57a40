use crate::cost::{CostReport, CostRow};
use crate::tariff::Material;

/// Marks the first ranked row as the best option and every other row as not.
pub fn assemble_report(material: Material, order_value: f64, ranked: Vec<CostRow>) -> CostReport {
    let rows = ranked
        .into_iter()
        .enumerate()
        .map(|(idx, mut row)| {
            row.is_best = idx == 0;
            row
        })
        .collect();
    CostReport {
        material,
        order_value,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::assemble_report;
    use crate::cost::{rank_rows, CostRow};
    use crate::tariff::{Material, Origin};

    fn row(origin: Origin, total: f64, is_best: bool) -> CostRow {
        CostRow {
            origin,
            duty_rate: 0.1,
            order_value: 0.0,
            duty_amount: 0.0,
            hmf: 0.0,
            mpf: 0.0,
            total,
            savings_vs_next: None,
            is_best,
        }
    }

    #[test]
    fn exactly_one_best_row() {
        let ranked = rank_rows(vec![
            row(Origin::China, 9.0, true),
            row(Origin::Bahrain, 3.0, false),
            row(Origin::Mexico, 4.0, true),
        ]);
        let report = assemble_report(Material::Upvc, 0.0, ranked);
        assert_eq!(report.rows.iter().filter(|r| r.is_best).count(), 1);
        assert!(report.rows[0].is_best);
        assert_eq!(report.best().map(|r| r.origin), Some(Origin::Bahrain));
    }

    #[test]
    fn single_origin_headline_has_no_savings() {
        let report = assemble_report(
            Material::Aluminum,
            0.0,
            rank_rows(vec![row(Origin::Poland, 7.0, false)]),
        );
        let headline = report.headline().expect("headline");
        assert_eq!(headline.origin, Origin::Poland);
        assert_eq!(headline.total, 7.0);
        assert_eq!(headline.savings_vs_next, None);
    }

    #[test]
    fn empty_report_has_no_headline() {
        let report = assemble_report(Material::Upvc, 0.0, Vec::new());
        assert!(report.best().is_none());
        assert!(report.headline().is_none());
    }
}
