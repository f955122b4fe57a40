use std::cmp::Ordering;

use crate::cost::CostRow;

/// Sorts rows ascending by total and fills in savings against the next row.
///
/// The sort is stable: rows with equal totals keep their input order. The
/// last row has no next row, so its savings stay `None`.
pub fn rank_rows(mut rows: Vec<CostRow>) -> Vec<CostRow> {
    // compute_rows rejects non-finite totals
    rows.sort_by(|a, b| a.total.partial_cmp(&b.total).unwrap_or(Ordering::Equal));

    let next_totals = rows
        .iter()
        .skip(1)
        .map(|row| Some(row.total))
        .chain(std::iter::once(None))
        .collect::<Vec<_>>();
    for (row, next) in rows.iter_mut().zip(next_totals) {
        row.savings_vs_next = next.map(|next_total| next_total - row.total);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::rank_rows;
    use crate::cost::CostRow;
    use crate::tariff::Origin;

    fn row(origin: Origin, total: f64) -> CostRow {
        CostRow {
            origin,
            duty_rate: 0.0,
            order_value: total,
            duty_amount: 0.0,
            hmf: 0.0,
            mpf: 0.0,
            total,
            savings_vs_next: None,
            is_best: false,
        }
    }

    #[test]
    fn sorts_ascending_and_computes_gaps() {
        let ranked = rank_rows(vec![
            row(Origin::Bahrain, 30.0),
            row(Origin::China, 10.0),
            row(Origin::Poland, 25.0),
        ]);
        let origins = ranked.iter().map(|r| r.origin).collect::<Vec<_>>();
        assert_eq!(origins, vec![Origin::China, Origin::Poland, Origin::Bahrain]);
        assert_eq!(ranked[0].savings_vs_next, Some(15.0));
        assert_eq!(ranked[1].savings_vs_next, Some(5.0));
        assert_eq!(ranked[2].savings_vs_next, None);
    }

    #[test]
    fn equal_totals_keep_input_order() {
        let ranked = rank_rows(vec![
            row(Origin::Mexico, 5.0),
            row(Origin::China, 1.0),
            row(Origin::Bahrain, 5.0),
            row(Origin::Poland, 1.0),
        ]);
        let origins = ranked.iter().map(|r| r.origin).collect::<Vec<_>>();
        assert_eq!(
            origins,
            vec![Origin::China, Origin::Poland, Origin::Mexico, Origin::Bahrain]
        );
        assert_eq!(ranked[0].savings_vs_next, Some(0.0));
    }

    #[test]
    fn single_row_has_no_savings() {
        let ranked = rank_rows(vec![row(Origin::Poland, 42.0)]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].savings_vs_next, None);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(rank_rows(Vec::new()).is_empty());
    }
}
