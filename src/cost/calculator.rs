use crate::cost::{CostRequest, CostRow};
use crate::error::{ConfigurationError, CostError, InputField, ValidationError};
use crate::tariff::{FeeEntry, Origin, RateTable};

/// Computes one unranked row per origin, in the order given.
///
/// All numeric inputs are validated before any rate is looked up, so a bad
/// fee is reported even when the rate table is also incomplete. No rounding
/// is applied. Inputs large enough to push a duty amount or total past the
/// `f64` range are rejected against the field that overflowed.
pub fn compute_rows(
    rates: &RateTable,
    origins: &[Origin],
    request: &CostRequest,
) -> Result<Vec<CostRow>, CostError> {
    let order_value = ValidationError::check(InputField::OrderValue, request.order_value)?;
    if origins.is_empty() {
        return Err(ConfigurationError::NoOrigins.into());
    }

    let mut fees = Vec::with_capacity(origins.len());
    for origin in origins {
        let entry = request.fees.get(*origin);
        let hmf = ValidationError::check(InputField::Hmf(*origin), entry.hmf)?;
        let mpf = ValidationError::check(InputField::Mpf(*origin), entry.mpf)?;
        fees.push(FeeEntry::new(hmf, mpf));
    }

    let mut rows = Vec::with_capacity(origins.len());
    for (origin, fee) in origins.iter().zip(fees) {
        let duty_rate = rates.rate(request.material, *origin)?;
        let duty_amount = order_value * duty_rate;
        let landed = order_value + duty_amount;
        if !landed.is_finite() {
            return Err(overflow(InputField::OrderValue, order_value));
        }
        let with_hmf = landed + fee.hmf;
        if !with_hmf.is_finite() {
            return Err(overflow(InputField::Hmf(*origin), fee.hmf));
        }
        let total = with_hmf + fee.mpf;
        if !total.is_finite() {
            return Err(overflow(InputField::Mpf(*origin), fee.mpf));
        }
        rows.push(CostRow {
            origin: *origin,
            duty_rate,
            order_value,
            duty_amount,
            hmf: fee.hmf,
            mpf: fee.mpf,
            total,
            savings_vs_next: None,
            is_best: false,
        });
    }
    Ok(rows)
}

/// A finite input whose duty or total no longer fits in an `f64`.
fn overflow(field: InputField, value: f64) -> CostError {
    ValidationError { field, value }.into()
}
