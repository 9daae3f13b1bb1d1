//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::EngineError;

/// Rounds `value` half away from zero to `scale` places and pads it to
/// exactly that many, so `200` becomes `200.00`.
pub(crate) fn round_money(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    rounded
}

/// The error for an amount of `rule` that does not fit in a decimal.
pub(crate) fn overflow(rule: &str, amount: &str) -> EngineError {
    EngineError::CalculationOverflow {
        rule: rule.to_string(),
        message: format!("{} is out of range", amount),
    }
}
