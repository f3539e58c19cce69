//! Presentation-side input coercion.
//!
//! Raw field values arrive as strings. Unparseable, negative, or
//! non-finite numbers coerce to 0 before the calculator runs; the
//! calculator itself never sees malformed input. State names must match
//! the fixed enumeration.

use crate::domain::constants::STATES;
use crate::domain::models::RentInput;

#[derive(thiserror::Error, Debug)]
pub enum FormError {
    #[error("unknown state: {0}")]
    UnknownState(String),
}

/// Coerce a raw monetary field to whole currency units. Fractional input
/// truncates toward zero.
pub fn coerce_amount(raw: &str) -> i64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v.trunc() as i64,
        _ => 0,
    }
}

/// Coerce a raw percentage field; fractional values are kept.
pub fn coerce_percent(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Resolve a state name against the fixed list, case-insensitively,
/// returning the canonical spelling.
pub fn resolve_state(raw: &str) -> Result<&'static str, FormError> {
    let wanted = raw.trim();
    STATES
        .iter()
        .find(|s| s.eq_ignore_ascii_case(wanted))
        .copied()
        .ok_or_else(|| FormError::UnknownState(raw.to_string()))
}

/// Assemble the input record from raw CLI field values.
pub fn build_input(
    rent: &str,
    increase: &str,
    state: &str,
    income: &str,
) -> Result<RentInput, FormError> {
    Ok(RentInput {
        current_rent: coerce_amount(rent),
        increase_percent: coerce_percent(increase),
        state: resolve_state(state)?.to_string(),
        monthly_income: coerce_amount(income),
    })
}
