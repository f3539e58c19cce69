//! The derived-value computation and affordability classification.
//!
//! `compute` is total over its input record: it sanitizes out-of-domain
//! values instead of panicking, and income of zero yields a ratio of 0.0
//! rather than a division artifact.

use crate::domain::models::{AffordabilityStatus, RentImpactResult, RentInput};

const COST_BURDENED_THRESHOLD: f64 = 30.0;
const SEVERELY_BURDENED_THRESHOLD: f64 = 50.0;

/// Negative and non-finite values fall outside the input domain; they are
/// treated as zero rather than propagated.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Compute the full impact record from one input record.
///
/// Rounding of the monthly increase is to the nearest whole currency
/// unit, ties away from zero (`f64::round`).
pub fn compute(input: &RentInput) -> RentImpactResult {
    let current_rent = input.current_rent.max(0);
    let increase_percent = sanitize(input.increase_percent);
    let monthly_income = input.monthly_income.max(0);

    let increase_amount = (current_rent as f64 * increase_percent / 100.0).round() as i64;
    let new_rent = current_rent + increase_amount;
    let annual_increase = increase_amount * 12;

    let rent_to_income_ratio = if monthly_income > 0 {
        (new_rent as f64 / monthly_income as f64) * 100.0
    } else {
        0.0
    };

    RentImpactResult {
        increase_amount,
        new_rent,
        annual_increase,
        rent_to_income_ratio,
        affordability: classify(rent_to_income_ratio),
    }
}

/// Classify a rent-to-income ratio. The 30 and 50 boundaries fall into
/// the lower (more affordable) tier: exactly 30.0 is `Affordable` and
/// exactly 50.0 is `CostBurdened`.
pub fn classify(ratio: f64) -> AffordabilityStatus {
    if ratio > SEVERELY_BURDENED_THRESHOLD {
        AffordabilityStatus::SeverelyBurdened
    } else if ratio > COST_BURDENED_THRESHOLD {
        AffordabilityStatus::CostBurdened
    } else {
        AffordabilityStatus::Affordable
    }
}
