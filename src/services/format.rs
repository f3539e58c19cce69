//! Rendering helpers: whole-unit US currency, one-decimal percentages,
//! and assembly of the impact-breakdown table.

use crate::domain::models::{BreakdownRow, RentImpactResult, RentInput};

/// Format a whole-unit dollar amount with thousands separators, no
/// fractional digits ("$1,890").
pub fn usd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Increase values render with an explicit leading "+".
pub fn usd_delta(amount: i64) -> String {
    format!("+{}", usd(amount))
}

/// Exactly one fractional digit and a trailing "%".
pub fn pct(value: f64) -> String {
    format!("{value:.1}%")
}

/// The four-row impact table: current rent, monthly increase, new rent,
/// annual impact.
pub fn breakdown(input: &RentInput, result: &RentImpactResult) -> Vec<BreakdownRow> {
    vec![
        BreakdownRow {
            label: "Current Monthly Rent".to_string(),
            value: usd(input.current_rent),
            is_total: false,
            is_increase: false,
        },
        BreakdownRow {
            label: "Monthly Increase".to_string(),
            value: usd_delta(result.increase_amount),
            is_total: false,
            is_increase: true,
        },
        BreakdownRow {
            label: "New Monthly Rent".to_string(),
            value: usd(result.new_rent),
            is_total: false,
            is_increase: false,
        },
        BreakdownRow {
            label: "Annual Impact".to_string(),
            value: usd_delta(result.annual_increase),
            is_total: true,
            is_increase: true,
        },
    ]
}
