use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// The user-supplied input record. Owned by the presentation layer and
/// passed by value into the pure calculator on every change.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RentInput {
    /// Current monthly rent in whole currency units.
    pub current_rent: i64,
    /// Proposed increase as a percentage; fractional values allowed.
    pub increase_percent: f64,
    /// One of the fixed 50 state names. Carried through, not computed on.
    pub state: String,
    /// Monthly gross income in whole currency units.
    pub monthly_income: i64,
}

/// Derived figures, recomputed on every input change. `new_rent` and
/// `annual_increase` are definitional (`current_rent + increase_amount`
/// and `increase_amount * 12`) and must never be cached independently.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RentImpactResult {
    pub increase_amount: i64,
    pub new_rent: i64,
    pub annual_increase: i64,
    pub rent_to_income_ratio: f64,
    pub affordability: AffordabilityStatus,
}

/// Three-tier housing-cost-burden classification of the rent-to-income
/// ratio. Thresholds are 30% and 50%, each boundary falling into the
/// more affordable tier.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AffordabilityStatus {
    Affordable,
    CostBurdened,
    SeverelyBurdened,
}

impl AffordabilityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AffordabilityStatus::Affordable => "Affordable",
            AffordabilityStatus::CostBurdened => "Cost Burdened",
            AffordabilityStatus::SeverelyBurdened => "Severely Burdened",
        }
    }

    /// Indicator color hex (green/amber/red) for renderers that use one.
    pub fn color(&self) -> &'static str {
        match self {
            AffordabilityStatus::Affordable => "#16A34A",
            AffordabilityStatus::CostBurdened => "#D97706",
            AffordabilityStatus::SeverelyBurdened => "#DC2626",
        }
    }
}

impl fmt::Display for AffordabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize)]
pub struct ImpactReport {
    pub input: RentInput,
    pub result: RentImpactResult,
}

/// One row of the impact-breakdown table.
#[derive(Debug, Serialize, Clone)]
pub struct BreakdownRow {
    pub label: String,
    pub value: String,
    pub is_total: bool,
    pub is_increase: bool,
}

#[derive(Serialize)]
pub struct TipsReport {
    pub tips: Vec<&'static str>,
    pub disclaimer: &'static str,
}

#[derive(Serialize)]
pub struct ClassifyReport {
    pub ratio: f64,
    pub affordability: AffordabilityStatus,
    pub label: String,
}
