use crate::domain::constants::{DEFAULT_INCOME, DEFAULT_INCREASE, DEFAULT_RENT, DEFAULT_STATE};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rentcalc", version, about = "Rent increase impact calculator")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

/// Numeric fields are taken as raw strings so the form coercion policy
/// applies (unparseable input defaults to 0) instead of a clap parse
/// error.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the impact of a rent increase
    Impact {
        #[arg(long, default_value = DEFAULT_RENT, allow_hyphen_values = true, help = "Current monthly rent ($)")]
        rent: String,
        #[arg(long, default_value = DEFAULT_INCREASE, allow_hyphen_values = true, help = "Rent increase (%)")]
        increase: String,
        #[arg(long, default_value = DEFAULT_STATE, help = "US state")]
        state: String,
        #[arg(long, default_value = DEFAULT_INCOME, allow_hyphen_values = true, help = "Monthly gross income ($)")]
        income: String,
    },
    /// Render the impact-breakdown table
    Breakdown {
        #[arg(long, default_value = DEFAULT_RENT, allow_hyphen_values = true)]
        rent: String,
        #[arg(long, default_value = DEFAULT_INCREASE, allow_hyphen_values = true)]
        increase: String,
        #[arg(long, default_value = DEFAULT_STATE)]
        state: String,
        #[arg(long, default_value = DEFAULT_INCOME, allow_hyphen_values = true)]
        income: String,
    },
    /// Classify a rent-to-income ratio (percentage)
    Classify { ratio: String },
    /// List the supported states
    States { query: Option<String> },
    /// Show rent increase tips
    Tips,
}
