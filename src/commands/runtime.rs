use crate::cli::{Cli, Commands};
use crate::domain::constants::{DISCLAIMER, RENT_TIPS, STATES};
use crate::domain::models::{ClassifyReport, ImpactReport, TipsReport};
use crate::services::calculator::{classify, compute};
use crate::services::form::{build_input, coerce_percent};
use crate::services::format::{breakdown, pct, usd, usd_delta};
use crate::services::output::{emit_list, emit_report};

pub fn handle_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Impact {
            rent,
            increase,
            state,
            income,
        } => {
            let input = build_input(rent, increase, state, income)?;
            let result = compute(&input);
            let report = ImpactReport { input, result };
            emit_report(cli.json, report, |r| {
                vec![
                    format!(
                        "new monthly rent: {} (+{} from current)",
                        usd(r.result.new_rent),
                        pct(r.input.increase_percent)
                    ),
                    format!("monthly increase: {}", usd_delta(r.result.increase_amount)),
                    format!("annual cost: {}", usd_delta(r.result.annual_increase)),
                    format!(
                        "rent-to-income ratio: {} ({})",
                        pct(r.result.rent_to_income_ratio),
                        r.result.affordability
                    ),
                    format!("state: {}", r.input.state),
                ]
            })?;
        }
        Commands::Breakdown {
            rent,
            increase,
            state,
            income,
        } => {
            let input = build_input(rent, increase, state, income)?;
            let result = compute(&input);
            let rows = breakdown(&input, &result);
            emit_list(cli.json, &rows, |r| format!("{}\t{}", r.label, r.value))?;
        }
        Commands::Classify { ratio } => {
            let ratio = coerce_percent(ratio);
            let affordability = classify(ratio);
            let report = ClassifyReport {
                ratio,
                affordability,
                label: affordability.label().to_string(),
            };
            emit_report(cli.json, report, |r| {
                vec![format!("{} ({})", pct(r.ratio), r.label)]
            })?;
        }
        Commands::States { query } => {
            let needle = query.as_deref().map(str::to_ascii_lowercase);
            let states: Vec<&str> = STATES
                .iter()
                .filter(|s| match &needle {
                    Some(q) => s.to_ascii_lowercase().contains(q),
                    None => true,
                })
                .copied()
                .collect();
            emit_list(cli.json, &states, |s| s.to_string())?;
        }
        Commands::Tips => {
            let report = TipsReport {
                tips: RENT_TIPS.to_vec(),
                disclaimer: DISCLAIMER,
            };
            emit_report(cli.json, report, |r| {
                let mut lines: Vec<String> = r.tips.iter().map(|t| t.to_string()).collect();
                lines.push(String::new());
                lines.push(r.disclaimer.to_string());
                lines
            })?;
        }
    }
    Ok(())
}
