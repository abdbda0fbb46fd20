//! Rank every program in a catalog by projected net ROI
//!
//! Usage: rank_programs --catalog programs.csv [--residency out-of-state] [--no-credential]

use anyhow::{Context, Result};
use clap::Parser;
use education_roi::inputs::{load_catalog, ProgramRecord};
use education_roi::scenario::rank_by_net_roi;
use education_roi::{
    FinancialAid, ProjectionConfig, Residency, RoiCalculation, SalaryAssumptions, ScenarioInputs,
    ScenarioRunner,
};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "rank_programs", about = "Rank catalog programs by projected net ROI")]
struct Args {
    /// Program catalog CSV
    #[arg(long)]
    catalog: PathBuf,

    #[arg(long, default_value = "in-state")]
    residency: Residency,

    /// Entrant lacks the prerequisite credential (lower baseline salary)
    #[arg(long)]
    no_credential: bool,

    #[arg(long, default_value_t = 30)]
    career_length: u32,

    /// Annual salary growth in percent
    #[arg(long, default_value_t = 3.0)]
    growth_rate: f64,

    /// Annual grants applied to every program
    #[arg(long, default_value_t = 0.0)]
    grants: f64,

    /// Output CSV path
    #[arg(long, default_value = "program_rankings.csv")]
    output: PathBuf,
}

/// One output row of the ranking
#[derive(Debug, Serialize)]
struct RankingRow {
    rank: usize,
    institution: String,
    program: String,
    net_cost: f64,
    expected_earnings: f64,
    net_roi: f64,
    roi_percentage: Option<f64>,
    payback_years: Option<f64>,
}

impl RankingRow {
    fn new(rank: usize, program: &ProgramRecord, result: &RoiCalculation) -> Self {
        let finite = |v: f64| if v.is_finite() { Some(v) } else { None };
        Self {
            rank,
            institution: program.institution.clone(),
            program: program.program.clone(),
            net_cost: result.total_cost,
            expected_earnings: result.expected_earnings,
            net_roi: result.net_roi,
            roi_percentage: finite(result.roi_percentage),
            payback_years: finite(result.payback_period),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let programs = load_catalog(&args.catalog)
        .with_context(|| format!("loading catalog {}", args.catalog.display()))?;
    println!("Loaded {} programs in {:?}", programs.len(), start.elapsed());

    let salaries = SalaryAssumptions::default();
    let has_credential = !args.no_credential;
    let aid = FinancialAid {
        grants: args.grants,
        ..Default::default()
    };

    let scenarios = programs
        .iter()
        .map(|program| -> Result<ScenarioInputs> {
            let inputs = ScenarioInputs::new(
                program.cost_inputs(args.residency),
                aid.clone(),
                salaries.derive_earnings(
                    has_credential,
                    program.median_salary,
                    args.career_length,
                    args.growth_rate,
                ),
            );
            inputs
                .validate()
                .with_context(|| format!("invalid inputs for {}", program.label()))?;
            Ok(inputs)
        })
        .collect::<Result<Vec<_>>>()?;

    let runner = ScenarioRunner::with_config(ProjectionConfig::from_env());
    let results = runner.run_batch(&scenarios);

    let mut ranked: Vec<_> = programs.iter().zip(results).collect();
    rank_by_net_roi(&mut ranked);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for (idx, (program, result)) in ranked.iter().enumerate() {
        writer.serialize(RankingRow::new(idx + 1, program, result))?;
    }
    writer.flush()?;

    println!("\nTop programs ({}, baseline ${:.0}):", args.residency.as_str(), salaries.baseline(has_credential));
    for (idx, (program, result)) in ranked.iter().take(10).enumerate() {
        let payback = if result.breaks_even() {
            format!("{:.1}y", result.payback_period)
        } else {
            "never".to_string()
        };
        println!("  {:>2}. {:<50} net ROI ${:>14.0}  payback {}", idx + 1, program.label(), result.net_roi, payback);
    }

    println!("\nRankings written to {} in {:?}", args.output.display(), start.elapsed());
    Ok(())
}
