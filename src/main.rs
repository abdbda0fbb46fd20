//! Education ROI CLI
//!
//! Runs a single ROI projection from flags or a JSON scenario file

use anyhow::{Context, Result};
use clap::Parser;
use education_roi::{
    CostInputs, EarningsInputs, FinancialAid, ProjectionConfig, ProjectionEngine, Residency,
    ScenarioInputs, ScenarioRecord, ScenarioStore,
};
use education_roi::scenario::JsonDirStore;
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "education_roi", version, about = "Project the return on a degree versus entering the workforce")]
struct Args {
    /// Read all inputs from a JSON scenario file instead of flags
    #[arg(long)]
    scenario: Option<PathBuf>,

    #[arg(long, default_value_t = 40_000.0)]
    tuition: f64,
    #[arg(long, default_value_t = 0.0)]
    fees: f64,
    #[arg(long, default_value_t = 15_000.0)]
    room_board: f64,
    #[arg(long, default_value_t = 1_200.0)]
    books: f64,
    #[arg(long, default_value_t = 2_000.0)]
    other_expenses: f64,
    /// Program length in years (fractional allowed)
    #[arg(long, default_value_t = 4.0)]
    program_length: f64,
    #[arg(long, default_value = "in-state")]
    residency: Residency,

    #[arg(long, default_value_t = 0.0)]
    grants: f64,
    #[arg(long, default_value_t = 0.0)]
    scholarships: f64,
    #[arg(long, default_value_t = 0.0)]
    work_study: f64,
    #[arg(long, default_value_t = 0.0)]
    loans: f64,
    #[arg(long, default_value_t = 0.0)]
    interest_rate: f64,

    #[arg(long, default_value_t = 35_000.0)]
    baseline_salary: f64,
    #[arg(long, default_value_t = 105_000.0)]
    projected_salary: f64,
    #[arg(long, default_value_t = 30)]
    career_length: u32,
    /// Annual salary growth in percent
    #[arg(long, default_value_t = 3.0)]
    growth_rate: f64,

    /// Write the full trajectory to this CSV file
    #[arg(long)]
    trajectory_csv: Option<PathBuf>,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Save the scenario into this directory
    #[arg(long, requires = "name")]
    save_dir: Option<PathBuf>,

    /// Name for the saved scenario
    #[arg(long)]
    name: Option<String>,
}

impl Args {
    fn inputs(&self) -> Result<ScenarioInputs> {
        if let Some(path) = &self.scenario {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            return serde_json::from_reader(file).with_context(|| format!("parsing {}", path.display()));
        }

        Ok(ScenarioInputs::new(
            CostInputs {
                tuition: self.tuition,
                fees: self.fees,
                room_board: self.room_board,
                books: self.books,
                other_expenses: self.other_expenses,
                program_length: self.program_length,
                residency: self.residency,
            },
            FinancialAid {
                grants: self.grants,
                scholarships: self.scholarships,
                work_study: self.work_study,
                loans: self.loans,
                interest_rate: self.interest_rate,
            },
            EarningsInputs {
                baseline_salary: self.baseline_salary,
                projected_salary: self.projected_salary,
                career_length: self.career_length,
                salary_growth_rate: self.growth_rate,
            },
        ))
    }
}

fn format_years(years: f64) -> String {
    if years.is_finite() {
        format!("{:.2} years", years)
    } else {
        "Never".to_string()
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let inputs = args.inputs()?;
    inputs.validate().context("invalid scenario inputs")?;

    let engine = ProjectionEngine::new(ProjectionConfig::from_env());
    let result = engine.project_scenario(&inputs);
    let trajectory = engine.simulate_trajectory(&inputs.costs, &inputs.earnings);

    if let Some(path) = &args.trajectory_csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        trajectory.write_csv(file).context("writing trajectory CSV")?;
    }

    if let (Some(dir), Some(name)) = (&args.save_dir, &args.name) {
        let mut store = JsonDirStore::open(dir)?;
        let record = ScenarioRecord::new(name.clone(), inputs.clone(), &engine);
        store.save(&record)?;
        eprintln!("Saved scenario '{}' as {}", record.name, record.id);
    }

    if args.json {
        let output = serde_json::json!({ "result": result, "trajectory": trajectory });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let costs = &result.costs;
    println!("Education ROI Projection");
    println!("========================\n");
    println!("  Annual Cost:        ${:.2}", costs.annual_cost);
    println!("  Total Cost:         ${:.2}", costs.total_cost);
    println!("  Total Aid:          ${:.2}", costs.total_aid);
    println!("  Net Cost:           ${:.2}", costs.net_cost);
    println!();
    println!("  Lifetime (degree):  ${:.2}", result.lifetime_earnings_with_degree);
    println!("  Lifetime (none):    ${:.2}", result.lifetime_earnings_without_degree);
    println!("  Expected Earnings:  ${:.2}", result.expected_earnings);
    println!("  Net ROI:            ${:.2}", result.net_roi);
    if result.roi_percentage.is_finite() {
        println!("  ROI:                {:.1}%", result.roi_percentage);
    } else {
        println!("  ROI:                N/A (no net cost)");
    }
    println!("  Payback Period:     {}", format_years(result.payback_period));
    if result.breaks_even() {
        println!("  After Completion:   {}", format_years(result.payback_after_completion()));
    }

    println!("\n{:>4} {:>16} {:>16} {:>10}", "Year", "With Degree", "Without", "");
    println!("{}", "-".repeat(50));
    for point in &trajectory.points {
        let marker = if point.is_break_even {
            "break-even"
        } else if point.in_program {
            "program"
        } else {
            ""
        };
        println!(
            "{:>4} {:>16.0} {:>16.0} {:>10}",
            point.year, point.cumulative_with_degree, point.cumulative_without_degree, marker
        );
    }

    Ok(())
}
