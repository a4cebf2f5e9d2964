use std::path::PathBuf;

use clap::Parser;
use jvl_aircraft::airframe::load_or_default;
use jvl_aircraft::config::{MassBudgetConfig, load_mass_budget};
use jvl_aircraft::export::{MassFileOptions, write_breakdown, write_mass_file};
use jvl_aircraft::logging::setup_logging;
use jvl_aircraft::mass::estimate;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Estimate component masses and write the run-case mass file"
)]
struct Cli {
    /// Mass file to write
    #[arg(long, default_value = "jvl_test.mass")]
    output: PathBuf,

    /// Airframe file (YAML or TOML) replacing the built-in demonstrator
    #[arg(long)]
    config: Option<PathBuf>,

    /// Main wing airfoil for the built-in demonstrator
    #[arg(long, default_value = "jw01.dat")]
    airfoil: String,

    /// Mass budget inputs (YAML or TOML); defaults to the demonstrator budget
    #[arg(long)]
    budget: Option<PathBuf>,

    /// Also write the per-item breakdown (.json for JSON, CSV otherwise, '-' for stdout)
    #[arg(long)]
    breakdown: Option<PathBuf>,

    /// Write one mass-file row per item instead of the aggregate
    #[arg(long, default_value_t = false)]
    per_item: bool,

    /// Log verbosity (error, warn, info, debug, trace)
    #[arg(long, default_value_t = log::LevelFilter::Info)]
    log_level: log::LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level);

    let airplane = load_or_default(cli.config.as_deref(), &cli.airfoil, false)?;
    let budget_config = match &cli.budget {
        Some(path) => load_mass_budget(path)?,
        None => MassBudgetConfig::default(),
    };

    let budget = estimate(&airplane, &budget_config)?;
    let total = budget.total();

    let options = MassFileOptions {
        per_item: cli.per_item,
        ..MassFileOptions::default()
    };
    write_mass_file(&cli.output, &budget, &options)?;
    if let Some(path) = &cli.breakdown {
        write_breakdown(path, &budget)?;
    }

    println!(
        "{}: {:.4} kg, CG ({:.4}, {:.4}, {:.4}) m -> {}",
        airplane.name,
        total.mass,
        total.x_cg,
        total.y_cg,
        total.z_cg,
        cli.output.display()
    );
    Ok(())
}
