use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use pw_app::{AppResult, analysis_service, report_service, scenario_service};
use pw_report::CURRENCY;

#[derive(Parser)]
#[command(name = "pw-cli")]
#[command(about = "Pumpwise CLI - Pumping system head-loss and energy-cost analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and values
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// List the fluids available in the catalog
    Fluids,
    /// Evaluate a scenario and print the analysis
    Analyze {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Write the report data as JSON to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Export the cost-vs-diameter sweep series
    Sweep {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Fluids => cmd_fluids(),
        Commands::Analyze {
            scenario_path,
            report,
        } => cmd_analyze(&scenario_path, report.as_deref()),
        Commands::Sweep {
            scenario_path,
            output,
        } => cmd_sweep(&scenario_path, output.as_deref()),
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = scenario_service::load_scenario(scenario_path)?;
    let summary = scenario_service::scenario_summary(&scenario);
    println!("✓ Scenario is valid");
    println!("  Name:  {}", summary.name);
    println!("  Fluid: {}", summary.fluid);
    println!(
        "  Head:  {}",
        if summary.manual_head {
            "manual"
        } else {
            "from piping"
        }
    );
    if summary.has_sweep {
        println!("  Sweep: configured");
    }
    Ok(())
}

fn cmd_fluids() -> AppResult<()> {
    println!("Available fluids:");
    for fluid in pw_fluids::catalog() {
        println!(
            "  {:<10} {:<16} rho = {:6.1} kg/m³   nu = {:.3e} m²/s",
            fluid.canonical_id,
            fluid.display_name,
            fluid.density_kg_per_m3,
            fluid.kinematic_viscosity_m2_per_s
        );
    }
    Ok(())
}

fn cmd_analyze(scenario_path: &Path, report_path: Option<&Path>) -> AppResult<()> {
    let scenario = scenario_service::load_scenario(scenario_path)?;
    let evaluation = analysis_service::evaluate_scenario(&scenario)?;

    println!("Analysis: {}", scenario.name);
    println!("  Fluid: {}", evaluation.fluid.display_name);

    if let Some(losses) = &evaluation.hydraulics {
        println!("\nHydraulics:");
        println!("  Total head:  {:.2} m", evaluation.total_head_m);
        println!("  Major loss:  {:.2} m", losses.major_loss_m);
        println!("  Minor loss:  {:.2} m", losses.minor_loss_m);
        println!("  Velocity:    {:.2} m/s", losses.velocity_m_per_s);
    } else {
        println!("  Total head: {:.2} m (manual)", evaluation.total_head_m);
    }

    let monthly_cost =
        evaluation.energy.monthly_consumption_kwh * scenario.operation.tariff_per_kwh;
    println!("\nPower and cost:");
    println!(
        "  Electrical power: {:.2} kW",
        evaluation.energy.electrical_power_kw
    );
    println!(
        "  Monthly usage:    {:.1} kWh ({CURRENCY} {:.2})",
        evaluation.energy.monthly_consumption_kwh, monthly_cost
    );
    println!(
        "  Annual cost:      {CURRENCY} {:.2}",
        evaluation.energy.annual_cost
    );

    println!("\nSuggestions:");
    for advisory in &evaluation.advisories {
        println!("  - {}", advisory.message());
    }

    if let Some(series) = &evaluation.sweep {
        if series.is_empty() {
            println!("\nSweep range is unusable (needs min < max and a positive step); no series generated");
        } else {
            println!(
                "\nSweep: {} samples from {} mm to {} mm",
                series.len(),
                series[0].diameter_mm,
                series[series.len() - 1].diameter_mm
            );
        }
    }

    if let Some(path) = report_path {
        report_service::export_report(path, &scenario, &evaluation)?;
        println!("\n✓ Report data written to {}", path.display());
    }

    Ok(())
}

fn cmd_sweep(scenario_path: &Path, output: Option<&Path>) -> AppResult<()> {
    let scenario = scenario_service::load_scenario(scenario_path)?;
    let evaluation = analysis_service::evaluate_scenario(&scenario)?;

    let Some(series) = &evaluation.sweep else {
        println!("Scenario configures no sweep (manual head, or sweep section missing)");
        return Ok(());
    };
    if series.is_empty() {
        println!("Sweep range is unusable (needs min < max and a positive step); nothing to export");
        return Ok(());
    }

    if let Some(path) = output {
        let count = report_service::export_sweep_csv(path, &evaluation)?;
        println!("✓ Exported {} samples to {}", count, path.display());
    } else {
        let points = report_service::sweep_points(&evaluation);
        print!("{}", pw_report::sweep_series_csv(&points));
    }

    Ok(())
}
