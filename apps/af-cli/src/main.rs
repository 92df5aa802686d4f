use af_network::NetworkSnapshot;
use af_scenario::{ScenarioResult, build_run};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "af-cli")]
#[command(about = "Air-flow network simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and structure
    Validate {
        /// Path to the scenario file (YAML, or JSON by extension)
        scenario_path: PathBuf,
    },
    /// List the networks of a scenario
    Networks {
        /// Path to the scenario file
        scenario_path: PathBuf,
    },
    /// Step a scenario and print network state
    Run {
        /// Path to the scenario file
        scenario_path: PathBuf,
        /// Number of steps to run
        #[arg(long, default_value_t = 10)]
        ticks: u64,
        /// Print snapshots as JSON lines
        #[arg(long)]
        json: bool,
        /// Print the diagnostic report of every network at the end
        #[arg(long)]
        dump: bool,
    },
}

fn main() -> ScenarioResult<()> {
    // Logs go to stderr so `run --json` output stays machine-readable.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Networks { scenario_path } => cmd_networks(&scenario_path),
        Commands::Run {
            scenario_path,
            ticks,
            json,
            dump,
        } => cmd_run(&scenario_path, ticks, json, dump),
    }
}

fn cmd_validate(scenario_path: &Path) -> ScenarioResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    af_scenario::load(scenario_path)?;
    println!("✓ Scenario is valid");
    Ok(())
}

fn cmd_networks(scenario_path: &Path) -> ScenarioResult<()> {
    let scenario = af_scenario::load(scenario_path)?;

    if scenario.networks.is_empty() {
        println!("No networks found in scenario");
        return Ok(());
    }

    println!("Networks in '{}':", scenario.name);
    for (idx, net) in scenario.networks.iter().enumerate() {
        println!(
            "  {} - {} ({} producers, {} temp controls, {} consumers, {} connectors)",
            idx,
            net.flow_type,
            net.producers.len(),
            net.temp_controls.len(),
            net.consumers.len(),
            net.connectors.len()
        );
    }
    Ok(())
}

fn cmd_run(scenario_path: &Path, ticks: u64, json: bool, dump: bool) -> ScenarioResult<()> {
    let scenario = af_scenario::load(scenario_path)?;
    let mut run = build_run(&scenario)?;

    if !json {
        println!("Running '{}' for {} ticks", run.name(), ticks);
    }

    for _ in 0..ticks {
        let snaps = run.step()?;
        let tick = run.ticks();
        for snap in &snaps {
            if json {
                println!("{}", serde_json::json!({ "tick": tick, "network": snap }));
            } else {
                print_snapshot(tick, snap);
            }
        }
    }

    tracing::info!(ticks = run.ticks(), networks = run.scheduler().len(), "run finished");

    if dump {
        for network in run.scheduler().networks() {
            print!("{}", network.debug_string());
        }
    }
    Ok(())
}

fn print_snapshot(tick: u64, snap: &NetworkSnapshot) {
    let s = &snap.state;
    println!(
        "[{:>4}] grid {:>2} {:<6} intake {:>8.2} exhaust {:>8.2} T_in {:>7.2} T_out {:>7.2} TE {:>5.2} FE {:>4.2}",
        tick,
        snap.grid_id,
        snap.flow_type,
        s.current_intake_air,
        s.current_exhaust_air,
        s.average_intake_temperature,
        s.average_converted_temperature,
        s.thermal_efficiency,
        s.flow_efficiency
    );
}
