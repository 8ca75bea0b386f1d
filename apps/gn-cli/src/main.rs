use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use gn_app::{AppResult, RunOptions, RunRequest, project_service, run_service};
use gn_network::Method;

#[derive(Parser)]
#[command(name = "gasnet")]
#[command(about = "gasnet CLI - steady-state gas distribution network solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate network tables and level supply
    Validate {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// Show the network tables and the pressure levels in solve order
    Levels {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// Solve the network and print the result tables
    Run {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
        /// LINEAR or NON-LINEAR; defaults to the method in the network settings
        #[arg(long)]
        method: Option<Method>,
        /// Directory for stored runs (defaults to .gasnet/runs next to the network file)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
    },
    /// List cached runs for a network
    Runs {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
        /// Directory for stored runs
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show the result tables of a cached run
    ShowRun {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
        /// Run ID to display
        run_id: String,
        /// Directory for stored runs
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Levels { network_path } => cmd_levels(&network_path),
        Commands::Run {
            network_path,
            method,
            out,
            no_cache,
        } => cmd_run(&network_path, method, out.as_deref(), !no_cache),
        Commands::Runs { network_path, out } => cmd_runs(&network_path, out.as_deref()),
        Commands::ShowRun {
            network_path,
            run_id,
            out,
        } => cmd_show_run(&network_path, &run_id, out.as_deref()),
    }
}

fn cmd_validate(network_path: &Path) -> AppResult<()> {
    println!("Validating network: {}", network_path.display());
    let network = project_service::load_network(network_path)?;
    project_service::validate_network(&network)?;
    println!("✓ Network is valid");
    Ok(())
}

fn cmd_levels(network_path: &Path) -> AppResult<()> {
    let network = project_service::load_network(network_path)?;
    print!("{network}");

    let levels = project_service::level_summaries(&network)?;
    if levels.is_empty() {
        println!("No buses in network");
        return Ok(());
    }
    println!("Pressure levels (solve order):");
    for l in levels {
        println!(
            "  {:<4} {:>9.0} Pa  {} buses, {} pipes  ({} source, {} sink, {} passive)",
            l.level.as_str(),
            l.nominal_pa,
            l.bus_count,
            l.pipe_count,
            l.sources,
            l.sinks,
            l.passive
        );
    }
    Ok(())
}

fn cmd_run(
    network_path: &Path,
    method: Option<Method>,
    store_dir: Option<&Path>,
    use_cache: bool,
) -> AppResult<()> {
    println!("Solving network: {}", network_path.display());

    let request = RunRequest {
        network_path,
        store_dir,
        options: RunOptions {
            method,
            use_cache,
            ..RunOptions::default()
        },
    };

    let response = match run_service::ensure_run(&request) {
        Ok(response) => response,
        Err(err) => {
            if err.is_convergence_failure() {
                eprintln!("hint: the nonlinear solve did not converge; try --method LINEAR");
            }
            return Err(err);
        }
    };

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.run_id);
    } else {
        println!(
            "✓ Solved ({}, levels {}) in {:.3} s: {}",
            response.manifest.method,
            response.manifest.levels.join(" → "),
            response.elapsed_s,
            response.run_id
        );
    }
    print!("{}", response.results);
    Ok(())
}

fn cmd_runs(network_path: &Path, store_dir: Option<&Path>) -> AppResult<()> {
    let runs = run_service::list_runs(network_path, store_dir)?;

    if runs.is_empty() {
        println!("No cached runs found for: {}", network_path.display());
    } else {
        println!("Cached runs for '{}':", network_path.display());
        for manifest in runs {
            println!(
                "  {} ({}, {})",
                manifest.run_id, manifest.method, manifest.timestamp
            );
        }
    }
    Ok(())
}

fn cmd_show_run(network_path: &Path, run_id: &str, store_dir: Option<&Path>) -> AppResult<()> {
    println!("Loading run: {}", run_id);

    let (manifest, results) = run_service::load_run(network_path, store_dir, run_id)?;
    println!(
        "Network '{}' solved {} with {}",
        manifest.network_name, manifest.timestamp, manifest.method
    );
    print!("{results}");
    Ok(())
}
