//! Run execution and caching service.

use std::path::Path;
use std::time::Instant;

use gn_core::units::{k, pa};
use gn_fluids::{FluidModel, NaturalGas};
use gn_graph::graphs_by_level;
use gn_network::{Method, Network, PressureLevel, validate_network};
use gn_results::{ResultTables, RunManifest, RunStore};
use gn_solver::{NewtonConfig, SolveSettings, solve_level};
use tracing::{debug, info, warn};

use crate::boundary::{StationFlows, level_boundary};
use crate::error::AppResult;
use crate::mapper::ResultMapper;
use crate::project_service;

/// Options for running a network.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Overrides the method stored in the network settings.
    pub method: Option<Method>,
    pub use_cache: bool,
    pub solver_version: String,
    pub newton: NewtonConfig,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            method: None,
            use_cache: true,
            solver_version: "0.1.0".to_string(),
            newton: NewtonConfig::default(),
        }
    }
}

/// Per-level summary of a finished solve.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelReport {
    pub level: PressureLevel,
    pub nodes: usize,
    pub edges: usize,
    pub iterations: usize,
}

/// Result of solving a network in memory.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub method: Method,
    /// Solved levels in solve order (lowest pressure first).
    pub levels: Vec<LevelReport>,
    pub results: ResultTables,
}

/// Request to execute a run on a network file.
pub struct RunRequest<'a> {
    pub network_path: &'a Path,
    /// Run store directory; defaults to `.gasnet/runs` next to the network file.
    pub store_dir: Option<&'a Path>,
    pub options: RunOptions,
}

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub manifest: RunManifest,
    pub results: ResultTables,
    pub loaded_from_cache: bool,
    pub elapsed_s: f64,
}

/// Solves every level of `network`, lowest pressure first.
///
/// Each level is solved with its own fluid properties. After a level is
/// solved, the flows its stations deliver become demands on the high side,
/// so the next level up sees them. Any level failure aborts the run and no
/// tables are produced.
pub fn run_network(network: &Network, options: &RunOptions) -> AppResult<RunOutcome> {
    let settings = &network.settings;
    let method = options.method.unwrap_or(settings.method);
    validate_network(network)?;

    let graphs = graphs_by_level(network)?;
    let gas = NaturalGas::default();
    let solve = SolveSettings {
        method,
        m_dot_ref: settings.m_dot_ref_kg_per_s,
        newton: options.newton.clone(),
    };

    let mut stations = StationFlows::default();
    let mut mapper = ResultMapper::new(network);
    let mut levels = Vec::with_capacity(graphs.len());

    for graph in &graphs {
        let level = graph.level();
        if graph.edge_count() == 0 {
            warn!(%level, buses = graph.node_count(), "level has no pipe in service");
        }
        let reference = settings.reference_pressure_pa(level);
        let fluid = gas.properties(k(settings.ground_temperature_k), pa(reference))?;
        debug!(
            %level,
            reference_pa = reference,
            rho = fluid.density.value,
            mu = fluid.viscosity.value,
            "level fluid"
        );

        let boundary = level_boundary(network, level, &stations)?;
        let solution = solve_level(graph, fluid, &boundary, &solve)?;

        mapper.record_level(graph, &solution);
        stations.record(network, graph, &solution);
        levels.push(LevelReport {
            level,
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            iterations: solution.iterations,
        });
    }

    info!(
        network = %network.name,
        %method,
        levels = levels.len(),
        "network solved"
    );

    Ok(RunOutcome {
        method,
        levels,
        results: mapper.finish()?,
    })
}

/// Execute a run on a network file, or load it from the run store.
pub fn ensure_run(request: &RunRequest) -> AppResult<RunResponse> {
    let started = Instant::now();
    let network = project_service::load_network(request.network_path)?;
    let method = request.options.method.unwrap_or(network.settings.method);

    let run_id = gn_results::compute_run_id(&network, method, &request.options.solver_version);
    let store = open_store(request.network_path, request.store_dir)?;

    if request.options.use_cache && store.has_run(&run_id) {
        let manifest = store.load_manifest(&run_id)?;
        let results = store.load_results(&run_id)?;
        info!(%run_id, "loaded cached run");
        return Ok(RunResponse {
            run_id,
            manifest,
            results,
            loaded_from_cache: true,
            elapsed_s: started.elapsed().as_secs_f64(),
        });
    }

    let options = RunOptions {
        method: Some(method),
        ..request.options.clone()
    };
    let outcome = run_network(&network, &options)?;

    let manifest = RunManifest {
        run_id: run_id.clone(),
        network_name: network.name.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        method: method.as_str().to_string(),
        levels: outcome
            .levels
            .iter()
            .map(|l| l.level.as_str().to_string())
            .collect(),
        solver_version: request.options.solver_version.clone(),
    };
    store.save_run(&manifest, &outcome.results)?;

    Ok(RunResponse {
        run_id,
        manifest,
        results: outcome.results,
        loaded_from_cache: false,
        elapsed_s: started.elapsed().as_secs_f64(),
    })
}

fn open_store(network_path: &Path, store_dir: Option<&Path>) -> AppResult<RunStore> {
    let store = match store_dir {
        Some(dir) => RunStore::new(dir.to_path_buf())?,
        None => RunStore::for_network(network_path)?,
    };
    Ok(store)
}

/// List stored runs of the network in a file, most recent first.
pub fn list_runs(network_path: &Path, store_dir: Option<&Path>) -> AppResult<Vec<RunManifest>> {
    let network = project_service::load_network(network_path)?;
    let store = open_store(network_path, store_dir)?;

    let mut runs = store.list_runs(&network.name)?;
    runs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(runs)
}

/// Load a specific run.
pub fn load_run(
    network_path: &Path,
    store_dir: Option<&Path>,
    run_id: &str,
) -> AppResult<(RunManifest, ResultTables)> {
    let store = open_store(network_path, store_dir)?;

    let manifest = store.load_manifest(run_id)?;
    let results = store.load_results(run_id)?;

    Ok((manifest, results))
}
