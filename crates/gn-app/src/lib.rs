//! Shared application service layer for gasnet.
//!
//! Loads and validates networks, runs the level-by-level solve, maps
//! solutions to result tables and manages stored runs. Used by the CLI.

pub mod boundary;
pub mod error;
pub mod mapper;
pub mod project_service;
pub mod run_service;

pub use boundary::{StationFlows, level_boundary, load_mass_flow};
pub use error::{AppError, AppResult};
pub use mapper::ResultMapper;
pub use project_service::{
    LevelSummary, level_summaries, load_network, save_network, validate_network,
};
pub use run_service::{
    LevelReport, RunOptions, RunOutcome, RunRequest, RunResponse, ensure_run, list_runs, load_run,
    run_network,
};
