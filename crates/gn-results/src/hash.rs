//! Content-based hashing for run IDs.

use gn_network::{Method, Network};
use sha2::{Digest, Sha256};

pub fn compute_run_id(network: &Network, method: Method, solver_version: &str) -> String {
    let mut hasher = Sha256::new();

    let network_json = serde_json::to_string(network).unwrap_or_default();
    hasher.update(network_json.as_bytes());
    hasher.update(method.as_str().as_bytes());
    hasher.update(solver_version.as_bytes());

    format!("{:x}", hasher.finalize())
}
