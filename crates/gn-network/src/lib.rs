//! gn-network: gas network tables, settings, editing and validation.

pub mod network;
pub mod schema;
pub mod settings;
pub mod validate;

pub use schema::*;
pub use settings::{LevelPressures, Method, Settings};
pub use validate::{ValidationError, validate_network};

pub type NetworkResult<T> = Result<T, NetworkError>;

#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads a network file; roles are derived from the attached feeders, stations and loads.
pub fn load_yaml(path: &std::path::Path) -> NetworkResult<Network> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn from_yaml_str(content: &str) -> NetworkResult<Network> {
    let mut network: Network = serde_yaml::from_str(content)?;
    validate_network(&network)?;
    network.assign_roles();
    Ok(network)
}

pub fn save_yaml(path: &std::path::Path, network: &Network) -> NetworkResult<()> {
    validate_network(network)?;
    let content = serde_yaml::to_string(network)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> NetworkResult<Network> {
    let content = std::fs::read_to_string(path)?;
    let mut network: Network = serde_json::from_str(&content)?;
    validate_network(&network)?;
    network.assign_roles();
    Ok(network)
}

pub fn save_json(path: &std::path::Path, network: &Network) -> NetworkResult<()> {
    validate_network(network)?;
    let content = serde_json::to_string_pretty(network)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Picks the loader from the file extension (`.json`, otherwise YAML).
pub fn load_network(path: &std::path::Path) -> NetworkResult<Network> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}
