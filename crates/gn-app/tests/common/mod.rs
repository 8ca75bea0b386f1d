#![allow(dead_code)]

use gn_network::{Network, PressureLevel};

pub const BP_EDGES: [(u32, u32); 8] = [(0, 4), (0, 5), (4, 5), (1, 2), (1, 3), (1, 4), (2, 3), (2, 4)];

/// Six BP buses fed by two stations from a three-bus MP level with one feeder.
pub fn simple_network() -> Network {
    let mut net = Network::new("simple");
    for n in [0, 4, 5, 1, 2, 3] {
        net.create_bus(&format!("BUS{n}"), PressureLevel::Bp, None)
            .unwrap();
    }
    for n in ["0", "3", "F"] {
        net.create_bus(&format!("BUSMP{n}"), PressureLevel::Mp, None)
            .unwrap();
    }
    for (u, v) in BP_EDGES {
        net.create_pipe(
            &format!("PIPE{u}-{v}"),
            &format!("BUS{u}"),
            &format!("BUS{v}"),
            1e4,
            0.05,
            "steel",
        )
        .unwrap();
    }
    for i in [2, 4, 5] {
        net.create_load(&format!("LOAD{i}"), &format!("BUS{i}"), 10.0, 0.0, 1.0)
            .unwrap();
    }
    for i in [0, 3] {
        net.create_station(
            &format!("STATION{i}"),
            &format!("BUSMP{i}"),
            &format!("BUS{i}"),
            50.0,
            1.022e5,
        )
        .unwrap();
    }
    net.create_pipe("PIPEMP0-3", "BUSMP0", "BUSMP3", 300.0, 0.05, "steel")
        .unwrap();
    net.create_pipe("PIPEMPF-0", "BUSMPF", "BUSMP0", 300.0, 0.05, "steel")
        .unwrap();
    net.create_feeder("FEEDER", "BUSMPF", 50.0, 0.9e5).unwrap();
    net
}

pub fn unique_temp_dir(prefix: &str) -> std::path::PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!("{}_{}_{}", prefix, std::process::id(), nanos))
}

pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{what}: expected {expected}, got {actual} (tol {tol})"
    );
}
