use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use gn_results::*;

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!("{}_{}_{}", prefix, std::process::id(), nanos))
}

fn manifest(run_id: &str, network: &str, timestamp: &str) -> RunManifest {
    RunManifest {
        run_id: run_id.to_string(),
        network_name: network.to_string(),
        timestamp: timestamp.to_string(),
        method: "NON-LINEAR".to_string(),
        levels: vec!["BP".to_string(), "MP".to_string()],
        solver_version: "0.1.0".to_string(),
    }
}

fn tables() -> ResultTables {
    ResultTables {
        bus: vec![BusResult {
            name: "BUS0".into(),
            p_pa: 102_200.0,
            p_bar: 1.02,
        }],
        pipe: vec![
            PipeResult {
                name: "PIPE0-4".into(),
                m_dot_kg_s: 2.1e-4,
                v_m_s: 0.15,
                p_kw: 8.0,
                loading_pct: 7.6,
            },
            PipeResult::idle("PIPE4-5"),
        ],
        feeder: vec![SupplyResult {
            name: "FEEDER".into(),
            m_dot_kg_s: 7.87e-4,
            p_kw: 30.0,
            loading_pct: 60.0,
        }],
        station: vec![],
    }
}

#[test]
fn save_list_load_roundtrip() {
    let network_dir = unique_temp_dir("gn_results_network");
    std::fs::create_dir_all(&network_dir).unwrap();
    let store = RunStore::for_network(&network_dir.join("net.yaml")).unwrap();

    store
        .save_run(&manifest("run-b", "simple", "2026-01-02T00:00:00Z"), &tables())
        .unwrap();
    store
        .save_run(&manifest("run-a", "simple", "2026-01-01T00:00:00Z"), &tables())
        .unwrap();
    store
        .save_run(&manifest("run-c", "other", "2026-01-03T00:00:00Z"), &ResultTables::default())
        .unwrap();

    assert!(store.has_run("run-a"));
    assert!(
        network_dir
            .join(".gasnet/runs/run-a/manifest.json")
            .is_file()
    );
    let runs = store.list_runs("simple").unwrap();
    let ids: Vec<_> = runs.iter().map(|m| m.run_id.as_str()).collect();
    assert_eq!(ids, ["run-a", "run-b"]);

    let loaded = store.load_results("run-b").unwrap();
    assert_eq!(loaded, tables());
    assert_eq!(loaded.pipe("PIPE4-5").unwrap().m_dot_kg_s, 0.0);
    assert!(store.load_results("run-c").unwrap().is_empty());

    store.delete_run("run-a").unwrap();
    assert!(!store.has_run("run-a"));
    assert!(matches!(
        store.load_manifest("run-a"),
        Err(ResultsError::RunNotFound { .. })
    ));

    std::fs::remove_dir_all(&network_dir).ok();
}

#[test]
fn display_renders_every_table() {
    let text = tables().to_string();
    assert!(text.contains("res_bus"));
    assert!(text.contains("PIPE4-5"));
    assert!(text.contains("res_feeder"));
    assert!(!text.contains("res_station"));
}
