use gn_network::*;

fn fix_create() -> Network {
    let mut net = Network::new("fixture");

    net.create_bus("BUSF", PressureLevel::Mp, None).unwrap();
    net.create_bus("BUS0", PressureLevel::Mp, None).unwrap();
    net.create_bus("BUS1", PressureLevel::Bp, None).unwrap();
    net.create_bus("BUS2", PressureLevel::Bp, None).unwrap();
    net.create_bus("BUS3", PressureLevel::Bp, None).unwrap();

    net.create_load("LOAD2", "BUS2", 10.0, 0.0, 1.0).unwrap();
    net.create_load("LOAD3", "BUS3", 15.0, 0.0, 1.0).unwrap();

    net.create_pipe("PIPE0", "BUSF", "BUS0", 1000.0, 0.05, "steel")
        .unwrap();
    net.create_pipe("PIPE1", "BUS1", "BUS2", 4000.0, 0.05, "steel")
        .unwrap();
    net.create_pipe("PIPE2", "BUS1", "BUS3", 5000.0, 0.05, "steel")
        .unwrap();
    net.create_pipe("PIPE3", "BUS2", "BUS3", 3000.0, 0.05, "steel")
        .unwrap();

    net.create_station("STATION", "BUS0", "BUS1", 50.0, 1.022e5)
        .unwrap();
    net.create_feeder("FEEDER", "BUSF", 50.0, 4.5e5).unwrap();
    net
}

#[test]
fn table_lengths_after_creation() {
    let net = fix_create();
    assert_eq!(net.buses.len(), 5);
    assert_eq!(net.pipes.len(), 4);
    assert_eq!(net.loads.len(), 2);
    assert_eq!(net.feeders.len(), 1);
    assert_eq!(net.stations.len(), 1);
    validate_network(&net).expect("fixture should validate");
}

#[test]
fn roles_follow_attachments() {
    let net = fix_create();
    let role = |name: &str| net.bus(name).unwrap().role;
    assert_eq!(role("BUSF"), BusRole::Source);
    assert_eq!(role("BUS0"), BusRole::Sink);
    assert_eq!(role("BUS1"), BusRole::Source);
    assert_eq!(role("BUS2"), BusRole::Sink);
    assert_eq!(role("BUS3"), BusRole::Sink);
}

#[test]
fn unknown_level_is_rejected() {
    let err = "XX".parse::<PressureLevel>().unwrap_err();
    assert!(err.to_string().contains("XX"));
    assert_eq!("bp+".parse::<PressureLevel>().unwrap(), PressureLevel::BpPlus);
}

#[test]
fn duplicate_bus_is_rejected() {
    let mut net = fix_create();
    let err = net
        .create_bus("BUS1", PressureLevel::Bp, None)
        .unwrap_err();
    assert!(matches!(err, ValidationError::DuplicateName { table: "bus", .. }));
    assert_eq!(net.buses.len(), 5);
}

#[test]
fn pipe_to_missing_bus_is_rejected() {
    let mut net = fix_create();
    let err = net
        .create_pipe("PIPEX", "BUS1", "BUSX", 100.0, 0.05, "steel")
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingBus {
            bus: "BUSX".to_string(),
            context: "pipe PIPEX".to_string(),
        }
    );
    assert_eq!(net.pipes.len(), 4);
}

#[test]
fn pipe_across_levels_is_rejected() {
    let mut net = fix_create();
    let err = net
        .create_pipe("PIPEX", "BUS0", "BUS1", 100.0, 0.05, "steel")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "The buses BUS0 and BUS1 have a different pressure level"
    );
    assert_eq!(net.pipes.len(), 4);
}

#[test]
fn station_on_one_level_is_rejected() {
    let mut net = fix_create();
    let err = net
        .create_station("STATION2", "BUS2", "BUS3", 50.0, 0.025e5)
        .unwrap_err();
    assert!(matches!(err, ValidationError::SameLevel { .. }));
    assert_eq!(net.stations.len(), 1);
}

#[test]
fn inverted_station_is_rejected() {
    let mut net = fix_create();
    net.create_bus("BUS4", PressureLevel::Bp, None).unwrap();
    let err = net
        .create_station("UPSIDE", "BUS4", "BUSF", 50.0, 1.0e5)
        .unwrap_err();
    assert!(matches!(err, ValidationError::InvertedStation { .. }));
}

#[test]
fn non_positive_geometry_is_rejected() {
    let mut net = fix_create();
    let err = net
        .create_pipe("PIPEX", "BUS1", "BUS2", 0.0, 0.05, "steel")
        .unwrap_err();
    assert!(matches!(err, ValidationError::InvalidValue { .. }));
}

#[test]
fn display_lists_parameter_tables() {
    let net = fix_create();
    let text = net.to_string();
    assert!(text.contains("This gasnet network includes the following parameter tables:"));
    assert!(text.contains("- bus (5 elements)"));
    assert!(!text.contains("results"));
}
