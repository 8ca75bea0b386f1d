//! Network validation logic.
//!
//! The same checks guard the editing API in [`crate::network`] and files
//! loaded from disk.

use crate::schema::{Bus, Feeder, Load, Network, Pipe, PressureLevel, Station, UnknownLevel};
use crate::settings::Settings;
use std::collections::{HashMap, HashSet};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error(transparent)]
    UnknownLevel(#[from] UnknownLevel),

    #[error("Duplicate name: {name} in {table}")]
    DuplicateName { name: String, table: &'static str },

    #[error("The bus {bus} does not exist ({context})")]
    MissingBus { bus: String, context: String },

    #[error("The buses {from_bus} and {to_bus} have a different pressure level")]
    LevelMismatch { from_bus: String, to_bus: String },

    #[error("The buses {bus_high} and {bus_low} have the same pressure level")]
    SameLevel { bus_high: String, bus_low: String },

    #[error("Station {station}: high bus {bus_high} is not on a higher level than low bus {bus_low}")]
    InvertedStation {
        station: String,
        bus_high: String,
        bus_low: String,
    },

    #[error("Pipe {pipe} connects bus {bus} to itself")]
    SelfLoop { pipe: String, bus: String },

    #[error("Bus {bus} has more than one fixed-pressure supply ({first}, {second})")]
    ConflictingSupply {
        bus: String,
        first: String,
        second: String,
    },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_network(network: &Network) -> Result<(), ValidationError> {
    check_settings(&network.settings)?;
    check_unique("bus", network.buses.iter().map(|b| b.name.as_str()))?;
    check_unique("pipe", network.pipes.iter().map(|p| p.name.as_str()))?;
    check_unique("station", network.stations.iter().map(|s| s.name.as_str()))?;
    check_unique("feeder", network.feeders.iter().map(|f| f.name.as_str()))?;
    check_unique("load", network.loads.iter().map(|l| l.name.as_str()))?;

    let levels: HashMap<&str, PressureLevel> = network
        .buses
        .iter()
        .map(|b| (b.name.as_str(), b.level))
        .collect();
    let lookup = |name: &str| levels.get(name).copied();

    for pipe in &network.pipes {
        check_pipe(pipe, lookup)?;
    }
    for station in &network.stations {
        check_station(network, station, lookup)?;
    }
    for feeder in &network.feeders {
        check_feeder(feeder, lookup)?;
    }
    for load in &network.loads {
        check_load(load, lookup)?;
    }

    let mut supplies: HashMap<&str, &str> = HashMap::new();
    let attachments = network
        .feeders
        .iter()
        .map(|f| (f.bus.as_str(), f.name.as_str()))
        .chain(
            network
                .stations
                .iter()
                .map(|s| (s.bus_low.as_str(), s.name.as_str())),
        );
    for (bus, name) in attachments {
        if let Some(first) = supplies.insert(bus, name) {
            return Err(ValidationError::ConflictingSupply {
                bus: bus.to_string(),
                first: first.to_string(),
                second: name.to_string(),
            });
        }
    }

    Ok(())
}

fn check_unique<'a>(
    table: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ValidationError::DuplicateName {
                name: name.to_string(),
                table,
            });
        }
    }
    Ok(())
}

pub(crate) fn check_new_name<'a>(
    table: &'static str,
    mut existing: impl Iterator<Item = &'a str>,
    name: &str,
) -> Result<(), ValidationError> {
    if existing.any(|n| n == name) {
        return Err(ValidationError::DuplicateName {
            name: name.to_string(),
            table,
        });
    }
    Ok(())
}

pub(crate) fn check_bus(bus: &Bus) -> Result<(), ValidationError> {
    if bus.name.trim().is_empty() {
        return Err(invalid("bus.name", &bus.name, "must not be empty"));
    }
    Ok(())
}

fn require_level(
    bus: &str,
    context: &str,
    lookup: impl Fn(&str) -> Option<PressureLevel>,
) -> Result<PressureLevel, ValidationError> {
    lookup(bus).ok_or_else(|| ValidationError::MissingBus {
        bus: bus.to_string(),
        context: context.to_string(),
    })
}

pub(crate) fn check_pipe(
    pipe: &Pipe,
    lookup: impl Fn(&str) -> Option<PressureLevel>,
) -> Result<(), ValidationError> {
    let context = format!("pipe {}", pipe.name);
    let from_level = require_level(&pipe.from_bus, &context, &lookup)?;
    let to_level = require_level(&pipe.to_bus, &context, &lookup)?;
    if from_level != to_level {
        return Err(ValidationError::LevelMismatch {
            from_bus: pipe.from_bus.clone(),
            to_bus: pipe.to_bus.clone(),
        });
    }
    if pipe.from_bus == pipe.to_bus {
        return Err(ValidationError::SelfLoop {
            pipe: pipe.name.clone(),
            bus: pipe.from_bus.clone(),
        });
    }
    positive("pipe.length_m", pipe.length_m)?;
    positive("pipe.diameter_m", pipe.diameter_m)?;
    Ok(())
}

pub(crate) fn check_station(
    network: &Network,
    station: &Station,
    lookup: impl Fn(&str) -> Option<PressureLevel>,
) -> Result<(), ValidationError> {
    let context = format!("station {}", station.name);
    let high = require_level(&station.bus_high, &context, &lookup)?;
    let low = require_level(&station.bus_low, &context, &lookup)?;
    if high == low {
        return Err(ValidationError::SameLevel {
            bus_high: station.bus_high.clone(),
            bus_low: station.bus_low.clone(),
        });
    }
    let nominal = &network.settings.levels;
    if nominal.nominal(high) <= nominal.nominal(low) {
        return Err(ValidationError::InvertedStation {
            station: station.name.clone(),
            bus_high: station.bus_high.clone(),
            bus_low: station.bus_low.clone(),
        });
    }
    positive("station.p_lim_kw", station.p_lim_kw)?;
    finite("station.p_pa", station.p_pa)?;
    Ok(())
}

pub(crate) fn check_feeder(
    feeder: &Feeder,
    lookup: impl Fn(&str) -> Option<PressureLevel>,
) -> Result<(), ValidationError> {
    require_level(&feeder.bus, &format!("feeder {}", feeder.name), &lookup)?;
    positive("feeder.p_lim_kw", feeder.p_lim_kw)?;
    finite("feeder.p_pa", feeder.p_pa)?;
    Ok(())
}

pub(crate) fn check_load(
    load: &Load,
    lookup: impl Fn(&str) -> Option<PressureLevel>,
) -> Result<(), ValidationError> {
    require_level(&load.bus, &format!("load {}", load.name), &lookup)?;
    finite("load.p_kw", load.p_kw)?;
    finite("load.min_p_pa", load.min_p_pa)?;
    finite("load.scaling", load.scaling)?;
    if load.scaling < 0.0 {
        return Err(invalid("load.scaling", load.scaling, "must be non-negative"));
    }
    Ok(())
}

pub(crate) fn check_settings(settings: &Settings) -> Result<(), ValidationError> {
    positive("settings.ground_temperature_k", settings.ground_temperature_k)?;
    positive("settings.lhv_j_per_kg", settings.lhv_j_per_kg)?;
    positive("settings.v_max_m_per_s", settings.v_max_m_per_s)?;
    positive("settings.m_dot_ref_kg_per_s", settings.m_dot_ref_kg_per_s)?;
    positive("settings.atmospheric_pa", settings.atmospheric_pa)?;
    Ok(())
}

fn finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(invalid(field, value, "must be finite"));
    }
    Ok(())
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(invalid(field, value, "must be positive"));
    }
    Ok(())
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        check_settings(&Settings::default()).unwrap();
    }

    #[test]
    fn non_positive_settings_are_rejected() {
        let cases: [(&str, fn(&mut Settings)); 4] = [
            ("settings.lhv_j_per_kg", |s| s.lhv_j_per_kg = 0.0),
            ("settings.v_max_m_per_s", |s| s.v_max_m_per_s = 0.0),
            ("settings.m_dot_ref_kg_per_s", |s| s.m_dot_ref_kg_per_s = -1e-3),
            ("settings.ground_temperature_k", |s| s.ground_temperature_k = f64::NAN),
        ];
        for (field, spoil) in cases {
            let mut settings = Settings::default();
            spoil(&mut settings);
            match check_settings(&settings) {
                Err(ValidationError::InvalidValue { field: f, .. }) => assert_eq!(f, field),
                other => panic!("{field}: expected InvalidValue, got {other:?}"),
            }
        }
    }
}
