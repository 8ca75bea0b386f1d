//! Network table definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::settings::Settings;

/// Pressure level a bus belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PressureLevel {
    #[serde(rename = "HP")]
    Hp,
    #[serde(rename = "MP")]
    Mp,
    #[serde(rename = "BP+")]
    BpPlus,
    #[serde(rename = "BP")]
    Bp,
}

impl PressureLevel {
    pub const ALL: [PressureLevel; 4] = [
        PressureLevel::Hp,
        PressureLevel::Mp,
        PressureLevel::BpPlus,
        PressureLevel::Bp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PressureLevel::Hp => "HP",
            PressureLevel::Mp => "MP",
            PressureLevel::BpPlus => "BP+",
            PressureLevel::Bp => "BP",
        }
    }
}

impl fmt::Display for PressureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown pressure level '{0}' (expected one of HP, MP, BP+, BP)")]
pub struct UnknownLevel(pub String);

impl FromStr for PressureLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PressureLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

/// Boundary role of a bus inside its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusRole {
    /// Fixed pressure (feeder or station low side).
    Source,
    /// Fixed demand (load or station high side).
    Sink,
    #[default]
    Passive,
}

impl fmt::Display for BusRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BusRole::Source => "SOURCE",
            BusRole::Sink => "SINK",
            BusRole::Passive => "PASSIVE",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bus {
    pub name: String,
    pub level: PressureLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(default)]
    pub role: BusRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pipe {
    pub name: String,
    pub from_bus: String,
    pub to_bus: String,
    pub length_m: f64,
    pub diameter_m: f64,
    #[serde(default = "default_material")]
    pub material: String,
    #[serde(default = "default_in_service")]
    pub in_service: bool,
}

fn default_material() -> String {
    "steel".to_string()
}

fn default_in_service() -> bool {
    true
}

/// Pressure-regulating link between two levels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    pub name: String,
    pub bus_high: String,
    pub bus_low: String,
    pub p_lim_kw: f64,
    /// Downstream operating pressure (absolute, Pa).
    pub p_pa: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feeder {
    pub name: String,
    pub bus: String,
    pub p_lim_kw: f64,
    /// Operating pressure (absolute, Pa).
    pub p_pa: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Load {
    pub name: String,
    pub bus: String,
    pub p_kw: f64,
    #[serde(default)]
    pub min_p_pa: f64,
    #[serde(default = "default_scaling")]
    pub scaling: f64,
}

fn default_scaling() -> f64 {
    1.0
}

/// Complete network: settings plus the five parameter tables, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Network {
    pub name: String,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub buses: Vec<Bus>,
    #[serde(default)]
    pub pipes: Vec<Pipe>,
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub feeders: Vec<Feeder>,
    #[serde(default)]
    pub loads: Vec<Load>,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "This gasnet network includes the following parameter tables:"
        )?;
        let tables = [
            ("bus", self.buses.len()),
            ("pipe", self.pipes.len()),
            ("station", self.stations.len()),
            ("feeder", self.feeders.len()),
            ("load", self.loads.len()),
        ];
        for (table, count) in tables.into_iter().filter(|(_, count)| *count > 0) {
            writeln!(f, "   - {table} ({count} elements)")?;
        }
        Ok(())
    }
}
