//! Result data types.

use serde::{Deserialize, Serialize};
use std::fmt;

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    pub run_id: RunId,
    pub network_name: String,
    pub timestamp: String,
    /// `LINEAR` or `NON-LINEAR`
    pub method: String,
    /// Levels solved, in solve order.
    pub levels: Vec<String>,
    pub solver_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusResult {
    pub name: String,
    pub p_pa: f64,
    pub p_bar: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipeResult {
    pub name: String,
    pub m_dot_kg_s: f64,
    pub v_m_s: f64,
    pub p_kw: f64,
    pub loading_pct: f64,
}

impl PipeResult {
    /// Row reported for a pipe that is out of service.
    pub fn idle(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            m_dot_kg_s: 0.0,
            v_m_s: 0.0,
            p_kw: 0.0,
            loading_pct: 0.0,
        }
    }
}

/// Feeder and station rows share one shape: supply is positive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplyResult {
    pub name: String,
    pub m_dot_kg_s: f64,
    pub p_kw: f64,
    pub loading_pct: f64,
}

pub type FeederResult = SupplyResult;
pub type StationResult = SupplyResult;

/// Results of one run, one row per entity in network table order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResultTables {
    pub bus: Vec<BusResult>,
    pub pipe: Vec<PipeResult>,
    pub feeder: Vec<FeederResult>,
    pub station: Vec<StationResult>,
}

impl ResultTables {
    pub fn is_empty(&self) -> bool {
        self.bus.is_empty() && self.pipe.is_empty() && self.feeder.is_empty() && self.station.is_empty()
    }

    pub fn bus(&self, name: &str) -> Option<&BusResult> {
        self.bus.iter().find(|r| r.name == name)
    }

    pub fn pipe(&self, name: &str) -> Option<&PipeResult> {
        self.pipe.iter().find(|r| r.name == name)
    }

    pub fn feeder(&self, name: &str) -> Option<&FeederResult> {
        self.feeder.iter().find(|r| r.name == name)
    }

    pub fn station(&self, name: &str) -> Option<&StationResult> {
        self.station.iter().find(|r| r.name == name)
    }
}

impl fmt::Display for ResultTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "res_bus")?;
        writeln!(f, "  {:<16} {:>12} {:>8}", "name", "p_Pa", "p_bar")?;
        for r in &self.bus {
            writeln!(f, "  {:<16} {:>12.0} {:>8.2}", r.name, r.p_pa, r.p_bar)?;
        }
        writeln!(f, "res_pipe")?;
        writeln!(
            f,
            "  {:<16} {:>14} {:>8} {:>10} {:>10}",
            "name", "m_dot_kg/s", "v_m/s", "p_kW", "loading_%"
        )?;
        for r in &self.pipe {
            writeln!(
                f,
                "  {:<16} {:>14.6e} {:>8.2} {:>10.1} {:>10.1}",
                r.name, r.m_dot_kg_s, r.v_m_s, r.p_kw, r.loading_pct
            )?;
        }
        for (title, rows) in [("res_feeder", &self.feeder), ("res_station", &self.station)] {
            if rows.is_empty() {
                continue;
            }
            writeln!(f, "{title}")?;
            writeln!(
                f,
                "  {:<16} {:>14} {:>10} {:>10}",
                "name", "m_dot_kg/s", "p_kW", "loading_%"
            )?;
            for r in rows {
                writeln!(
                    f,
                    "  {:<16} {:>14.6e} {:>10.1} {:>10.1}",
                    r.name, r.m_dot_kg_s, r.p_kw, r.loading_pct
                )?;
            }
        }
        Ok(())
    }
}
