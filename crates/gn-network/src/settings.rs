//! Run settings carried by the network file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::schema::PressureLevel;

/// Solution strategy for every level of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "LINEAR")]
    Linear,
    #[default]
    #[serde(rename = "NON-LINEAR")]
    NonLinear,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Linear => "LINEAR",
            Method::NonLinear => "NON-LINEAR",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('_', "-").as_str() {
            "LINEAR" => Ok(Method::Linear),
            "NON-LINEAR" | "NONLINEAR" => Ok(Method::NonLinear),
            other => Err(format!(
                "unknown method '{other}' (expected LINEAR or NON-LINEAR)"
            )),
        }
    }
}

/// Nominal gauge pressure of each level in Pa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelPressures {
    #[serde(rename = "HP", default = "default_hp")]
    pub hp: f64,
    #[serde(rename = "MP", default = "default_mp")]
    pub mp: f64,
    #[serde(rename = "BP+", default = "default_bp_plus")]
    pub bp_plus: f64,
    #[serde(rename = "BP", default = "default_bp")]
    pub bp: f64,
}

fn default_hp() -> f64 {
    5.0e5
}
fn default_mp() -> f64 {
    1.0e5
}
fn default_bp_plus() -> f64 {
    0.1e5
}
fn default_bp() -> f64 {
    0.025e5
}

impl Default for LevelPressures {
    fn default() -> Self {
        Self {
            hp: default_hp(),
            mp: default_mp(),
            bp_plus: default_bp_plus(),
            bp: default_bp(),
        }
    }
}

impl LevelPressures {
    pub fn nominal(&self, level: PressureLevel) -> f64 {
        match level {
            PressureLevel::Hp => self.hp,
            PressureLevel::Mp => self.mp,
            PressureLevel::BpPlus => self.bp_plus,
            PressureLevel::Bp => self.bp,
        }
    }

    /// All levels sorted by ascending nominal pressure.
    pub fn ascending(&self) -> Vec<PressureLevel> {
        let mut levels = PressureLevel::ALL.to_vec();
        levels.sort_by(|a, b| self.nominal(*a).total_cmp(&self.nominal(*b)));
        levels
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_ground_temperature_k")]
    pub ground_temperature_k: f64,
    #[serde(default)]
    pub method: Method,
    #[serde(default = "default_lhv_j_per_kg")]
    pub lhv_j_per_kg: f64,
    #[serde(default = "default_v_max_m_per_s")]
    pub v_max_m_per_s: f64,
    #[serde(default = "default_m_dot_ref_kg_per_s")]
    pub m_dot_ref_kg_per_s: f64,
    #[serde(default = "default_atmospheric_pa")]
    pub atmospheric_pa: f64,
    #[serde(default)]
    pub levels: LevelPressures,
}

fn default_ground_temperature_k() -> f64 {
    283.15
}
fn default_lhv_j_per_kg() -> f64 {
    38.1e6
}
fn default_v_max_m_per_s() -> f64 {
    2.0
}
fn default_m_dot_ref_kg_per_s() -> f64 {
    1e-3
}
fn default_atmospheric_pa() -> f64 {
    101_325.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ground_temperature_k: default_ground_temperature_k(),
            method: Method::default(),
            lhv_j_per_kg: default_lhv_j_per_kg(),
            v_max_m_per_s: default_v_max_m_per_s(),
            m_dot_ref_kg_per_s: default_m_dot_ref_kg_per_s(),
            atmospheric_pa: default_atmospheric_pa(),
            levels: LevelPressures::default(),
        }
    }
}

impl Settings {
    /// Absolute reference pressure of a level (atmospheric plus nominal gauge).
    pub fn reference_pressure_pa(&self, level: PressureLevel) -> f64 {
        self.atmospheric_pa + self.levels.nominal(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_levels_ascend_from_bp_to_hp() {
        let levels = LevelPressures::default().ascending();
        assert_eq!(
            levels,
            vec![
                PressureLevel::Bp,
                PressureLevel::BpPlus,
                PressureLevel::Mp,
                PressureLevel::Hp
            ]
        );
    }

    #[test]
    fn method_parses_loosely() {
        assert_eq!("linear".parse::<Method>().unwrap(), Method::Linear);
        assert_eq!("NON-LINEAR".parse::<Method>().unwrap(), Method::NonLinear);
        assert_eq!("non_linear".parse::<Method>().unwrap(), Method::NonLinear);
        assert!("newton".parse::<Method>().is_err());
    }

    #[test]
    fn empty_settings_block_uses_defaults() {
        let settings: Settings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.reference_pressure_pa(PressureLevel::Bp), 103_825.0);
    }

    #[test]
    fn method_serializes_with_dash() {
        let yaml = serde_yaml::to_string(&Method::NonLinear).unwrap();
        assert_eq!(yaml.trim(), "NON-LINEAR");
    }
}
