//! Editing API for [`Network`].
//!
//! Every `create_*` call validates the new row against the current tables and
//! leaves the network untouched when it is rejected. Bus roles are kept in
//! sync with the attached feeders, stations and loads.

use crate::schema::{Bus, BusRole, Feeder, Load, Network, Pipe, PressureLevel, Station};
use crate::validate::{
    ValidationError, check_bus, check_feeder, check_load, check_new_name, check_pipe,
    check_station,
};

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn bus(&self, name: &str) -> Option<&Bus> {
        self.buses.iter().find(|b| b.name == name)
    }

    pub fn pipe(&self, name: &str) -> Option<&Pipe> {
        self.pipes.iter().find(|p| p.name == name)
    }

    fn bus_level(&self, name: &str) -> Option<PressureLevel> {
        self.bus(name).map(|b| b.level)
    }

    pub fn create_bus(
        &mut self,
        name: &str,
        level: PressureLevel,
        zone: Option<&str>,
    ) -> Result<(), ValidationError> {
        let bus = Bus {
            name: name.to_string(),
            level,
            zone: zone.map(str::to_string),
            role: BusRole::Passive,
        };
        check_bus(&bus)?;
        check_new_name("bus", self.buses.iter().map(|b| b.name.as_str()), name)?;
        self.buses.push(bus);
        Ok(())
    }

    pub fn create_pipe(
        &mut self,
        name: &str,
        from_bus: &str,
        to_bus: &str,
        length_m: f64,
        diameter_m: f64,
        material: &str,
    ) -> Result<(), ValidationError> {
        let pipe = Pipe {
            name: name.to_string(),
            from_bus: from_bus.to_string(),
            to_bus: to_bus.to_string(),
            length_m,
            diameter_m,
            material: material.to_string(),
            in_service: true,
        };
        check_new_name("pipe", self.pipes.iter().map(|p| p.name.as_str()), name)?;
        check_pipe(&pipe, |bus: &str| self.bus_level(bus))?;
        self.pipes.push(pipe);
        Ok(())
    }

    /// Takes a pipe out of (or back into) service. Returns false if no pipe has that name.
    pub fn set_pipe_in_service(&mut self, name: &str, in_service: bool) -> bool {
        match self.pipes.iter_mut().find(|p| p.name == name) {
            Some(pipe) => {
                pipe.in_service = in_service;
                true
            }
            None => false,
        }
    }

    pub fn create_station(
        &mut self,
        name: &str,
        bus_high: &str,
        bus_low: &str,
        p_lim_kw: f64,
        p_pa: f64,
    ) -> Result<(), ValidationError> {
        let station = Station {
            name: name.to_string(),
            bus_high: bus_high.to_string(),
            bus_low: bus_low.to_string(),
            p_lim_kw,
            p_pa,
        };
        check_new_name(
            "station",
            self.stations.iter().map(|s| s.name.as_str()),
            name,
        )?;
        check_station(self, &station, |bus: &str| self.bus_level(bus))?;
        self.check_free_supply(bus_low, name)?;
        self.stations.push(station);
        self.assign_roles();
        Ok(())
    }

    pub fn create_feeder(
        &mut self,
        name: &str,
        bus: &str,
        p_lim_kw: f64,
        p_pa: f64,
    ) -> Result<(), ValidationError> {
        let feeder = Feeder {
            name: name.to_string(),
            bus: bus.to_string(),
            p_lim_kw,
            p_pa,
        };
        check_new_name("feeder", self.feeders.iter().map(|f| f.name.as_str()), name)?;
        check_feeder(&feeder, |bus: &str| self.bus_level(bus))?;
        self.check_free_supply(bus, name)?;
        self.feeders.push(feeder);
        self.assign_roles();
        Ok(())
    }

    pub fn create_load(
        &mut self,
        name: &str,
        bus: &str,
        p_kw: f64,
        min_p_pa: f64,
        scaling: f64,
    ) -> Result<(), ValidationError> {
        let load = Load {
            name: name.to_string(),
            bus: bus.to_string(),
            p_kw,
            min_p_pa,
            scaling,
        };
        check_new_name("load", self.loads.iter().map(|l| l.name.as_str()), name)?;
        check_load(&load, |bus: &str| self.bus_level(bus))?;
        self.loads.push(load);
        self.assign_roles();
        Ok(())
    }

    fn check_free_supply(&self, bus: &str, name: &str) -> Result<(), ValidationError> {
        let existing = self
            .feeders
            .iter()
            .filter(|f| f.bus == bus)
            .map(|f| f.name.as_str())
            .chain(
                self.stations
                    .iter()
                    .filter(|s| s.bus_low == bus)
                    .map(|s| s.name.as_str()),
            )
            .next();
        match existing {
            Some(first) => Err(ValidationError::ConflictingSupply {
                bus: bus.to_string(),
                first: first.to_string(),
                second: name.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Recomputes every bus role: SOURCE wins over SINK, SINK over PASSIVE.
    pub fn assign_roles(&mut self) {
        let mut roles: Vec<BusRole> = vec![BusRole::Passive; self.buses.len()];
        let index_of = |name: &str| self.buses.iter().position(|b| b.name == name);

        let sinks = self
            .loads
            .iter()
            .map(|l| l.bus.as_str())
            .chain(self.stations.iter().map(|s| s.bus_high.as_str()));
        for bus in sinks {
            if let Some(i) = index_of(bus) {
                roles[i] = BusRole::Sink;
            }
        }

        let sources = self
            .feeders
            .iter()
            .map(|f| f.bus.as_str())
            .chain(self.stations.iter().map(|s| s.bus_low.as_str()));
        for bus in sources {
            if let Some(i) = index_of(bus) {
                roles[i] = BusRole::Source;
            }
        }

        for (bus, role) in self.buses.iter_mut().zip(roles) {
            bus.role = role;
        }
    }

    /// Levels that have at least one bus, ascending by nominal pressure.
    pub fn levels_present(&self) -> Vec<PressureLevel> {
        self.settings
            .levels
            .ascending()
            .into_iter()
            .filter(|level| self.buses.iter().any(|b| b.level == *level))
            .collect()
    }
}
