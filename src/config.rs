//! Simulation configuration.
//!
//! Mirrors the builder style of `kimberlite-sim`'s `SimConfig`: a plain
//! struct with sensible defaults and `with_*` builder methods, validated
//! once at `Engine::new` rather than scattered through the kernel.

use crate::error::ConfigError;

/// Scheduling discipline used to select the next patient from the waiting
/// queue (§4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Policy {
    /// First-come-first-served: the earliest-inserted patient.
    Fcfs,
    /// Minimum numeric priority first, ties by earliest arrival then id.
    Priority,
    /// Shortest estimated duration first, ties by priority then arrival.
    Sjf,
}

impl Default for Policy {
    fn default() -> Self {
        Policy::Fcfs
    }
}

/// Configuration for a simulation run (§6).
#[derive(Debug, Clone)]
pub struct Config {
    pub name: String,
    pub duration_minutes: u32,
    pub policy: Policy,
    pub rooms: u32,
    pub teams: u32,
    pub waiting_capacity: u32,
    pub recovery_capacity: u32,
    pub emergency_rate_per_hour: f64,
    pub elective_count: u32,
    pub speed_factor: f64,
    pub cleaning_minutes: u32,
    pub recovery_minutes: u32,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "Simulation".to_string(),
            duration_minutes: 480,
            policy: Policy::Fcfs,
            rooms: 3,
            teams: 3,
            waiting_capacity: 50,
            recovery_capacity: 20,
            emergency_rate_per_hour: 2.0,
            elective_count: 10,
            speed_factor: 0.0,
            cleaning_minutes: 15,
            recovery_minutes: 60,
            seed: 0,
        }
    }
}

impl Config {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_rooms(mut self, rooms: u32) -> Self {
        self.rooms = rooms;
        self
    }

    pub fn with_teams(mut self, teams: u32) -> Self {
        self.teams = teams;
        self
    }

    pub fn with_waiting_capacity(mut self, capacity: u32) -> Self {
        self.waiting_capacity = capacity;
        self
    }

    pub fn with_recovery_capacity(mut self, capacity: u32) -> Self {
        self.recovery_capacity = capacity;
        self
    }

    pub fn with_emergency_rate_per_hour(mut self, rate: f64) -> Self {
        self.emergency_rate_per_hour = rate;
        self
    }

    pub fn with_elective_count(mut self, count: u32) -> Self {
        self.elective_count = count;
        self
    }

    pub fn with_speed_factor(mut self, factor: f64) -> Self {
        self.speed_factor = factor;
        self
    }

    pub fn with_cleaning_minutes(mut self, minutes: u32) -> Self {
        self.cleaning_minutes = minutes;
        self
    }

    pub fn with_recovery_minutes(mut self, minutes: u32) -> Self {
        self.recovery_minutes = minutes;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates all range constraints from §6, failing fast rather than
    /// letting the kernel panic or misbehave mid-run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_minutes < 1 {
            return Err(ConfigError::new(
                "duration_minutes",
                "must be >= 1",
            ));
        }
        if self.rooms < 1 {
            return Err(ConfigError::new("rooms", "must be >= 1"));
        }
        if self.teams < 1 {
            return Err(ConfigError::new("teams", "must be >= 1"));
        }
        if self.waiting_capacity < 1 {
            return Err(ConfigError::new("waiting_capacity", "must be >= 1"));
        }
        if self.recovery_capacity < 1 {
            return Err(ConfigError::new("recovery_capacity", "must be >= 1"));
        }
        if self.emergency_rate_per_hour < 0.0 {
            return Err(ConfigError::new(
                "emergency_rate_per_hour",
                "must be >= 0",
            ));
        }
        if self.speed_factor < 0.0 {
            return Err(ConfigError::new("speed_factor", "must be >= 0"));
        }
        if !self.emergency_rate_per_hour.is_finite() {
            return Err(ConfigError::new(
                "emergency_rate_per_hour",
                "must be finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_rooms_rejected() {
        let err = Config::default().with_rooms(0).validate().unwrap_err();
        assert_eq!(err.field, "rooms");
    }

    #[test]
    fn negative_emergency_rate_rejected() {
        let err = Config::default()
            .with_emergency_rate_per_hour(-1.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "emergency_rate_per_hour");
    }

    #[test]
    fn builder_chains() {
        let cfg = Config::default()
            .with_name("S1")
            .with_rooms(1)
            .with_teams(1)
            .with_policy(Policy::Sjf)
            .with_seed(42);
        assert_eq!(cfg.name, "S1");
        assert_eq!(cfg.rooms, 1);
        assert_eq!(cfg.policy, Policy::Sjf);
        assert_eq!(cfg.seed, 42);
    }
}
