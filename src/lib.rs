//! Deterministic discrete-event simulation of a hospital operating-theatre
//! complex: patients arrive, queue under a configurable policy, are matched
//! to a room and surgical team, operate, recover, and are discharged.
//!
//! The crate exposes a narrow host-facing API (see [`engine::Engine`]) and
//! keeps everything else — entity state machines, the event queue, the
//! scheduling policies, and the online statistics — as internal modules
//! driven entirely by that API. There is no I/O, no wall-clock coupling,
//! and no UI; hosts step the engine themselves and read snapshots back out.

mod clock;
mod comparator;
mod config;
mod engine;
mod entities;
mod error;
mod event;
mod generator;
mod rng;
mod scheduler;
mod stats;

pub use clock::VirtualClock;
pub use comparator::{rank, score};
pub use config::{Config, Policy};
pub use engine::{Engine, EventRecord, SimState, StateReport};
pub use entities::{
    MemberId, OperationType, Patient, PatientId, Priority, Role, RoomId, RoomState, Team,
    TeamId, TeamMember,
};
pub use error::{ConfigError, EngineError};
pub use event::EventKind;
pub use stats::StatsReport;
