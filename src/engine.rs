//! The simulation kernel: event dispatch, resource allocation, and the
//! narrow host-facing API (§4.1, §6, §7).
//!
//! Grounded in `kimberlite-sim`'s top-level `Simulation` struct: a single
//! owner of all mutable state, driven one event at a time through `step`,
//! with `start`/`pause`/`resume` guarding which states each call is legal
//! in. Illegal calls return a typed [`EngineError`]; illegal *internal*
//! transitions (§7) are boolean no-ops logged via `tracing::warn!`, never
//! propagated.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, info, warn};

use crate::clock::VirtualClock;
use crate::comparator;
use crate::config::Config;
use crate::entities::{
    OperatingRoom, Patient, PatientId, Priority, RecoveryEntry, RecoveryRoom, Role, Team, TeamId,
    TeamMember, WaitingQueue,
};
use crate::error::{ConfigError, EngineError};
use crate::event::{Event, EventKind, EventQueue};
use crate::generator::PatientGenerator;
use crate::rng::SimRng;
use crate::stats::{StatsReport, Statistics};

/// Lifecycle state of the engine itself, as opposed to any entity inside it
/// (§6, §7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum SimState {
    Created,
    Running,
    Paused,
    /// Reached by running the heap dry or dispatching `SimEnd` (§4.1).
    Finished,
    /// Reached only by an explicit `stop()` call; distinct from `Finished`
    /// so a host can tell a completed run from a cancelled one (§5, §6).
    Stopped,
}

/// A dispatched event, retained for recent-history inspection (§6).
#[derive(Debug, Clone, serde::Serialize)]
pub struct EventRecord {
    pub virtual_ts: u64,
    pub seq: u64,
    pub kind: EventKind,
}

/// Point-in-time snapshot of entity occupancy, for hosts that want a
/// cheaper read than a full [`StatsReport`] (§6).
#[derive(Debug, Clone, serde::Serialize)]
pub struct StateReport {
    pub sim_state: SimState,
    pub now: u64,
    pub waiting_count: usize,
    pub operating_count: usize,
    pub recovering_count: usize,
    pub discharged_count: usize,
    pub free_rooms: usize,
    pub busy_rooms: usize,
    pub cleaning_rooms: usize,
}

const RECENT_EVENTS_CAPACITY: usize = 512;

/// Owns every mutable piece of a single simulation run: clock, event queue,
/// RNG, entities, and accumulated statistics.
pub struct Engine {
    id: String,
    config: Config,
    state: SimState,
    clock: VirtualClock,
    queue: EventQueue,
    rng: SimRng,
    generator: PatientGenerator,

    patients: HashMap<PatientId, Patient>,
    rooms: Vec<OperatingRoom>,
    teams: Vec<Team>,
    waiting: WaitingQueue,
    recovery: RecoveryRoom,

    stats: Statistics,
    op_start_samples: HashMap<Priority, u64>,
    recent_events: VecDeque<EventRecord>,
}

impl Engine {
    /// Validates `config`, then builds the initial entity set and the
    /// elective-batch arrival events (§6).
    pub fn new(id: impl Into<String>, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let id = id.into();

        let mut rng = SimRng::new(config.seed);
        let mut generator = PatientGenerator::new();
        let batch =
            generator.generate_elective_batch(&mut rng, config.elective_count, config.duration_minutes);

        let mut queue = EventQueue::new();
        let mut patients = HashMap::new();
        for patient in batch {
            queue.schedule(patient.arrived, EventKind::Arrival { patient: patient.id });
            patients.insert(patient.id, patient);
        }
        queue.schedule(
            u64::from(config.duration_minutes) * 60,
            EventKind::SimEnd,
        );

        let rooms = (1..=config.rooms)
            .map(|i| OperatingRoom::new(i, config.cleaning_minutes))
            .collect();
        let teams = (1..=config.teams).map(make_default_team).collect();

        info!(
            sim.id = %id,
            rooms = config.rooms,
            teams = config.teams,
            elective_count = config.elective_count,
            "simulation created"
        );

        Ok(Self {
            id,
            waiting: WaitingQueue::new(config.waiting_capacity as usize),
            recovery: RecoveryRoom::new(config.recovery_capacity as usize),
            config,
            state: SimState::Created,
            clock: VirtualClock::new(),
            queue,
            rng,
            generator,
            patients,
            rooms,
            teams,
            stats: Statistics::new(),
            op_start_samples: HashMap::new(),
            recent_events: VecDeque::with_capacity(RECENT_EVENTS_CAPACITY),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// CREATED → RUNNING. The only state `step` may be called from
    /// afterwards until paused or completed (§6, §7).
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.state != SimState::Created {
            return Err(EngineError::AlreadyStarted(self.state));
        }
        self.schedule_next_emergency();
        self.state = SimState::Running;
        info!(sim.id = %self.id, "simulation started");
        Ok(())
    }

    /// RUNNING → PAUSED.
    pub fn pause(&mut self) -> Result<(), EngineError> {
        if self.state != SimState::Running {
            return Err(EngineError::NotRunning(self.state));
        }
        self.state = SimState::Paused;
        debug!(sim.id = %self.id, now = self.clock.now(), "simulation paused");
        Ok(())
    }

    /// PAUSED → RUNNING.
    pub fn resume(&mut self) -> Result<(), EngineError> {
        if self.state != SimState::Paused {
            return Err(EngineError::NotPaused(self.state));
        }
        self.state = SimState::Running;
        debug!(sim.id = %self.id, now = self.clock.now(), "simulation resumed");
        Ok(())
    }

    /// RUNNING or PAUSED → STOPPED. Cancellation is cooperative: this only
    /// flips the state, it does not drain or rewrite the heap; `step` (or
    /// whatever drives it) observes the new state and returns rather than
    /// processing another event (§5).
    pub fn stop(&mut self) -> Result<(), EngineError> {
        if self.state != SimState::Running && self.state != SimState::Paused {
            return Err(EngineError::NotRunning(self.state));
        }
        self.state = SimState::Stopped;
        info!(sim.id = %self.id, now = self.clock.now(), "simulation stopped");
        Ok(())
    }

    /// Processes exactly one event, advancing the clock to its timestamp.
    /// Returns `true` if the run is still live after this step, `false` if
    /// it just completed (either `SimEnd` fired or the queue ran dry).
    ///
    /// Only callable while RUNNING.
    pub fn step(&mut self) -> Result<bool, EngineError> {
        if self.state != SimState::Running {
            return Err(EngineError::NotRunning(self.state));
        }

        let Some(event) = self.queue.pop() else {
            self.complete();
            return Ok(false);
        };

        self.clock.advance_to(event.virtual_ts);
        self.record_event(&event);

        match event.kind.clone() {
            EventKind::Arrival { patient } => self.on_arrival(patient),
            EventKind::EndOp { room } => self.on_end_op(room),
            EventKind::CleaningDone { room } => self.on_cleaning_done(room),
            EventKind::RecoveryExit { patient } => self.on_recovery_exit(patient),
            EventKind::SimEnd => {
                self.complete();
                return Ok(false);
            }
            // Dispatched synchronously from on_arrival/on_end_op rather
            // than ever being popped off the queue (see event.rs).
            EventKind::BeginOp { .. } | EventKind::RecoveryEnter { .. } => {
                warn!(sim.id = %self.id, "unexpected queued event variant");
            }
        }

        Ok(true)
    }

    /// Runs `step` until the simulation completes on its own.
    pub fn run_to_completion(&mut self) -> Result<(), EngineError> {
        while self.step()? {}
        Ok(())
    }

    fn complete(&mut self) {
        if self.state == SimState::Finished {
            return;
        }
        self.state = SimState::Finished;
        info!(sim.id = %self.id, now = self.clock.now(), "simulation finished");
    }

    fn record_event(&mut self, event: &Event) {
        if self.recent_events.len() == RECENT_EVENTS_CAPACITY {
            self.recent_events.pop_front();
        }
        self.recent_events.push_back(EventRecord {
            virtual_ts: event.virtual_ts,
            seq: event.seq,
            kind: event.kind.clone(),
        });
    }

    fn schedule_next_emergency(&mut self) {
        if self.config.emergency_rate_per_hour <= 0.0 {
            return;
        }
        let now = self.clock.now();
        let (patient, _delay) =
            self.generator
                .next_emergency(&mut self.rng, self.config.emergency_rate_per_hour, now);
        let arrival_ts = patient.arrived;
        let id = patient.id;
        self.patients.insert(id, patient);
        self.queue.schedule(arrival_ts, EventKind::Arrival { patient: id });
    }

    fn on_arrival(&mut self, patient_id: PatientId) {
        let priority = match self.patients.get(&patient_id) {
            Some(p) => p.priority,
            None => return,
        };
        if priority == Priority::Emergency {
            self.schedule_next_emergency();
        }

        if self.waiting.is_full() {
            self.stats.record_rejected_arrival();
            self.patients.remove(&patient_id);
            warn!(sim.id = %self.id, patient = patient_id, "waiting room full, arrival rejected");
            return;
        }
        self.stats.record_arrival(priority);
        self.waiting.push_back(patient_id);
        self.allocate_as_many_as_possible();
    }

    /// Matches FREE rooms with allocatable teams and the policy-selected
    /// patient, repeating until no more progress can be made this tick
    /// (§4.1.2).
    fn allocate_as_many_as_possible(&mut self) {
        loop {
            let Some(room_id) = crate::scheduler::find_available_room(&self.rooms) else {
                break;
            };
            if self.waiting.is_empty() {
                break;
            }
            let Some(team_id) = crate::scheduler::find_available_team(&self.teams) else {
                break;
            };

            let ids: Vec<PatientId> = self.waiting.iter().copied().collect();
            let refs: Vec<&Patient> = ids.iter().map(|id| &self.patients[id]).collect();
            let Some(idx) = crate::scheduler::select_index_with(self.config.policy, &self.waiting, &refs)
            else {
                break;
            };
            let patient_id = self.waiting.remove(idx).expect("idx came from this queue");

            self.begin_operation(patient_id, room_id, team_id);
        }
    }

    fn begin_operation(&mut self, patient_id: PatientId, room_id: RoomId, team_id: TeamId) {
        let now = self.clock.now();
        let room = self
            .rooms
            .iter_mut()
            .find(|r| r.id == room_id)
            .expect("room id came from find_available_room");
        if !room.begin_operation(patient_id, team_id, now) {
            warn!(sim.id = %self.id, room = room_id, "room no longer free at allocation time");
            self.waiting.push_front(patient_id);
            return;
        }

        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .expect("team id came from find_available_team");
        team.available = false;

        let patient = self
            .patients
            .get_mut(&patient_id)
            .expect("patient id came from the waiting queue");
        patient.op_started = now;
        let wait = patient.wait(now);
        let priority = patient.priority;
        let estimated_minutes = patient.estimated_minutes;

        self.stats.record_op_start(priority, wait);
        *self.op_start_samples.entry(priority).or_insert(0) += 1;

        self.queue
            .schedule(now + u64::from(estimated_minutes) * 60, EventKind::EndOp { room: room_id });

        debug!(sim.id = %self.id, patient = patient_id, room = room_id, team = team_id, now, "operation begun");
    }

    fn on_end_op(&mut self, room_id: RoomId) {
        let now = self.clock.now();
        let (patient_id, team_id) = {
            let room = match self.rooms.iter_mut().find(|r| r.id == room_id) {
                Some(r) => r,
                None => return,
            };
            let patient_id = room.patient;
            let team_id = room.team;
            if !room.end_operation(now) {
                warn!(sim.id = %self.id, room = room_id, "end-op fired on a room that wasn't busy");
                return;
            }
            (patient_id, team_id)
        };

        if let Some(team_id) = team_id {
            if let Some(team) = self.teams.iter_mut().find(|t| t.id == team_id) {
                team.available = true;
            }
        }

        self.queue.schedule(
            now + u64::from(self.config.cleaning_minutes) * 60,
            EventKind::CleaningDone { room: room_id },
        );

        if let Some(patient_id) = patient_id {
            if let Some(patient) = self.patients.get_mut(&patient_id) {
                patient.op_ended = now;
                let duration = patient.op_ended.saturating_sub(patient.op_started);
                self.stats.record_op_end(duration);
                self.stats.record_room_busy_seconds(duration);

                let entry = RecoveryEntry {
                    patient: patient_id,
                    entry_ts: now,
                    recovery_minutes: self.config.recovery_minutes,
                };
                if self.recovery.push(entry) {
                    self.queue.schedule(
                        now + u64::from(self.config.recovery_minutes) * 60,
                        EventKind::RecoveryExit { patient: patient_id },
                    );
                } else {
                    // Recovery room full: discharge immediately rather than
                    // losing the patient (§7 structural shortcut).
                    warn!(sim.id = %self.id, patient = patient_id, "recovery room full, discharging immediately");
                    self.discharge(patient_id, now);
                }
            }
        }

        self.allocate_as_many_as_possible();
    }

    fn on_cleaning_done(&mut self, room_id: RoomId) {
        let room = match self.rooms.iter_mut().find(|r| r.id == room_id) {
            Some(r) => r,
            None => return,
        };
        if !room.cleaning_complete() {
            warn!(sim.id = %self.id, room = room_id, "cleaning-done fired on a room that wasn't cleaning");
            return;
        }
        self.allocate_as_many_as_possible();
    }

    fn on_recovery_exit(&mut self, patient_id: PatientId) {
        let now = self.clock.now();
        if self.recovery.remove(patient_id).is_none() {
            warn!(sim.id = %self.id, patient = patient_id, "recovery-exit fired for a patient not in recovery");
            return;
        }
        self.discharge(patient_id, now);
    }

    fn discharge(&mut self, patient_id: PatientId, now: u64) {
        if let Some(patient) = self.patients.get_mut(&patient_id) {
            patient.discharged_ts = now;
            let stay = patient.discharged_ts.saturating_sub(patient.arrived);
            let priority = patient.priority;
            self.stats.record_discharge(priority, stay);
        }
    }

    pub fn snapshot_state(&self) -> StateReport {
        let waiting_count = self.waiting.len();
        let operating_count = self.patients.values().filter(|p| p.is_operating()).count();
        let recovering_count = self.recovery.len();
        let discharged_count = self.patients.values().filter(|p| p.is_discharged()).count();

        let mut free_rooms = 0;
        let mut busy_rooms = 0;
        let mut cleaning_rooms = 0;
        for room in &self.rooms {
            match room.state {
                crate::entities::RoomState::Free => free_rooms += 1,
                crate::entities::RoomState::Busy => busy_rooms += 1,
                crate::entities::RoomState::Cleaning => cleaning_rooms += 1,
                crate::entities::RoomState::Maintenance => {}
            }
        }

        StateReport {
            sim_state: self.state,
            now: self.clock.now(),
            waiting_count,
            operating_count,
            recovering_count,
            discharged_count,
            free_rooms,
            busy_rooms,
            cleaning_rooms,
        }
    }

    pub fn snapshot_stats(&self) -> StatsReport {
        StatsReport::build(&self.stats, &self.op_start_samples, self.clock.now(), self.config.rooms)
    }

    pub fn recent_events(&self) -> impl Iterator<Item = &EventRecord> {
        self.recent_events.iter()
    }

    /// Convenience: this run's comparator score against its current stats
    /// snapshot (§4.5).
    pub fn score(&self) -> f64 {
        comparator::score(&self.snapshot_stats())
    }
}

fn make_default_team(id: TeamId) -> Team {
    Team {
        id,
        surgeon: Some(TeamMember {
            id: id * 10 + 1,
            role: Role::Surgeon,
            speciality: "General".to_string(),
        }),
        anaesthetist: Some(TeamMember {
            id: id * 10 + 2,
            role: Role::Anaesthetist,
            speciality: "General".to_string(),
        }),
        nurses: vec![TeamMember {
            id: id * 10 + 3,
            role: Role::Nurse,
            speciality: "General".to_string(),
        }],
        available: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Policy;
    use crate::entities::RoomState;

    fn small_config() -> Config {
        Config::default()
            .with_rooms(1)
            .with_teams(1)
            .with_elective_count(3)
            .with_emergency_rate_per_hour(0.0)
            .with_duration_minutes(9000)
            .with_seed(1)
    }

    #[test]
    fn lifecycle_guards_reject_out_of_order_calls() {
        let mut engine = Engine::new("s1", small_config()).unwrap();
        assert!(matches!(engine.pause(), Err(EngineError::NotRunning(_))));
        engine.start().unwrap();
        assert!(matches!(engine.start(), Err(EngineError::AlreadyStarted(_))));
        engine.pause().unwrap();
        assert!(matches!(engine.resume(), Ok(())));
    }

    #[test]
    fn stop_transitions_running_or_paused_to_stopped() {
        let mut engine = Engine::new("stop-running", small_config()).unwrap();
        engine.start().unwrap();
        engine.stop().unwrap();
        assert_eq!(engine.state, SimState::Stopped);

        let mut engine = Engine::new("stop-paused", small_config()).unwrap();
        engine.start().unwrap();
        engine.pause().unwrap();
        engine.stop().unwrap();
        assert_eq!(engine.state, SimState::Stopped);
    }

    #[test]
    fn stop_is_rejected_outside_running_or_paused() {
        let mut engine = Engine::new("stop-created", small_config()).unwrap();
        assert!(matches!(engine.stop(), Err(EngineError::NotRunning(_))));

        engine.start().unwrap();
        engine.stop().unwrap();
        assert!(matches!(engine.stop(), Err(EngineError::NotRunning(_))));
    }

    #[test]
    fn step_after_stop_errors_and_leaves_events_unprocessed() {
        let mut engine = Engine::new("stop-step", small_config()).unwrap();
        engine.start().unwrap();
        engine.step().unwrap();
        let busy_before = engine.snapshot_state().busy_rooms;
        engine.stop().unwrap();
        assert!(matches!(engine.step(), Err(EngineError::NotRunning(_))));
        assert_eq!(engine.snapshot_state().busy_rooms, busy_before);
    }

    #[test]
    fn run_to_completion_discharges_every_elective_patient_eventually() {
        let mut engine = Engine::new("s2", small_config()).unwrap();
        engine.start().unwrap();
        engine.run_to_completion().unwrap();
        let state = engine.snapshot_state();
        assert_eq!(state.discharged_count, 3);
        assert_eq!(state.waiting_count, 0);
    }

    #[test]
    fn step_after_completion_errors() {
        let mut engine = Engine::new("s3", small_config()).unwrap();
        engine.start().unwrap();
        engine.run_to_completion().unwrap();
        assert!(matches!(engine.step(), Err(EngineError::NotRunning(_))));
    }

    #[test]
    fn single_room_serializes_operations_fcfs() {
        let cfg = small_config().with_policy(Policy::Fcfs);
        let mut engine = Engine::new("s4", cfg).unwrap();
        engine.start().unwrap();
        engine.run_to_completion().unwrap();
        assert_eq!(engine.snapshot_stats().total_discharged, 3);
    }

    #[test]
    fn recent_events_capped_and_nonempty_after_run() {
        let mut engine = Engine::new("s5", small_config()).unwrap();
        engine.start().unwrap();
        engine.run_to_completion().unwrap();
        assert!(engine.recent_events().count() > 0);
        assert!(engine.recent_events().count() <= RECENT_EVENTS_CAPACITY);
    }

    #[test]
    fn determinism_same_seed_same_outcome() {
        let mut e1 = Engine::new("d1", small_config()).unwrap();
        e1.start().unwrap();
        e1.run_to_completion().unwrap();

        let mut e2 = Engine::new("d2", small_config()).unwrap();
        e2.start().unwrap();
        e2.run_to_completion().unwrap();

        assert_eq!(e1.snapshot_stats().total_discharged, e2.snapshot_stats().total_discharged);
        assert_eq!(e1.snapshot_stats().mean_stay_seconds, e2.snapshot_stats().mean_stay_seconds);
    }

    /// Invariants 2, 3, and 4 (room occupancy, population conservation,
    /// event-ordering monotonicity), checked after every single step of a
    /// real run rather than only at the end.
    #[test]
    fn room_occupancy_conservation_and_event_ordering_hold_at_every_step() {
        let mut engine = Engine::new("invariants", small_config().with_emergency_rate_per_hour(2.0)).unwrap();
        engine.start().unwrap();

        let mut last_ts = 0u64;
        while engine.step().unwrap() {
            let now = engine.clock.now();
            assert!(now >= last_ts, "virtual clock went backwards: {now} < {last_ts}");
            last_ts = now;

            for room in &engine.rooms {
                match room.state {
                    RoomState::Busy => {
                        assert!(room.patient.is_some(), "busy room {} has no patient", room.id);
                        assert!(room.team.is_some(), "busy room {} has no team", room.id);
                    }
                    RoomState::Free => {
                        assert!(room.patient.is_none(), "free room {} still holds a patient", room.id);
                        assert!(room.team.is_none(), "free room {} still holds a team", room.id);
                    }
                    RoomState::Cleaning | RoomState::Maintenance => {}
                }
            }

            let waiting = engine.patients.values().filter(|p| p.is_waiting()).count();
            let operating = engine.patients.values().filter(|p| p.is_operating()).count();
            let recovering = engine.patients.values().filter(|p| p.is_recovering()).count();
            let discharged = engine.patients.values().filter(|p| p.is_discharged()).count();
            assert_eq!(waiting + operating + recovering + discharged, engine.patients.len());
            assert_eq!(
                engine.patients.len() as u64 + engine.stats.rejected_arrivals(),
                engine.stats.total_arrivals(),
                "admitted + rejected must equal every arrival ever generated"
            );
        }
    }

    /// Invariant 1: for every discharged patient, the four lifecycle
    /// timestamps are non-decreasing.
    #[test]
    fn discharged_patients_have_monotonic_lifecycle_timestamps() {
        let mut engine = Engine::new("timestamps", small_config()).unwrap();
        engine.start().unwrap();
        engine.run_to_completion().unwrap();

        let discharged: Vec<&Patient> = engine.patients.values().filter(|p| p.is_discharged()).collect();
        assert!(!discharged.is_empty());
        for p in discharged {
            assert!(p.arrived <= p.op_started, "patient {}: arrived after op_started", p.id);
            assert!(p.op_started <= p.op_ended, "patient {}: op_started after op_ended", p.id);
            assert!(p.op_ended <= p.discharged_ts, "patient {}: op_ended after discharge", p.id);
        }
    }

    /// Invariant 6: under FCFS with a single room, an earlier arrival never
    /// starts its operation later than a subsequently-arrived one.
    #[test]
    fn fcfs_never_starts_a_later_arrival_before_an_earlier_one() {
        let cfg = Config::default()
            .with_policy(Policy::Fcfs)
            .with_rooms(1)
            .with_teams(1)
            .with_elective_count(8)
            .with_emergency_rate_per_hour(0.0)
            .with_duration_minutes(20_000)
            .with_seed(5);
        let mut engine = Engine::new("fcfs-fair", cfg).unwrap();
        engine.start().unwrap();
        engine.run_to_completion().unwrap();

        let mut started: Vec<&Patient> = engine.patients.values().filter(|p| p.op_started > 0).collect();
        assert_eq!(started.len(), 8);
        started.sort_by_key(|p| p.arrived);
        for pair in started.windows(2) {
            let (earlier, later) = (pair[0], pair[1]);
            if earlier.arrived < later.arrived {
                assert!(
                    earlier.op_started <= later.op_started,
                    "patient {} (arrived {}) started after patient {} (arrived {})",
                    earlier.id,
                    earlier.arrived,
                    later.id,
                    later.arrived
                );
            }
        }
    }

    /// Invariant 7: PRIORITY never starts an elective's operation while an
    /// emergency that had already arrived by then is still waiting.
    #[test]
    fn priority_policy_never_lets_a_waiting_emergency_be_overtaken() {
        let cfg = Config::default()
            .with_policy(Policy::Priority)
            .with_rooms(1)
            .with_teams(1)
            .with_elective_count(6)
            .with_emergency_rate_per_hour(4.0)
            .with_duration_minutes(20_000)
            .with_seed(77);
        let mut engine = Engine::new("priority-dominance", cfg).unwrap();
        engine.start().unwrap();
        engine.run_to_completion().unwrap();

        let emergencies: Vec<&Patient> =
            engine.patients.values().filter(|p| p.priority == Priority::Emergency).collect();
        let electives: Vec<&Patient> =
            engine.patients.values().filter(|p| p.priority == Priority::Elective).collect();
        assert!(!emergencies.is_empty(), "scenario generated no emergencies to check");
        assert!(electives.iter().any(|p| p.op_started > 0));

        for e in &emergencies {
            for el in &electives {
                if e.op_started > 0 && el.op_started > 0 && e.arrived <= el.op_started {
                    assert!(
                        e.op_started <= el.op_started,
                        "emergency {} (arrived {}) overtaken by elective {} (started {})",
                        e.id,
                        e.arrived,
                        el.id,
                        el.op_started
                    );
                }
            }
        }
    }
}
